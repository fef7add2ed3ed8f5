use crate::domain::entities::weather::WeatherSnapshot;
use crate::domain::error::DomainError;
use crate::domain::values::timestamp::{clock_label, parse_timestamp};
use chrono::Timelike;

/// Number of hourly samples on the graph: the current hour plus the next 24.
pub const WINDOW_HOURS: usize = 25;

/// Indices into a series of `len` hourly entries for the window starting at
/// `hour_now`, wrapping modulo `len`.
pub fn window_indices(hour_now: usize, len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (hour_now..hour_now + WINDOW_HOURS).map(|i| i % len).collect()
}

/// Temperatures and their clock labels for the graph window.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSeries {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

impl GraphSeries {
    /// Sample the hourly temperatures starting at the hour of the last
    /// update. Hours whose timestamp does not parse are left out.
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Result<Self, DomainError> {
        let hourly = snapshot.hourly();
        if hourly.is_empty() {
            return Err(DomainError::Graph("no hourly data to plot".into()));
        }

        let hour_now = snapshot.updated_at()?.hour() as usize;
        if hourly.len() < hour_now + WINDOW_HOURS {
            tracing::warn!(
                entries = hourly.len(),
                hour_now,
                "hourly series is shorter than the graph window, early hours will repeat"
            );
        }

        let mut values = Vec::with_capacity(WINDOW_HOURS);
        let mut labels = Vec::with_capacity(WINDOW_HOURS);
        for idx in window_indices(hour_now, hourly.len()) {
            let stamp = &hourly.timestamps[idx];
            let time = match parse_timestamp(stamp) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(index = idx, "skipping graph point: {e}");
                    continue;
                }
            };
            values.push(hourly.temperatures_c[idx]);
            labels.push(clock_label(&time));
        }

        if values.is_empty() {
            return Err(DomainError::Graph(
                "no hourly timestamp in the window could be parsed".into(),
            ));
        }

        Ok(Self { values, labels })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::weather::{CurrentConditions, HourlySeries};

    fn snapshot(now: &str, timestamps: Vec<String>) -> WeatherSnapshot {
        let n = timestamps.len();
        let hourly = HourlySeries {
            temperatures_c: (0..n).map(|i| i as f64).collect(),
            precipitation_probability_pct: vec![None; n],
            cloud_cover_pct: vec![None; n],
            timestamps,
        };
        let current = CurrentConditions {
            timestamp: now.into(),
            temperature_c: 20.0,
            precipitation: 0.0,
            is_daytime: true,
        };
        WeatherSnapshot::new("UTC".into(), current, hourly).unwrap()
    }

    fn two_days() -> Vec<String> {
        (0..48)
            .map(|i| format!("2024-05-{:02}T{:02}:00", 16 + i / 24, i % 24))
            .collect()
    }

    #[test]
    fn test_window_from_last_hour_of_two_days() {
        let idx = window_indices(23, 48);
        assert_eq!(idx.len(), WINDOW_HOURS);
        assert_eq!(idx, (23..48).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_wraps_past_end() {
        let idx = window_indices(23, 24);
        assert_eq!(idx[0], 23);
        assert_eq!(idx[1], 0);
        assert_eq!(idx[24], 23);
    }

    #[test]
    fn test_window_of_empty_series() {
        assert!(window_indices(5, 0).is_empty());
    }

    #[test]
    fn test_series_starts_at_current_hour() {
        let snap = snapshot("2024-05-16T14:00", two_days());
        let series = GraphSeries::from_snapshot(&snap).unwrap();
        assert_eq!(series.len(), WINDOW_HOURS);
        assert_eq!(series.values[0], 14.0);
        assert_eq!(series.labels[0], "14:00");
        assert_eq!(series.values[24], 38.0);
        assert_eq!(series.labels[24], "14:00");
        assert_eq!(series.labels[10], "00:00");
    }

    #[test]
    fn test_unparseable_hours_are_skipped() {
        let mut stamps = two_days();
        stamps[15] = "not-a-time".into();
        let snap = snapshot("2024-05-16T14:00", stamps);
        let series = GraphSeries::from_snapshot(&snap).unwrap();
        assert_eq!(series.len(), WINDOW_HOURS - 1);
        assert!(!series.values.contains(&15.0));
        assert_eq!(series.values.len(), series.labels.len());
    }

    #[test]
    fn test_bad_current_timestamp_aborts() {
        let snap = snapshot("2024-05-16", two_days());
        assert!(matches!(
            GraphSeries::from_snapshot(&snap),
            Err(DomainError::TimeParse(_))
        ));
    }

    #[test]
    fn test_empty_hourly_is_graph_error() {
        let snap = snapshot("2024-05-16T14:00", vec![]);
        assert!(matches!(
            GraphSeries::from_snapshot(&snap),
            Err(DomainError::Graph(_))
        ));
    }
}
