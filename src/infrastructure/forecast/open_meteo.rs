use crate::domain::entities::coordinates::Coordinates;
use crate::domain::entities::weather::{CurrentConditions, HourlySeries, WeatherSnapshot};
use crate::domain::error::DomainError;
use crate::domain::ports::weather_provider::WeatherProvider;
use async_trait::async_trait;
use serde::Deserialize;

const CURRENT_FIELDS: &str = "temperature_2m,precipitation,is_day";
const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,cloud_cover";
const FORECAST_DAYS: u8 = 2;

/// Open-Meteo forecast API. Free, no key.
pub struct OpenMeteoProvider {
    base_url: String,
    client: reqwest::Client,
}

impl OpenMeteoProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Forecast URL with the coordinate strings embedded exactly as cached.
    pub fn forecast_url(&self, coordinates: &Coordinates) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={CURRENT_FIELDS}&hourly={HOURLY_FIELDS}&timezone=auto&forecast_days={FORECAST_DAYS}",
            self.base_url, coordinates.latitude, coordinates.longitude
        )
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    timezone: String,
    current: CurrentBlock,
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: String,
    temperature_2m: f64,
    precipitation: f64,
    is_day: u8,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    precipitation_probability: Vec<Option<u8>>,
    cloud_cover: Vec<Option<u8>>,
}

impl ForecastResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, DomainError> {
        WeatherSnapshot::new(
            self.timezone,
            CurrentConditions {
                timestamp: self.current.time,
                temperature_c: self.current.temperature_2m,
                precipitation: self.current.precipitation,
                is_daytime: self.current.is_day != 0,
            },
            HourlySeries {
                timestamps: self.hourly.time,
                temperatures_c: self.hourly.temperature_2m,
                precipitation_probability_pct: self.hourly.precipitation_probability,
                cloud_cover_pct: self.hourly.cloud_cover,
            },
        )
    }
}

fn parse_forecast(body: &str) -> Result<WeatherSnapshot, DomainError> {
    let data: ForecastResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::WeatherFetch(format!("unexpected forecast response: {e}")))?;
    data.into_snapshot()
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn forecast(&self, coordinates: &Coordinates) -> Result<WeatherSnapshot, DomainError> {
        let url = self.forecast_url(coordinates);
        tracing::debug!(%url, "fetching forecast");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::WeatherFetch(format!("forecast API unreachable: {e}")))?;

        if !resp.status().is_success() {
            return Err(DomainError::WeatherFetch(format!(
                "forecast API returned {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DomainError::WeatherFetch(format!("reading forecast response: {e}")))?;
        parse_forecast(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "latitude": 32.7,
        "longitude": -117.1,
        "timezone": "America/Los_Angeles",
        "timezone_abbreviation": "PDT",
        "current_units": {"time": "iso8601", "temperature_2m": "°C"},
        "current": {"time": "2024-05-16T14:00", "interval": 900, "temperature_2m": 21.4, "precipitation": 0.0, "is_day": 1},
        "hourly": {
            "time": ["2024-05-16T00:00", "2024-05-16T01:00", "2024-05-16T02:00"],
            "temperature_2m": [16.1, 15.8, 15.2],
            "precipitation_probability": [0, 3, 10],
            "cloud_cover": [75, 80, 100]
        }
    }"#;

    #[test]
    fn test_forecast_url() {
        let provider = OpenMeteoProvider::new(reqwest::Client::new(), "https://api.open-meteo.com/v1");
        let url = provider.forecast_url(&Coordinates::new("32.7174202", "-117.1627728", "San Diego"));
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=32.7174202&longitude=-117.1627728\
             &current=temperature_2m,precipitation,is_day\
             &hourly=temperature_2m,precipitation_probability,cloud_cover\
             &timezone=auto&forecast_days=2"
        );
    }

    #[test]
    fn test_parse_sample() {
        let snap = parse_forecast(SAMPLE).unwrap();
        assert_eq!(snap.timezone(), "America/Los_Angeles");
        assert_eq!(snap.current().timestamp, "2024-05-16T14:00");
        assert_eq!(snap.current().temperature_c, 21.4);
        assert!(snap.current().is_daytime);
        assert_eq!(snap.hourly().len(), 3);
        assert_eq!(
            snap.hourly().precipitation_probability_pct,
            vec![Some(0), Some(3), Some(10)]
        );
        assert_eq!(snap.hourly().cloud_cover_pct, vec![Some(75), Some(80), Some(100)]);
    }

    #[test]
    fn test_night() {
        let body = SAMPLE.replace(r#""is_day": 1"#, r#""is_day": 0"#);
        assert!(!parse_forecast(&body).unwrap().current().is_daytime);
    }

    #[test]
    fn test_missing_field_is_fetch_error() {
        let body = SAMPLE.replace(r#""timezone": "America/Los_Angeles","#, "");
        assert!(matches!(
            parse_forecast(&body),
            Err(DomainError::WeatherFetch(_))
        ));
    }

    #[test]
    fn test_null_hourly_values_are_kept_as_missing() {
        let body = SAMPLE
            .replace("[0, 3, 10]", "[null, null, null]")
            .replace("[75, 80, 100]", "[75, null, 100]");
        let snap = parse_forecast(&body).unwrap();
        assert_eq!(snap.hourly().precipitation_probability_pct, vec![None; 3]);
        assert_eq!(snap.hourly().cloud_cover_pct, vec![Some(75), None, Some(100)]);
        assert_eq!(snap.hourly().temperatures_c, vec![16.1, 15.8, 15.2]);
    }

    #[test]
    fn test_misaligned_hourly_is_fetch_error() {
        let body = SAMPLE.replace("[75, 80, 100]", "[75, 80]");
        assert!(matches!(
            parse_forecast(&body),
            Err(DomainError::WeatherFetch(_))
        ));
    }
}
