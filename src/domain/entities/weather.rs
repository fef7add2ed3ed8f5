use crate::domain::error::DomainError;
use crate::domain::values::timestamp::parse_timestamp;
use chrono::NaiveDateTime;

/// Conditions at the time of the provider's last update.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Local time, `YYYY-MM-DDTHH:MM`.
    pub timestamp: String,
    pub temperature_c: f64,
    /// Millimetres over the preceding interval.
    pub precipitation: f64,
    pub is_daytime: bool,
}

/// Hourly forecast as parallel sequences; index `i` of every vector refers to
/// the same hour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlySeries {
    pub timestamps: Vec<String>,
    pub temperatures_c: Vec<f64>,
    /// `None` where the forecast model has no value for that hour.
    pub precipitation_probability_pct: Vec<Option<u8>>,
    pub cloud_cover_pct: Vec<Option<u8>>,
}

impl HourlySeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    fn check_aligned(&self) -> Result<(), DomainError> {
        let n = self.timestamps.len();
        let lengths = [
            ("temperature_2m", self.temperatures_c.len()),
            ("precipitation_probability", self.precipitation_probability_pct.len()),
            ("cloud_cover", self.cloud_cover_pct.len()),
        ];
        for (field, len) in lengths {
            if len != n {
                return Err(DomainError::WeatherFetch(format!(
                    "hourly.{field} has {len} entries but hourly.time has {n}"
                )));
            }
        }
        Ok(())
    }
}

/// A parsed forecast. Only constructed through [`WeatherSnapshot::new`],
/// which rejects misaligned hourly data.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    timezone: String,
    current: CurrentConditions,
    hourly: HourlySeries,
}

impl WeatherSnapshot {
    pub fn new(
        timezone: String,
        current: CurrentConditions,
        hourly: HourlySeries,
    ) -> Result<Self, DomainError> {
        hourly.check_aligned()?;
        Ok(Self {
            timezone,
            current,
            hourly,
        })
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn current(&self) -> &CurrentConditions {
        &self.current
    }

    pub fn hourly(&self) -> &HourlySeries {
        &self.hourly
    }

    /// Parsed `current.timestamp`. Everything that does hour arithmetic
    /// depends on this, so a malformed value is an error, never midnight.
    pub fn updated_at(&self) -> Result<NaiveDateTime, DomainError> {
        parse_timestamp(&self.current.timestamp)
    }
}
