use crate::domain::entities::coordinates::Coordinates;
use crate::domain::entities::weather::WeatherSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::weather_provider::WeatherProvider;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Forecast provider returning a canned snapshot for any coordinates.
pub struct StaticWeatherProvider {
    snapshot: Option<WeatherSnapshot>,
    error: String,
    calls: AtomicUsize,
    last_coordinates: Mutex<Option<Coordinates>>,
}

impl StaticWeatherProvider {
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            error: String::new(),
            calls: AtomicUsize::new(0),
            last_coordinates: Mutex::new(None),
        }
    }

    /// A provider whose every request fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            snapshot: None,
            error: message.into(),
            calls: AtomicUsize::new(0),
            last_coordinates: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_coordinates(&self) -> Option<Coordinates> {
        self.last_coordinates.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl WeatherProvider for StaticWeatherProvider {
    async fn forecast(&self, coordinates: &Coordinates) -> Result<WeatherSnapshot, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_coordinates.lock() {
            *last = Some(coordinates.clone());
        }
        self.snapshot
            .clone()
            .ok_or_else(|| DomainError::WeatherFetch(self.error.clone()))
    }
}
