use crate::domain::entities::coordinates::Coordinates;
use crate::domain::entities::weather::WeatherSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::weather_provider::WeatherProvider;
use std::sync::Arc;

pub struct FetchWeatherUseCase {
    provider: Arc<dyn WeatherProvider>,
}

impl FetchWeatherUseCase {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, coordinates: &Coordinates) -> Result<WeatherSnapshot, DomainError> {
        tracing::info!(location = %coordinates, "getting weather");
        let snapshot = self.provider.forecast(coordinates).await?;
        tracing::debug!(
            timezone = snapshot.timezone(),
            hours = snapshot.hourly().len(),
            "forecast received"
        );
        Ok(snapshot)
    }
}
