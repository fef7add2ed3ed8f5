use crate::domain::entities::coordinates::Coordinates;
use crate::domain::entities::weather::WeatherSnapshot;
use crate::domain::error::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions plus two days of hourly forecast, localized to the
    /// location's timezone.
    async fn forecast(&self, coordinates: &Coordinates) -> Result<WeatherSnapshot, DomainError>;
}
