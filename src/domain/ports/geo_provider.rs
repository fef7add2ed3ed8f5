use crate::domain::entities::coordinates::Coordinates;
use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Forward geocoding: free-text city name to ranked candidates.
#[async_trait]
pub trait GeoProvider: Send + Sync {
    /// Candidates in the provider's ranking order. An empty vector means the
    /// city is unknown.
    async fn search(&self, city: &str) -> Result<Vec<Coordinates>, DomainError>;
}
