use crate::domain::entities::cache::Cache;
use crate::domain::entities::coordinates::Coordinates;
use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use crate::domain::ports::geo_provider::GeoProvider;
use crate::domain::values::city_name::normalize;
use std::sync::Arc;

/// City name to coordinates, going to the geocoder only on a cache miss.
pub struct ResolveCityUseCase {
    geo: Arc<dyn GeoProvider>,
    store: Arc<dyn ConfigStore>,
}

impl ResolveCityUseCase {
    pub fn new(geo: Arc<dyn GeoProvider>, store: Arc<dyn ConfigStore>) -> Self {
        Self { geo, store }
    }

    pub async fn execute(&self, city: &str, cache: &mut Cache) -> Result<Coordinates, DomainError> {
        let key = normalize(city);
        if key.is_empty() {
            return Err(DomainError::GeoLookup(format!(
                "{city:?} is not a city name"
            )));
        }
        if let Some(hit) = cache.get(&key) {
            tracing::debug!(city = %key, "coordinates served from cache");
            return Ok(hit.clone());
        }

        tracing::info!(city = %key, "getting coordinates");
        let best = self
            .geo
            .search(&key)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::GeoLookup(format!("no location found for {key:?}")))?;

        cache.put(key.clone(), best.clone());
        // The lookup already succeeded; a failed write only costs a future lookup.
        if let Err(e) = self.store.save(cache) {
            tracing::warn!(city = %key, "could not persist coordinates: {e}");
        }

        Ok(best)
    }
}
