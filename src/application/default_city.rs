use crate::domain::entities::cache::Cache;
use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use crate::domain::ports::ip_locator::IpLocator;
use crate::domain::values::city_name::normalize;
use std::sync::Arc;

/// Picks the city to report on when none was given.
///
/// The city is derived from the public IP and remembered together with that
/// IP; ipinfo is only asked again once the IP changes. When the lookup fails
/// the remembered city is used if there is one.
pub struct DefaultCityUseCase {
    locator: Arc<dyn IpLocator>,
    store: Arc<dyn ConfigStore>,
}

impl DefaultCityUseCase {
    pub fn new(locator: Arc<dyn IpLocator>, store: Arc<dyn ConfigStore>) -> Self {
        Self { locator, store }
    }

    pub async fn execute(&self, cache: &mut Cache) -> Result<String, DomainError> {
        match self.derive(cache).await {
            Ok(city) => Ok(city),
            Err(e) if !cache.city.is_empty() => {
                tracing::warn!(city = %cache.city, "{e}; using last known city");
                Ok(cache.city.clone())
            }
            Err(e) => Err(e),
        }
    }

    async fn derive(&self, cache: &mut Cache) -> Result<String, DomainError> {
        let ip = self.locator.public_ip().await?;
        if ip == cache.last_ip && !cache.city.is_empty() {
            return Ok(cache.city.clone());
        }

        tracing::info!(%ip, "IP address changed, updating city");
        let city = normalize(&self.locator.city_for_ip(&ip).await?);
        cache.city = city.clone();
        cache.last_ip = ip;
        if let Err(e) = self.store.save(cache) {
            tracing::warn!("could not persist default city: {e}");
        }
        Ok(city)
    }
}
