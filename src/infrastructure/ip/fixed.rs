use crate::domain::error::DomainError;
use crate::domain::ports::ip_locator::IpLocator;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// IP locator with a fixed answer. `None` makes the matching call fail.
pub struct StaticIpLocator {
    ip: Option<String>,
    city: Option<String>,
    city_lookups: AtomicUsize,
}

impl StaticIpLocator {
    pub fn new(ip: Option<&str>, city: Option<&str>) -> Self {
        Self {
            ip: ip.map(str::to_string),
            city: city.map(str::to_string),
            city_lookups: AtomicUsize::new(0),
        }
    }

    pub fn offline() -> Self {
        Self::new(None, None)
    }

    pub fn city_lookups(&self) -> usize {
        self.city_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IpLocator for StaticIpLocator {
    async fn public_ip(&self) -> Result<String, DomainError> {
        self.ip
            .clone()
            .ok_or_else(|| DomainError::IpLookup("offline".into()))
    }

    async fn city_for_ip(&self, ip: &str) -> Result<String, DomainError> {
        self.city_lookups.fetch_add(1, Ordering::SeqCst);
        self.city
            .clone()
            .ok_or_else(|| DomainError::IpLookup(format!("no city known for {ip}")))
    }
}
