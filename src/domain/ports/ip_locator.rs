use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Derives a default city from the caller's public IP.
#[async_trait]
pub trait IpLocator: Send + Sync {
    async fn public_ip(&self) -> Result<String, DomainError>;
    async fn city_for_ip(&self, ip: &str) -> Result<String, DomainError>;
}
