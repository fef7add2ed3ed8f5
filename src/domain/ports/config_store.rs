use crate::domain::entities::cache::Cache;
use crate::domain::error::DomainError;

/// Persistence for the config document.
///
/// There is no locking: one invocation loads once, and saves after each
/// mutation. Two invocations running at the same time race and the last
/// writer wins.
pub trait ConfigStore: Send + Sync {
    /// A store that has never been written loads as an empty cache.
    fn load(&self) -> Result<Cache, DomainError>;
    fn save(&self, cache: &Cache) -> Result<(), DomainError>;
}
