use crate::domain::entities::cache::Cache;
use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use std::sync::Arc;

pub struct ClearConfigUseCase {
    store: Arc<dyn ConfigStore>,
}

impl ClearConfigUseCase {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Forget the default city, the last IP and every cached location.
    pub fn execute(&self) -> Result<(), DomainError> {
        self.store.save(&Cache::default())
    }
}
