use crate::domain::entities::cache::Cache;
use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Config store kept in memory. Counts saves and can be told to fail.
#[derive(Default)]
pub struct InMemoryConfigStore {
    cache: Mutex<Cache>,
    saves: AtomicUsize,
    fail_load: AtomicBool,
    fail_save: AtomicBool,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: Cache) -> Self {
        Self {
            cache: Mutex::new(cache),
            ..Default::default()
        }
    }

    /// Make every subsequent `load` fail as if the document were corrupt.
    pub fn fail_loads(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `save` fail as if the disk were read-only.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Last successfully saved (or initial) document.
    pub fn snapshot(&self) -> Cache {
        self.cache
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load(&self) -> Result<Cache, DomainError> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("in-memory store: load disabled".into()));
        }
        self.cache
            .lock()
            .map(|c| c.clone())
            .map_err(|e| DomainError::Storage(e.to_string()))
    }

    fn save(&self, cache: &Cache) -> Result<(), DomainError> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("in-memory store: save disabled".into()));
        }
        let mut stored = self
            .cache
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        *stored = cache.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
