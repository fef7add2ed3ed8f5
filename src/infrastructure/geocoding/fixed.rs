use crate::domain::entities::coordinates::Coordinates;
use crate::domain::error::DomainError;
use crate::domain::ports::geo_provider::GeoProvider;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Geocoder answering every query with the same candidates. Records how often
/// and with what it was called.
pub struct StaticGeoProvider {
    candidates: Vec<Coordinates>,
    error: Option<String>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl StaticGeoProvider {
    pub fn new(candidates: Vec<Coordinates>) -> Self {
        Self {
            candidates,
            error: None,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// A geocoder that is always unreachable.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::empty()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl GeoProvider for StaticGeoProvider {
    async fn search(&self, city: &str) -> Result<Vec<Coordinates>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut q) = self.queries.lock() {
            q.push(city.to_string());
        }
        match &self.error {
            Some(msg) => Err(DomainError::GeoLookup(msg.clone())),
            None => Ok(self.candidates.clone()),
        }
    }
}
