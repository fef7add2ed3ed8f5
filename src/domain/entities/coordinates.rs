use serde::{Deserialize, Serialize};

/// A resolved location. Latitude and longitude are kept as the exact strings
/// the geocoder returned so cached entries and forecast queries never drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lat")]
    pub latitude: String,
    #[serde(rename = "lon")]
    pub longitude: String,
    pub name: String,
}

impl Coordinates {
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.latitude, self.longitude)
    }
}
