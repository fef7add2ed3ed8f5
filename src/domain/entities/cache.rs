use crate::domain::entities::coordinates::Coordinates;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// The persisted config document: the last derived city, the IP it was
/// derived from, and every city resolved so far.
///
/// Keys of `city_coordinates` are canonical city names
/// (see [`crate::domain::values::city_name::normalize`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cache {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub last_ip: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city_coordinates: BTreeMap<String, Coordinates>,
}

impl Cache {
    pub fn get(&self, key: &str) -> Option<&Coordinates> {
        self.city_coordinates.get(key)
    }

    pub fn put(&mut self, key: String, coordinates: Coordinates) {
        self.city_coordinates.insert(key, coordinates);
    }

    pub fn len(&self) -> usize {
        self.city_coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.city_coordinates.is_empty()
    }
}

// Older documents were written with `"city_coordinates": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, Coordinates>>::deserialize(deserializer)?.unwrap_or_default())
}
