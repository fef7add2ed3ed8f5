use crate::domain::entities::cache::Cache;
use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Config document stored as a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self) -> Result<Cache, DomainError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "config file does not exist yet");
                return Ok(Cache::default());
            }
            Err(e) => {
                return Err(DomainError::Storage(format!(
                    "reading {}: {e}",
                    self.path.display()
                )))
            }
        };

        serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::Storage(format!("parsing {}: {e}", self.path.display())))
    }

    fn save(&self, cache: &Cache) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainError::Storage(format!("creating {}: {e}", parent.display()))
            })?;
        }

        let mut json = serde_json::to_vec_pretty(cache)
            .map_err(|e| DomainError::Storage(format!("encoding config: {e}")))?;
        json.push(b'\n');

        std::fs::write(&self.path, json)
            .map_err(|e| DomainError::Storage(format!("writing {}: {e}", self.path.display())))?;
        tracing::debug!(path = %self.path.display(), entries = cache.len(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::coordinates::Coordinates;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), Cache::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(".aya.json"));

        let mut cache = Cache {
            city: "Criciuma".into(),
            last_ip: "198.51.100.4".into(),
            ..Default::default()
        };
        cache.put(
            "Criciuma".into(),
            Coordinates::new("-28.6775", "-49.3697", "Criciúma"),
        );
        cache.put(
            "San Diego".into(),
            Coordinates::new("32.7174202", "-117.1627728", "San Diego"),
        );

        store.save(&cache).unwrap();
        assert_eq!(store.load().unwrap(), cache);
    }

    #[test]
    fn test_load_then_save_preserves_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".aya.json");
        let original = r#"{"city":"Lisbon","last_ip":"192.0.2.1","city_coordinates":{"Lisbon":{"lat":"38.7077507","lon":"-9.1365919","name":"Lisboa"}}}"#;
        std::fs::write(&path, original).unwrap();

        let store = JsonFileStore::new(&path);
        let cache = store.load().unwrap();
        store.save(&cache).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let expected: serde_json::Value = serde_json::from_str(original).unwrap();
        assert_eq!(written, expected);
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".aya.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("aya.json");
        let store = JsonFileStore::new(&path);
        store.save(&Cache::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the file.
        let store = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.save(&Cache::default()),
            Err(DomainError::Storage(_))
        ));
    }
}
