//! API config stored as `{"api_url": ..., "api_id": ...}`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rates_types::{ApiConfig, ConfigDocument, ConfigError, ConfigStore};

/// Config store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<ConfigDocument, ConfigError> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::Missing,
            _ => ConfigError::Io(format!("{}: {}", self.path.display(), e)),
        })?;

        serde_json::from_str(&body)
            .map_err(|e| ConfigError::Malformed(format!("{}: {}", self.path.display(), e)))
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<ApiConfig, ConfigError> {
        let doc = self.read_document()?;
        let config = ApiConfig::try_from(&doc)?;
        tracing::debug!(path = %self.path.display(), api_url = %config.api_url(), "Loaded API config");
        Ok(config)
    }

    fn save(&self, config: &ApiConfig) -> Result<(), ConfigError> {
        let doc = ConfigDocument::from(config);
        let body = serde_json::to_string_pretty(&doc)
            .map_err(|e| ConfigError::Io(format!("serialize config: {}", e)))?;

        std::fs::write(&self.path, body)
            .map_err(|e| ConfigError::Io(format!("{}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(body: &str) -> (tempfile::TempDir, JsonConfigStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        std::fs::write(&path, body).unwrap();
        (dir, JsonConfigStore::new(path))
    }

    #[test]
    fn test_load_valid_config() {
        let (_dir, store) = store_with(
            r#"{"api_url": "https://openexchangerates.org/api/latest.json", "api_id": "d066d12b"}"#,
        );

        let config = store.load().unwrap();

        assert_eq!(config.api_id(), "d066d12b");
        assert_eq!(
            config.api_url().as_str(),
            "https://openexchangerates.org/api/latest.json"
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path().join("config.txt"));

        assert!(matches!(store.load(), Err(ConfigError::Missing)));
    }

    #[test]
    fn test_missing_key_defaults_to_empty() {
        let (_dir, store) = store_with(r#"{"api_url": "https://example.com"}"#);

        assert!(matches!(store.load(), Err(ConfigError::Missing)));
    }

    #[test]
    fn test_not_json() {
        let (_dir, store) = store_with("api_url=https://example.com");

        assert!(matches!(store.load(), Err(ConfigError::Malformed(_))));
    }

    #[test]
    fn test_invalid_url() {
        let (_dir, store) = store_with(r#"{"api_url": "not a url", "api_id": "abc"}"#);

        assert!(matches!(store.load(), Err(ConfigError::UrlParse(_))));
    }

    #[test]
    fn test_invalid_api_id() {
        let (_dir, store) = store_with(r#"{"api_url": "https://example.com", "api_id": "a_b"}"#);

        assert!(matches!(store.load(), Err(ConfigError::InvalidApiId(_))));
    }

    #[test]
    fn test_resave_is_unchanged() {
        let (_dir, store) =
            store_with(r#"{"api_id":"abc","api_url":"https://example.com","extra":1}"#);

        let config = store.load().unwrap();
        store.save(&config).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, config);

        let body = std::fs::read_to_string(store.path()).unwrap();
        let doc: ConfigDocument = serde_json::from_str(&body).unwrap();
        assert_eq!(doc.api_url, "https://example.com");
        assert_eq!(doc.api_id, "abc");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path().join("nope").join("config.txt"));
        let config = ApiConfig::new("https://example.com", "abc").unwrap();

        assert!(matches!(store.save(&config), Err(ConfigError::Io(_))));
    }
}
