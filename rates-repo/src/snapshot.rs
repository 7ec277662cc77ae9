//! Rate snapshot stored as `{"rates": {...}}`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rates_types::{ExchangeRateTable, RateStore, RatesDocument, StoreError};

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonRateStore {
    path: PathBuf,
}

impl JsonRateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateStore for JsonRateStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<ExchangeRateTable, StoreError> {
        let body = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => {
                StoreError::CacheCorrupt(format!("{}: not valid UTF-8", self.path.display()))
            }
            _ => StoreError::CacheIo(format!("{}: {}", self.path.display(), e)),
        })?;

        let doc: RatesDocument = serde_json::from_str(&body)
            .map_err(|e| StoreError::CacheCorrupt(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(
            path = %self.path.display(),
            currencies = doc.rates.len(),
            "Loaded rate snapshot"
        );
        Ok(doc.rates)
    }

    fn save(&self, table: &ExchangeRateTable) -> Result<(), StoreError> {
        let doc = RatesDocument {
            rates: table.clone(),
        };
        let body = serde_json::to_string(&doc)
            .map_err(|e| StoreError::CacheIo(format!("serialize snapshot: {}", e)))?;

        std::fs::write(&self.path, body)
            .map_err(|e| StoreError::CacheIo(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(
            path = %self.path.display(),
            currencies = table.len(),
            "Saved rate snapshot"
        );
        Ok(())
    }
}
