//! Local persistence ports.
//!
//! Adapters (JSON files, in-memory fakes) implement these traits.
//! Writes are whole-document overwrites with no locking.

use crate::domain::{ApiConfig, ExchangeRateTable};
use crate::error::{ConfigError, StoreError};

/// The rate snapshot cache.
pub trait RateStore {
    /// Returns true if a snapshot is present.
    fn exists(&self) -> bool;

    /// Loads the snapshot.
    fn load(&self) -> Result<ExchangeRateTable, StoreError>;

    /// Overwrites the snapshot with `table`.
    fn save(&self, table: &ExchangeRateTable) -> Result<(), StoreError>;
}

/// The API configuration document.
pub trait ConfigStore {
    /// Loads and validates the configuration.
    fn load(&self) -> Result<ApiConfig, ConfigError>;

    /// Writes the configuration out.
    fn save(&self, config: &ApiConfig) -> Result<(), ConfigError>;
}
