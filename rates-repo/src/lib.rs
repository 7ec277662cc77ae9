//! # Rates Repository
//!
//! File-backed adapters for the currency converter.
//! This crate provides the JSON snapshot store implementing `RateStore` and
//! the config file store implementing `ConfigStore`.
//!
//! Both files are read and written whole. There is no locking, no atomic
//! rename and no expiry: a single process owns them for one run.

pub mod config_file;
pub mod snapshot;


pub use config_file::JsonConfigStore;
pub use snapshot::JsonRateStore;

/// Default location of the rate snapshot.
pub const DEFAULT_SNAPSHOT_FILE: &str = "exchange_data.json";

/// Default location of the API config.
pub const DEFAULT_CONFIG_FILE: &str = "config.txt";
