//! # Rates Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has no IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (CurrencyCode, ExchangeRateTable, ApiConfig)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Wire documents for the snapshot file, config file and API body
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ApiConfig, Conversion, ConversionRequest, CurrencyCode, ExchangeRateTable};
pub use dto::{ConfigDocument, RatesDocument};
pub use error::{ConfigError, ConversionError, StartupError, StoreError, TableError};
pub use ports::{ConfigStore, FetchError, RateSource, RateStore};
