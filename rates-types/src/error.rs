//! Error types for the currency converter.

use crate::domain::CurrencyCode;
use crate::ports::FetchError;

/// Rate table construction errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("Invalid currency code: '{0}'")]
    InvalidCode(String),

    #[error("Invalid rate for {code}: {rate}")]
    InvalidRate { code: CurrencyCode, rate: f64 },

    #[error("Duplicate currency code: {0}")]
    DuplicateCode(CurrencyCode),
}

/// Config file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API configuration is missing: api_url and api_id must both be set")]
    Missing,

    #[error("Config file is malformed: {0}")]
    Malformed(String),

    #[error("Invalid API URL: {0}")]
    UrlParse(String),

    #[error("Invalid API id '{0}': only letters and digits are allowed")]
    InvalidApiId(String),

    #[error("Config file error: {0}")]
    Io(String),
}

/// Snapshot file errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Rate snapshot is corrupt: {0}")]
    CacheCorrupt(String),

    #[error("Rate snapshot IO error: {0}")]
    CacheIo(String),
}

/// Per-request conversion errors. None of these end the session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Rate for {0} is zero")]
    ZeroRate(CurrencyCode),

    #[error("Please select different currencies (both are {0})")]
    SameCurrency(CurrencyCode),

    #[error("Invalid amount: '{0}'")]
    AmountParse(String),
}

/// Startup errors. Any of these stops the run before the shell opens.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
