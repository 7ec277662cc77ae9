//! Domain models for the currency converter.

pub mod config;
pub mod conversion;
pub mod currency;
pub mod rate_table;

pub use config::ApiConfig;
pub use conversion::{Conversion, ConversionRequest};
pub use currency::CurrencyCode;
pub use rate_table::ExchangeRateTable;
