//! Exchange rate source port.
//!
//! This trait defines the interface for fetching a fresh rate table.
//! Implementations can be HTTP clients, canned fakes, etc.

use crate::domain::{ApiConfig, ExchangeRateTable};

/// Error type for rate fetching.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed. Response code: {status}")]
    Http { status: u16 },

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("Rate service unreachable: {0}")]
    Transport(String),
}

/// Port trait for remote rate sources.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the full rate table in a single request. No retries.
    async fn fetch(&self, config: &ApiConfig) -> Result<ExchangeRateTable, FetchError>;
}
