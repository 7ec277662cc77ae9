//! Wire documents shared by the file adapters and the HTTP client.

use serde::{Deserialize, Serialize};

use crate::domain::ExchangeRateTable;

/// Body of the rate snapshot file and of the remote API response.
///
/// The API sends extra keys (`base`, `timestamp`, ...) that are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesDocument {
    pub rates: ExchangeRateTable,
}

/// Raw contents of the config file. Missing keys read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub api_id: String,
}
