//! Remote API configuration.

use url::Url;

use crate::dto::ConfigDocument;
use crate::error::ConfigError;

/// Validated settings for the exchange rate API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_url: Url,
    raw_url: String,
    api_id: String,
}

impl ApiConfig {
    /// Validates a raw URL and app id.
    ///
    /// Empty values are reported as missing before any format check runs.
    pub fn new(api_url: &str, api_id: &str) -> Result<Self, ConfigError> {
        if api_url.is_empty() || api_id.is_empty() {
            return Err(ConfigError::Missing);
        }

        let url = Url::parse(api_url)
            .map_err(|e| ConfigError::UrlParse(format!("{api_url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UrlParse(format!(
                "{api_url}: unsupported scheme '{}'",
                url.scheme()
            )));
        }

        if !api_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidApiId(api_id.to_string()));
        }

        Ok(Self {
            api_url: url,
            raw_url: api_url.to_string(),
            api_id: api_id.to_string(),
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn api_id(&self) -> &str {
        &self.api_id
    }
}

impl From<&ApiConfig> for ConfigDocument {
    fn from(config: &ApiConfig) -> Self {
        Self {
            api_url: config.raw_url.clone(),
            api_id: config.api_id.clone(),
        }
    }
}

impl TryFrom<&ConfigDocument> for ApiConfig {
    type Error = ConfigError;

    fn try_from(doc: &ConfigDocument) -> Result<Self, Self::Error> {
        Self::new(&doc.api_url, &doc.api_id)
    }
}
