//! Currency code value type.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::TableError;

/// An ISO-style currency code such as `USD`.
///
/// Always 3 to 5 ASCII letters, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 5;

    /// Parses user or wire input. Surrounding whitespace is ignored and
    /// letters are upper-cased, so `" usd"` becomes `USD`.
    pub fn parse(raw: &str) -> Result<Self, TableError> {
        let trimmed = raw.trim();
        let valid_len = (Self::MIN_LEN..=Self::MAX_LEN).contains(&trimmed.len());
        if !valid_len || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(TableError::InvalidCode(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
