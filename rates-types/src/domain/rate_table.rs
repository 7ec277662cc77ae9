//! Exchange rate table loaded once per run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::currency::CurrencyCode;
use crate::error::TableError;

/// Rates for every known currency against an implicit base currency.
///
/// Immutable after construction. Iteration is in code order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct ExchangeRateTable {
    rates: BTreeMap<CurrencyCode, f64>,
}

impl ExchangeRateTable {
    /// Builds a table from raw code/rate pairs.
    ///
    /// Codes must be valid [`CurrencyCode`]s and unique after normalization.
    /// Rates must be finite and not negative. A zero rate is accepted here
    /// and rejected at conversion time.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut rates = BTreeMap::new();
        for (raw, rate) in pairs {
            let code = CurrencyCode::parse(raw.as_ref())?;
            if !rate.is_finite() || rate < 0.0 {
                return Err(TableError::InvalidRate { code, rate });
            }
            if rates.insert(code.clone(), rate).is_some() {
                return Err(TableError::DuplicateCode(code));
            }
        }
        Ok(Self { rates })
    }

    /// Returns the rate for `code`, if present.
    pub fn get(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    /// Currency codes in table order.
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rates.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, f64)> {
        self.rates.iter().map(|(code, rate)| (code, *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for ExchangeRateTable {
    type Error = TableError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_pairs(raw)
    }
}

impl From<ExchangeRateTable> for BTreeMap<String, f64> {
    fn from(table: ExchangeRateTable) -> Self {
        table
            .rates
            .into_iter()
            .map(|(code, rate)| (code.as_str().to_string(), rate))
            .collect()
    }
}
