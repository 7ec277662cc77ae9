//! Conversion request and result.

use serde::Serialize;
use std::fmt;

use super::currency::CurrencyCode;

/// A single conversion asked for by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
}

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
    pub result: f64,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.amount, self.from, self.result, self.to
        )
    }
}
