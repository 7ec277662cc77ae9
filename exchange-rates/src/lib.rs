//! Exchange Rate Conversion
//!
//! Cross-rate arithmetic over an [`ExchangeRateTable`]. Every rate in the
//! table is quoted against the same implicit base currency, so converting
//! between two listed currencies is
//!
//! ```text
//! amount * rate(to) / rate(from)
//! ```
//!
//! Plain `f64` math is used; no rounding or minor-unit normalization is
//! applied to the result.
//!
//! # Example
//! ```
//! use exchange_rates::convert;
//! use rates_types::{CurrencyCode, ExchangeRateTable};
//!
//! let table = ExchangeRateTable::from_pairs([("USD", 1.0), ("EUR", 0.9)]).unwrap();
//! let usd = CurrencyCode::parse("USD").unwrap();
//! let eur = CurrencyCode::parse("EUR").unwrap();
//!
//! assert_eq!(convert(&table, &usd, &eur, 10.0).unwrap(), 9.0);
//! ```

use rates_types::{ConversionError, CurrencyCode, ExchangeRateTable};

// ─────────────────────────────────────────────────────────────────────────────
// Lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Resolves free-text input to a code present in `table`.
///
/// Text that is not a valid code at all is reported the same way as a
/// well-formed code the table lacks.
pub fn lookup(table: &ExchangeRateTable, raw: &str) -> Result<CurrencyCode, ConversionError> {
    let code = CurrencyCode::parse(raw)
        .map_err(|_| ConversionError::UnknownCurrency(raw.trim().to_string()))?;
    if !table.contains(&code) {
        return Err(ConversionError::UnknownCurrency(code.to_string()));
    }
    Ok(code)
}

fn rate_of(table: &ExchangeRateTable, code: &CurrencyCode) -> Result<f64, ConversionError> {
    table
        .get(code)
        .ok_or_else(|| ConversionError::UnknownCurrency(code.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Returns `(table[from], table[to])` once every check has passed.
///
/// Checks run in a fixed order: `from` known, `to` known, currencies
/// differ, `from` rate non-zero, `to` rate non-zero.
fn checked_rates(
    table: &ExchangeRateTable,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Result<(f64, f64), ConversionError> {
    let from_rate = rate_of(table, from)?;
    let to_rate = rate_of(table, to)?;

    if from == to {
        return Err(ConversionError::SameCurrency(from.clone()));
    }
    if from_rate == 0.0 {
        return Err(ConversionError::ZeroRate(from.clone()));
    }
    if to_rate == 0.0 {
        return Err(ConversionError::ZeroRate(to.clone()));
    }

    Ok((from_rate, to_rate))
}

/// Returns how many units of `to` one unit of `from` buys.
pub fn rate(
    table: &ExchangeRateTable,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Result<f64, ConversionError> {
    let (from_rate, to_rate) = checked_rates(table, from, to)?;
    Ok(to_rate / from_rate)
}

/// Converts `amount` of `from` into `to`.
///
/// Fails under the same conditions as [`rate`]. Evaluated as
/// `amount * table[to] / table[from]` in that order.
pub fn convert(
    table: &ExchangeRateTable,
    from: &CurrencyCode,
    to: &CurrencyCode,
    amount: f64,
) -> Result<f64, ConversionError> {
    let (from_rate, to_rate) = checked_rates(table, from, to)?;
    Ok(amount * to_rate / from_rate)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
