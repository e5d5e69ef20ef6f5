//! Validation of numeric user input.
//!
//! Malformed numbers are rejected here so the store only ever receives
//! well-typed values.

use stockroom_core::{DomainError, DomainResult};

/// Parse a whole-number quantity.
pub fn parse_quantity(raw: &str) -> DomainResult<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| DomainError::validation(format!("quantity '{raw}' is not a whole number")))
}

/// Parse a price. Non-finite values are rejected: they cannot be stored.
pub fn parse_price(raw: &str) -> DomainResult<f64> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(DomainError::validation(format!("price '{raw}' is not a number"))),
    }
}
