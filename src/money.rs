//! Money helpers - half-up rounding and wire formatting
//!
//! All monetary values are `rust_decimal::Decimal`. Wire output always carries
//! exactly two fractional digits so totals like `1999.98` never pick up
//! floating-point display artifacts.

use rust_decimal::prelude::*;
use thiserror::Error;

/// Money parsing errors
#[derive(Debug, Error)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidFormat(String),

    #[error("Amount cannot be negative")]
    Negative,
}

/// Round half-up to two decimal places.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount for the wire: rounded half-up, exactly two fractional
/// digits (`5` -> `"5.00"`, `1999.98` stays `1999.98`).
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round2(amount);
    rounded.rescale(2);
    rounded.to_string()
}

/// Parse a non-negative amount from its wire representation.
pub fn parse_amount(raw: &str) -> Result<Decimal, MoneyError> {
    let raw = raw.trim();
    let amount =
        Decimal::from_str(raw).map_err(|_| MoneyError::InvalidFormat(raw.to_string()))?;
    if amount.is_sign_negative() {
        return Err(MoneyError::Negative);
    }
    Ok(amount)
}
