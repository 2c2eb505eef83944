//! Exact decimal money.
//!
//! Rates and totals are `rust_decimal::Decimal`; binary floats never touch a
//! monetary value.

pub use rust_decimal::Decimal;

use crate::error::{DomainError, DomainResult};

/// Monetary amount (rate, line total, invoice total).
pub type Money = Decimal;

/// Parse a textual amount such as `"10.50"` or `"-3"`.
///
/// Plain text must be representable exactly: more fractional digits than
/// `Decimal` holds is an error, not a silent rounding. Scientific notation
/// (`"1e3"`) is accepted as well, since JSON number literals may use it.
pub fn parse_money(field: &str, raw: &str) -> DomainResult<Money> {
    let raw = raw.trim();
    let parsed = if raw.contains(['e', 'E']) {
        Decimal::from_scientific(raw)
    } else {
        Decimal::from_str_exact(raw)
    };
    parsed.map_err(|e| DomainError::validation(format!("{field}: invalid decimal {raw:?} ({e})")))
}
