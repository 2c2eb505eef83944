//! Line-item validation for callers that want to reject bad input before it
//! reaches an invoice (e.g. keeping an editor's "OK" action disabled).
//!
//! The invoice aggregate itself accepts any line item.

use billforge_core::{Decimal, DomainError, DomainResult};
use billforge_invoicing::LineItem;

/// Validates a line item.
///
/// ## Rules
/// - Product name must not be blank
/// - Rate must not be negative
/// - Quantity must be at least 1
pub fn validate_line_item(item: &LineItem) -> DomainResult<()> {
    if item.product().name().trim().is_empty() {
        return Err(DomainError::validation("product name is required"));
    }

    if item.rate() < Decimal::ZERO {
        return Err(DomainError::validation("rate cannot be negative"));
    }

    if item.quantity() == 0 {
        return Err(DomainError::validation("quantity must be at least 1"));
    }

    Ok(())
}
