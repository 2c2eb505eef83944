//! Service boundary for the invoicing domain.
//!
//! Turns loosely-typed input (JSON from a remote API, a form, a file) into
//! well-formed domain values, and maps invoices back out to JSON payloads.
//! The domain crates do no defaulting or coercion; that happens here.

pub mod parse;
pub mod payload;
pub mod validation;

pub use parse::{parse_invoice, parse_line_item, parse_party, parse_product};
pub use payload::{invoice_to_json, line_item_to_json, party_to_json, product_to_json};
pub use validation::validate_line_item;
