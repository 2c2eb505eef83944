//! Invoicing domain module.
//!
//! This crate contains the invoice aggregate: an owning party, an ordered
//! list of line items, and a total kept consistent after every edit. It is
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod invoice;
pub mod line_item;

pub use invoice::{
    AddLineItem, ChangeLineItem, Invoice, InvoiceCommand, RemoveLineItem, calculate_total,
    checked_total,
};
pub use line_item::{LineItem, calculate_line_total};
