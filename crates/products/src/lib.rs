//! Products domain module.
//!
//! Catalog entries referenced by invoice line items. Products are immutable
//! values shared between line items (and invoices) rather than owned by them.

pub mod product;

pub use product::{Product, SharedProduct};
