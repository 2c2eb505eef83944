//! `billforge-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use id::InvoiceId;
pub use money::{Decimal, Money, parse_money};
pub use value_object::ValueObject;
