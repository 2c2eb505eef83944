//! Parties domain module.
//!
//! A party is whoever owns and creates an invoice. It is a plain value object
//! with no lifecycle of its own.

pub mod party;

pub use party::Party;
