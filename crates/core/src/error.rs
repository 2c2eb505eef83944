//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (positions,
/// validation, identifiers). Transport and storage concerns belong to the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A position-addressed edit referenced a line that does not exist.
    #[error("index {index} out of range for {len} line item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A value failed validation (e.g. malformed input at the boundary).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_message_names_position_and_length() {
        let err = DomainError::index_out_of_range(3, 2);
        assert_eq!(err.to_string(), "index 3 out of range for 2 line item(s)");
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = DomainError::validation("quantity must be an integer");
        assert_eq!(err.to_string(), "validation failed: quantity must be an integer");
    }
}
