//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers deterministic business failures only: rejected arguments, broken
/// invariants, malformed identifiers. Storage failures have their own types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A caller-supplied value was rejected (e.g. a cart quantity that exceeds
    /// what is on hand).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The bare message, without the kind prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::InvariantViolation(msg) | Self::InvalidId(msg) => {
                msg.as_str()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_error_kind() {
        let err = DomainError::invalid_argument("negative product quantity");
        assert_eq!(err.to_string(), "invalid argument: negative product quantity");
        assert_eq!(err.message(), "negative product quantity");
    }
}
