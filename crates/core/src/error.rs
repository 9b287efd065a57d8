//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic input/business failures. Storage and
/// decoding concerns have their own error types in the crates that own them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was empty.
    #[error("{field} cannot be empty")]
    Required { field: &'static str },

    /// A numeric value had to be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// A value could not be parsed (e.g. a malformed date or number).
    #[error("invalid {field}: {reason}")]
    InvalidFormat { field: &'static str, reason: String },
}

impl DomainError {
    pub fn required(field: &'static str) -> Self {
        Self::Required { field }
    }

    pub fn must_be_positive(field: &'static str) -> Self {
        Self::MustBePositive { field }
    }

    pub fn invalid_format(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::MustBePositive { field }
            | Self::InvalidFormat { field, .. } => field,
        }
    }
}
