//! Domain-level errors

use thiserror::Error;

/// Errors that can occur while building address book values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field was not supplied at all
    #[error("{0} must be provided")]
    NullInput(&'static str),

    /// Input was supplied but violates the field's constraints.
    ///
    /// Carries the human-readable constraint message of the field.
    #[error("{0}")]
    InvalidFormat(String),

    /// No formatter in a list could parse the input
    #[error("Invalid date format: {0}")]
    ParseError(String),

    /// A date pattern could not be compiled into a formatter
    #[error("Invalid date pattern: {0}")]
    InvalidPattern(String),
}

impl DomainError {
    /// Create an invalid format error from a constraint message
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    /// Whether the error was caused by absent input rather than bad input
    #[must_use]
    pub const fn is_null_input(&self) -> bool {
        matches!(self, Self::NullInput(_))
    }
}
