//! Failures reported by the crate itself.
//!
//! These are programmer errors: bad registrations, malformed enumeration
//! strings, or values that do not satisfy the formatter contract. They are
//! always returned to the caller at the point where the bad value entered.

use thiserror::Error as ThisError;

/// Errors produced while building entities, formatters, or registries.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A malformed argument was supplied (empty name, unknown enum string, double link).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested formatter was never registered.
    #[error("Formatter '{0}' not found.")]
    FormatterNotFound(String),

    /// A formatter was handed a value that is not a [`HandlerError`](crate::HandlerError).
    #[error("contract violation: {0}")]
    ContractViolation(String),
}

impl Error {
    #[inline]
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;
