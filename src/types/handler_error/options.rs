use super::{Cause, HandlerError, Metadata};
use crate::error::{Error, Result};
use crate::types::{ErrorType, Severity};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Free-form guidance attached to an error for human readers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub context: Option<String>,
    pub solution: Option<String>,
    pub example: Option<String>,
    pub library: Option<String>,
    pub values: Option<Metadata>,
}

/// Everything a [`HandlerError`] can be built from.
///
/// Only `message` is required; every other field falls back to a default
/// (name `"HandlerError"`, severity `error`, type `error`, empty metadata,
/// stack capture on, environment capture off).
///
/// # Examples
///
/// ```
/// use handler_error::{ErrorOptions, Severity};
///
/// let err = ErrorOptions::new("disk full")
///     .name("StorageError")
///     .severity(Severity::Critical)
///     .code("E_DISK")
///     .build();
///
/// assert_eq!(err.name(), "StorageError");
/// assert_eq!(err.code(), Some("E_DISK"));
/// ```
#[derive(Debug)]
pub struct ErrorOptions {
    pub message: String,
    pub name: Option<String>,
    pub severity: Option<Severity>,
    pub error_type: Option<ErrorType>,
    pub code: Option<String>,
    pub metadata: Option<Arc<Metadata>>,
    pub cause: Option<Cause>,
    pub details: ErrorDetails,
    pub method: Option<String>,
    pub file: Option<String>,
    pub capture_stack: bool,
    pub capture_environment: bool,
}

impl Default for ErrorOptions {
    fn default() -> Self {
        Self {
            message: String::new(),
            name: None,
            severity: None,
            error_type: None,
            code: None,
            metadata: None,
            cause: None,
            details: ErrorDetails::default(),
            method: None,
            file: None,
            capture_stack: true,
            capture_environment: false,
        }
    }
}

impl ErrorOptions {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Default::default() }
    }

    #[inline]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    #[inline]
    pub fn error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    #[inline]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Shares `metadata` with the entity; it is not copied.
    #[inline]
    pub fn metadata(mut self, metadata: impl Into<Arc<Metadata>>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Accepts metadata given as a JSON value, which must be an object.
    pub fn metadata_value(self, value: serde_json::Value) -> Result<Self> {
        let map = expect_object("metadata", value)?;
        Ok(self.metadata(map))
    }

    #[inline]
    pub fn cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    #[inline]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.details.context = Some(context.into());
        self
    }

    #[inline]
    pub fn solution(mut self, solution: impl Into<String>) -> Self {
        self.details.solution = Some(solution.into());
        self
    }

    #[inline]
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.details.example = Some(example.into());
        self
    }

    #[inline]
    pub fn library(mut self, library: impl Into<String>) -> Self {
        self.details.library = Some(library.into());
        self
    }

    /// Values that were received when the error happened; must be a JSON object.
    pub fn values(mut self, value: serde_json::Value) -> Result<Self> {
        self.details.values = Some(expect_object("values", value)?);
        Ok(self)
    }

    #[inline]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    #[inline]
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[inline]
    pub fn capture_stack(mut self, capture: bool) -> Self {
        self.capture_stack = capture;
        self
    }

    #[inline]
    pub fn capture_environment(mut self, capture: bool) -> Self {
        self.capture_environment = capture;
        self
    }

    #[inline]
    pub fn build(self) -> HandlerError {
        HandlerError::with_options(self)
    }
}

fn expect_object(field: &str, value: serde_json::Value) -> Result<Metadata> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::invalid_argument(format!(
            "Invalid object: \"{other}\" must be an object ({field})."
        ))),
    }
}
