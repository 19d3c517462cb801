//! The enriched error entity.
//!
//! [`HandlerError`] carries an identity, a severity, shared metadata and an
//! optional link to the error that caused it. Entities are shared through
//! [`Arc`]; the cause link is the only thing that can be set after
//! construction, and only once.

use crate::error::{Error, Result};
use crate::types::environment::EnvironmentInfo;
use crate::types::error_chain::{Causes, ErrorChain};
use crate::types::stack::{self, StackFrame};
use crate::types::{iso_timestamp, ErrorType, Severity};
use chrono::{DateTime, Utc};
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

mod options;
mod serialize;
mod traits;

pub use options::{ErrorDetails, ErrorOptions};
pub use serialize::{ErrorRecord, SerializedChainEntry, SerializedError};

/// Structured metadata attached to an error.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Name given to entities that do not set one.
pub const DEFAULT_NAME: &str = "HandlerError";

/// Error entity with identity, severity, metadata and an optional cause.
///
/// Equality and hashing use the identity only: two entities with the same
/// message are still different errors.
///
/// # Examples
///
/// ```
/// use handler_error::{HandlerError, Severity};
///
/// let root = HandlerError::warning("connection reset").into_shared();
/// let top = HandlerError::builder("request failed").cause(root.clone()).build().into_shared();
///
/// let chain = top.error_chain();
/// assert_eq!(chain.len(), 2);
/// assert_eq!(chain.root_error().message(), "connection reset");
/// assert_eq!(chain.most_severe_error().severity(), Severity::Error);
/// ```
pub struct HandlerError {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) message: String,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) severity: Severity,
    pub(crate) error_type: ErrorType,
    pub(crate) code: Option<String>,
    pub(crate) metadata: Arc<Metadata>,
    pub(crate) details: ErrorDetails,
    pub(crate) method: Option<String>,
    pub(crate) file: Option<String>,
    pub(crate) stack: Option<String>,
    pub(crate) stack_trace: Vec<StackFrame>,
    pub(crate) environment: Option<EnvironmentInfo>,
    pub(crate) cause: OnceLock<Arc<HandlerError>>,
}

impl HandlerError {
    /// Creates an error with default name and severity.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_options(ErrorOptions::new(message))
    }

    /// Starts an [`ErrorOptions`] builder for `message`.
    #[inline]
    pub fn builder(message: impl Into<String>) -> ErrorOptions {
        ErrorOptions::new(message)
    }

    pub fn with_options(options: ErrorOptions) -> Self {
        let captured = if options.capture_stack { stack::capture() } else { Default::default() };
        let first_frame = captured.frames.first();
        let method = options.method.or_else(|| first_frame.and_then(|f| f.method.clone()));
        let file = options.file.or_else(|| first_frame.and_then(|f| f.file.clone()));
        let environment = options.capture_environment.then(EnvironmentInfo::collect);

        let cause = OnceLock::new();
        if let Some(link) = options.cause {
            let _ = cause.set(link.into_inner());
        }

        Self {
            id: Uuid::new_v4(),
            name: options.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            message: options.message,
            timestamp: Utc::now(),
            severity: options.severity.unwrap_or_default(),
            error_type: options.error_type.unwrap_or_default(),
            code: options.code,
            metadata: options.metadata.unwrap_or_default(),
            details: options.details,
            method,
            file,
            stack: captured.raw,
            stack_trace: captured.frames,
            environment,
            cause,
        }
    }

    #[inline]
    pub fn debug(message: impl Into<String>) -> Self {
        Self::builder(message).severity(Severity::Debug).build()
    }

    #[inline]
    pub fn info(message: impl Into<String>) -> Self {
        Self::builder(message).severity(Severity::Info).build()
    }

    #[inline]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::builder(message).severity(Severity::Warning).build()
    }

    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Self::builder(message).severity(Severity::Error).build()
    }

    #[inline]
    pub fn critical(message: impl Into<String>) -> Self {
        Self::builder(message).severity(Severity::Critical).build()
    }

    /// Moves the entity behind an [`Arc`] so it can be linked as a cause.
    #[inline]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Creation instant as ISO-8601 with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`.
    #[inline]
    pub fn timestamp_iso(&self) -> String {
        iso_timestamp(&self.timestamp)
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[inline]
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The shared metadata handle, as it was passed in.
    #[inline]
    pub fn metadata_handle(&self) -> &Arc<Metadata> {
        &self.metadata
    }

    #[inline]
    pub fn details(&self) -> &ErrorDetails {
        &self.details
    }

    #[inline]
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    #[inline]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Raw backtrace text, present only when backtraces are enabled.
    #[inline]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    #[inline]
    pub fn stack_trace(&self) -> &[StackFrame] {
        &self.stack_trace
    }

    #[inline]
    pub fn environment(&self) -> Option<&EnvironmentInfo> {
        self.environment.as_ref()
    }

    #[inline]
    pub fn cause(&self) -> Option<&Arc<HandlerError>> {
        self.cause.get()
    }

    /// Links a cause that could not be supplied at construction.
    ///
    /// The link can be made once. Linking an entity that already (directly or
    /// transitively) points back here creates a cycle: traversal still
    /// terminates, but the members keep each other alive.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if a cause is already set.
    pub fn link_cause(&self, cause: impl Into<Cause>) -> Result<()> {
        let cause = cause.into().into_inner();
        let closes_cycle =
            cause.id == self.id || cause.causes().any(|member| member.id == self.id);

        self.cause.set(Arc::clone(&cause)).map_err(|_| {
            Error::invalid_argument(format!("cause of error {} is already set", self.id))
        })?;
        if closes_cycle {
            tracing::debug!(
                error.id = %self.id,
                cause.id = %cause.id,
                "linked cause closes a cycle; its members will not be freed"
            );
        }
        Ok(())
    }

    /// Iterates over the causes of this error, nearest first, stopping at the
    /// first entity already seen.
    #[inline]
    pub fn causes(&self) -> Causes<'_> {
        Causes::new(self)
    }

    /// Chain view rooted at this entity.
    #[inline]
    pub fn error_chain(self: &Arc<Self>) -> ErrorChain {
        ErrorChain::new(Arc::clone(self))
    }
}

/// A cause accepted by [`ErrorOptions::cause`] and [`HandlerError::link_cause`].
///
/// Enriched errors are kept as they are; any other [`std::error::Error`] is
/// adapted into a fresh [`HandlerError`] carrying the same message.
#[derive(Debug, Clone)]
pub struct Cause(Arc<HandlerError>);

impl Cause {
    /// Adapts a foreign error: new identity, same message, default severity,
    /// no further cause. The name is the error's type name without its path.
    pub fn foreign<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let adapted =
            HandlerError::builder(error.to_string()).name(foreign_name::<E>()).build();
        Cause(Arc::new(adapted))
    }

    /// Keeps a boxed [`HandlerError`] as-is and adapts anything else.
    pub fn from_boxed(error: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        match error.downcast::<HandlerError>() {
            Ok(enriched) => Cause(Arc::from(enriched)),
            Err(other) => Cause::foreign(other.as_ref()),
        }
    }

    #[inline]
    pub fn into_inner(self) -> Arc<HandlerError> {
        self.0
    }
}

/// `std::io::error::Error` -> `Error`, `app::Parse<u8>` -> `Parse`. Trait
/// objects carry no concrete name and become `Error`.
fn foreign_name<E: ?Sized>() -> &'static str {
    let full = std::any::type_name::<E>();
    if full.starts_with("dyn ") {
        return "Error";
    }
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().filter(|name| !name.is_empty()).unwrap_or("Error")
}

impl From<Arc<HandlerError>> for Cause {
    #[inline]
    fn from(error: Arc<HandlerError>) -> Self {
        Cause(error)
    }
}

impl From<&Arc<HandlerError>> for Cause {
    #[inline]
    fn from(error: &Arc<HandlerError>) -> Self {
        Cause(Arc::clone(error))
    }
}

impl From<HandlerError> for Cause {
    #[inline]
    fn from(error: HandlerError) -> Self {
        Cause(Arc::new(error))
    }
}
