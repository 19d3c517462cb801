//! Enriched errors with identity, severity, cycle-safe cause chains and
//! pluggable formatters.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `handler_error::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building a Cause Chain
//!
//! ```
//! use handler_error::{HandlerError, Severity};
//!
//! let io = std::io::Error::other("connection refused");
//! let root = HandlerError::builder("database unreachable")
//!     .severity(Severity::Critical)
//!     .cause(handler_error::Cause::foreign(&io))
//!     .build()
//!     .into_shared();
//! let top = HandlerError::builder("request failed").cause(&root).build().into_shared();
//!
//! let chain = top.error_chain();
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.root_error().message(), "connection refused");
//! assert_eq!(chain.most_severe_error().message(), "database unreachable");
//! ```
//!
//! ## Formatting by Name
//!
//! ```
//! use handler_error::formatter::{FormatterOptions, FormatterRegistry};
//! use handler_error::HandlerError;
//!
//! let registry = FormatterRegistry::with_defaults();
//! let json = registry.get("json", Some(&FormatterOptions::minimal().indent_size(0))).unwrap();
//!
//! let err = HandlerError::new("boom");
//! assert_eq!(json.format(&err, None), r#"{"message":"boom","name":"HandlerError"}"#);
//! ```
//!
//! ## Serializing a Chain
//!
//! ```
//! use handler_error::HandlerError;
//!
//! let root = HandlerError::new("root").into_shared();
//! let top = HandlerError::builder("top").cause(&root).build().into_shared();
//!
//! let records = top.error_chain().serialize();
//! let json = serde_json::to_value(&records).unwrap();
//! assert_eq!(json[1]["message"], "root");
//! assert!(json[0].get("cause").is_none());
//! ```

/// Failures reported by the crate itself
pub mod error;
/// Formatter trait, concrete formatters and the formatter registry
pub mod formatter;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Plain-text log reports emitted through `tracing`
pub mod report;
/// Error entity, chain analysis, stack and environment capture
pub mod types;

pub use error::{Error, Result};
pub use formatter::{ErrorFormatter, FormatterOptions, FormatterRegistry};
pub use report::LogStyle;
pub use types::{
    Cause, ChainVec, ErrorChain, ErrorDetails, ErrorOptions, ErrorRecord, ErrorType, HandlerError,
    Metadata, SerializedChainEntry, SerializedError, Severity,
};
