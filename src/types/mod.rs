//! Error entity, chain analysis and the data they carry.
//!
//! # Examples
//!
//! ```
//! use handler_error::{HandlerError, Severity};
//!
//! let root = HandlerError::critical("pool exhausted").into_shared();
//! let top = HandlerError::builder("query failed")
//!     .code("DB_QUERY")
//!     .cause(&root)
//!     .build()
//!     .into_shared();
//!
//! let records = top.error_chain().serialize();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].severity, Severity::Critical);
//! ```
use chrono::{DateTime, SecondsFormat, Utc};

pub mod environment;
pub mod error_chain;
pub mod handler_error;
pub mod severity;
pub mod stack;

pub use environment::{Environment, EnvironmentInfo, ServerInfo};
pub use error_chain::{Causes, ChainVec, ErrorChain};
pub use handler_error::*;
pub use severity::{ErrorType, Severity};
pub use stack::StackFrame;

/// ISO-8601 with millisecond precision and a `Z` suffix.
#[inline]
pub(crate) fn iso_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
