//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use handler_error::prelude::*;
//!
//! let err = HandlerError::warning("cache miss").into_shared();
//! let text = TextFormatter::new(Some(FormatterOptions::minimal()));
//! assert_eq!(text.format(&err, None), "HandlerError: cache miss");
//! ```

pub use crate::formatter::{
    AnsiFormatter, ErrorFormatter, FormatterOptions, FormatterRegistry, HtmlFormatter,
    JsonFormatter, TextFormatter,
};
pub use crate::report::LogStyle;
pub use crate::types::{Cause, ErrorChain, ErrorOptions, ErrorType, HandlerError, Severity};
