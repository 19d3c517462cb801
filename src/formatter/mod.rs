//! Pluggable rendering of errors and error chains.
//!
//! Every formatter implements [`ErrorFormatter`]: it renders one
//! [`HandlerError`] with [`ErrorFormatter::format`] and, by default, a chain by
//! rendering each distinct entity once and joining the results with
//! newlines. Concrete formatters may lay the chain out differently (a tree,
//! a wrapping element, a JSON array) but keep the input order, render each
//! entity exactly once, and go through `format` for every entity.
//!
//! Formatters are usually selected by name through a [`FormatterRegistry`].
//!
//! # Examples
//!
//! ```
//! use handler_error::formatter::{ErrorFormatter, FormatterOptions, TextFormatter};
//! use handler_error::HandlerError;
//!
//! let root = HandlerError::new("socket closed").into_shared();
//! let top = HandlerError::builder("fetch failed").cause(&root).build().into_shared();
//!
//! let text = TextFormatter::new(Some(FormatterOptions::minimal()));
//! let chain = top.error_chain().error_chain();
//! assert_eq!(
//!     text.format_chain(&chain, None),
//!     "HandlerError: fetch failed\n└── HandlerError: socket closed"
//! );
//! ```

use crate::error::{Error, Result};
use crate::types::HandlerError;
use std::collections::HashSet;
use std::sync::Arc;

mod ansi;
mod html;
mod json;
mod options;
mod registry;
mod text;

pub use ansi::{AnsiFormatter, ANSI_BOLD, ANSI_DIM, ANSI_GRAY, ANSI_RED, ANSI_RESET};
pub use html::{escape_html, HtmlFormatter};
pub use json::JsonFormatter;
pub use options::FormatterOptions;
pub use registry::{FormatterFactory, FormatterRegistry};
pub use text::TextFormatter;

/// Strategy that renders errors to text.
pub trait ErrorFormatter {
    /// Defaults this instance was built with.
    fn options(&self) -> &FormatterOptions;

    /// Renders exactly one entity. `options` is merged over [`Self::options`].
    fn format(&self, error: &HandlerError, options: Option<&FormatterOptions>) -> String;

    /// Renders `errors` in order, each distinct entity once, joined by `"\n"`.
    fn format_chain(
        &self,
        errors: &[Arc<HandlerError>],
        options: Option<&FormatterOptions>,
    ) -> String {
        let merged = self.options().merged(options);
        dedup_by_identity(errors)
            .map(|error| self.format(error, Some(&merged)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders an arbitrary error value, which must be a [`HandlerError`].
    ///
    /// # Errors
    ///
    /// [`Error::ContractViolation`] for any other error type.
    fn format_dyn(
        &self,
        error: &(dyn std::error::Error + 'static),
        options: Option<&FormatterOptions>,
    ) -> Result<String> {
        match error.downcast_ref::<HandlerError>() {
            Some(error) => Ok(self.format(error, options)),
            None => Err(Error::ContractViolation(
                "Error must be an instance of HandlerError".to_string(),
            )),
        }
    }
}

/// Yields each entity of `errors` once, keeping the first occurrence and the
/// input order. Identity is the entity id, never the content.
pub fn dedup_by_identity(errors: &[Arc<HandlerError>]) -> impl Iterator<Item = &HandlerError> {
    let mut seen = HashSet::with_capacity(errors.len());
    errors.iter().filter(move |error| seen.insert(error.id())).map(|error| error.as_ref())
}

/// Tree layout shared by the text-like formatters: the first entry as is,
/// entry `i` indented by `i - 1` levels and prefixed with a connector.
pub(crate) fn tree_layout(rendered: impl Iterator<Item = String>) -> String {
    rendered
        .enumerate()
        .map(|(index, entry)| match index {
            0 => entry,
            depth => format!("{}└── {entry}", "    ".repeat(depth - 1)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compact JSON of a serializable value; metadata maps cannot fail to serialize.
pub(crate) fn compact_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}
