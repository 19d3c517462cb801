//! Human-oriented log reports for a single error.
//!
//! Three layouts are available:
//!
//! - [`LogStyle::Compact`]: one line for centralized log collection,
//!   `timestamp [method] SEVERITY Type: code file message`.
//! - [`LogStyle::Detail`]: a header followed by description, received values,
//!   solution, example and stack sections.
//! - [`LogStyle::Simple`]: `[library] Type: context message solution`.
//!
//! Parts that are not set on the error are left out.
//!
//! # Examples
//!
//! ```
//! use handler_error::report::{render, LogStyle};
//! use handler_error::{HandlerError, Severity};
//!
//! let err = HandlerError::builder("port already in use")
//!     .severity(Severity::Warning)
//!     .library("net")
//!     .solution("pick another port")
//!     .capture_stack(false)
//!     .build();
//!
//! assert_eq!(
//!     render(&err, LogStyle::Simple),
//!     "[net] Error: port already in use pick another port"
//! );
//! ```

use crate::error::{Error, Result};
use crate::types::{HandlerError, Severity};
use core::fmt::{self, Display};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Layout of a log report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStyle {
    Compact,
    Detail,
    #[default]
    Simple,
}

impl LogStyle {
    pub const ALL: [LogStyle; 3] = [LogStyle::Compact, LogStyle::Detail, LogStyle::Simple];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogStyle::Compact => "compact",
            LogStyle::Detail => "detail",
            LogStyle::Simple => "simple",
        }
    }
}

impl Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LogStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("Invalid log type: {s}")))
    }
}

/// Renders `error` in the requested layout.
pub fn render(error: &HandlerError, style: LogStyle) -> String {
    match style {
        LogStyle::Compact => render_compact(error),
        LogStyle::Detail => render_detail(error),
        LogStyle::Simple => render_simple(error),
    }
}

fn render_compact(error: &HandlerError) -> String {
    let severity = error.severity().as_str().to_uppercase();
    let parts = [
        Some(error.timestamp_iso()),
        error.method().map(|method| format!("[{method}]")),
        Some(format!("{severity} {}:", error.error_type().label())),
        error.code().map(str::to_string),
        error.file().map(str::to_string),
        Some(error.message().to_string()),
    ];
    join_present(parts)
}

fn render_detail(error: &HandlerError) -> String {
    let severity = error.severity().as_str().to_uppercase();
    let separator = if error.code().is_some() { ":" } else { "" };
    let kind = format!("{}{separator}", error.error_type().label());
    let info = join_present([Some(severity), Some(kind), error.code().map(str::to_string)]);

    let location = join_present([
        error.method().map(str::to_string),
        error.file().map(str::to_string),
    ]);
    let location = if location.is_empty() { None } else { Some(format!("{location}:")) };

    let mut out = join_present([
        Some(error.name().to_string()),
        Some(format!("[{info}]")),
        location,
        Some(error.message().to_string()),
    ]);

    let details = error.details();
    out.push_str("\n\nDescription:\n");
    let context = details.context.as_deref().unwrap_or_default();
    out.push_str(&format!("{context} {}", error.message()));
    if let Some(values) = &details.values {
        out.push_str("\nReceived value: ");
        out.push_str(&serde_json::to_string_pretty(values).unwrap_or_default());
    }
    if let Some(solution) = &details.solution {
        out.push_str("\n\nSolution:\n");
        out.push_str(solution);
    }
    if let Some(example) = &details.example {
        out.push_str("\n\nExample:\n");
        out.push_str(example);
    }

    if !error.stack_trace().is_empty() {
        out.push_str("\n\nStack Trace:");
        for frame in error.stack_trace() {
            out.push_str(&format!(
                "\n ❯ {} {}:{}",
                frame.method.as_deref().unwrap_or("<anonymous>"),
                frame.file.as_deref().unwrap_or("undefined"),
                frame.line.map_or_else(|| "unknown".to_string(), |line| line.to_string()),
            ));
        }
    }
    out
}

fn render_simple(error: &HandlerError) -> String {
    let details = error.details();
    let mut out = join_present([
        details.library.as_ref().map(|library| format!("[{library}]")),
        Some(format!("{}:", error.error_type().label())),
        details.context.clone(),
        Some(error.message().to_string()),
        details.solution.clone(),
    ]);
    if let Some(values) = &details.values {
        out.push_str(&format!(
            " \nReceived value: {}",
            serde_json::to_string_pretty(values).unwrap_or_default()
        ));
    }
    out
}

fn join_present<const N: usize>(parts: [Option<String>; N]) -> String {
    parts.into_iter().flatten().filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}

impl HandlerError {
    /// Emits the rendered report as a `tracing` event at a level matching
    /// the severity.
    pub fn log(&self, style: LogStyle) {
        let report = render(self, style);
        let id = self.id();
        match self.severity() {
            Severity::Debug => tracing::debug!(error.id = %id, style = %style, "{report}"),
            Severity::Info => tracing::info!(error.id = %id, style = %style, "{report}"),
            Severity::Warning => tracing::warn!(error.id = %id, style = %style, "{report}"),
            Severity::Error | Severity::Critical => {
                tracing::error!(error.id = %id, style = %style, "{report}")
            }
        }
    }
}
