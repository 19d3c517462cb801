//! Best-effort stack capture.
//!
//! A [`std::backtrace::Backtrace`] is captured when an entity is built and
//! its textual form is reduced to the frames that belong to the caller:
//! standard library, backtrace machinery, this crate's construction path and
//! third-party registry sources are dropped. Nothing here ever fails; a
//! stack that cannot be understood yields no frames.

use serde::{Deserialize, Serialize};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::path::Path;

/// One retained frame of a captured stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    pub method: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub col: Option<u32>,
}

/// Raw backtrace text plus the frames parsed out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedStack {
    pub raw: Option<String>,
    pub frames: Vec<StackFrame>,
}

const SKIPPED_METHOD_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "<std::",
    "<core::",
    "<alloc::",
    "test::",
    "__rust",
    "_start",
    "__libc",
    "handler_error::types::stack::",
    "handler_error::types::handler_error::",
];

const SKIPPED_FILE_MARKERS: &[&str] = &["/rustc/", "/.cargo/registry/", "\\.cargo\\registry\\"];

/// Captures the current stack, honouring `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`.
///
/// When backtraces are disabled the result is empty.
pub fn capture() -> CapturedStack {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => {
            let raw = backtrace.to_string();
            let frames = parse_frames(&raw);
            CapturedStack { raw: Some(raw), frames }
        }
        _ => CapturedStack::default(),
    }
}

/// Parses the `Display` form of a [`Backtrace`] into caller frames.
///
/// # Examples
///
/// ```
/// use handler_error::types::stack::parse_frames;
///
/// let raw = concat!(
///     "   0: std::rt::lang_start\n",
///     "             at /rustc/abc/library/std/src/rt.rs:1:1\n",
///     "   1: app::load_config\n",
///     "             at ./src/config.rs:42:9\n",
/// );
/// let frames = parse_frames(raw);
/// assert_eq!(frames.len(), 1);
/// assert_eq!(frames[0].method.as_deref(), Some("app::load_config"));
/// assert_eq!(frames[0].line, Some(42));
/// ```
pub fn parse_frames(raw: &str) -> Vec<StackFrame> {
    let mut frames = Vec::new();
    let mut current: Option<StackFrame> = None;

    for line in raw.lines() {
        let trimmed = line.trim();
        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(frame) = current.as_mut() {
                if frame.file.is_none() {
                    apply_location(frame, location);
                }
            }
        } else if let Some(symbol) = frame_symbol(trimmed) {
            if let Some(done) = current.take() {
                frames.push(done);
            }
            current = Some(StackFrame { method: Some(symbol.to_string()), ..Default::default() });
        }
    }
    if let Some(done) = current {
        frames.push(done);
    }

    frames.retain(is_caller_frame);
    for frame in &mut frames {
        if let Some(file) = frame.file.take() {
            frame.file = Some(relative_path(&file));
        }
    }
    frames
}

/// Converts an absolute path or `file://` URL to a path relative to the
/// current directory. Anything else is returned unchanged.
pub fn relative_path(file_path: &str) -> String {
    let absolute = file_path.strip_prefix("file://").unwrap_or(file_path);
    let absolute = Path::new(absolute);
    if !absolute.is_absolute() {
        return file_path.to_string();
    }

    match std::env::current_dir() {
        Ok(cwd) => match absolute.strip_prefix(&cwd) {
            Ok(relative) => relative.display().to_string(),
            Err(_) => absolute.display().to_string(),
        },
        Err(error) => {
            tracing::warn!(%error, "could not resolve current directory for stack paths");
            file_path.to_string()
        }
    }
}

/// `"12: some::symbol"` -> `Some("some::symbol")`.
fn frame_symbol(line: &str) -> Option<&str> {
    let (index, symbol) = line.split_once(": ")?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let symbol = symbol.trim();
    (!symbol.is_empty()).then_some(symbol)
}

fn apply_location(frame: &mut StackFrame, location: &str) {
    let mut parts = location.rsplitn(3, ':');
    let col = parts.next().and_then(|c| c.parse().ok());
    let line = parts.next().and_then(|l| l.parse().ok());
    match (parts.next(), line, col) {
        (Some(file), Some(line), Some(col)) => {
            frame.file = Some(file.to_string());
            frame.line = Some(line);
            frame.col = Some(col);
        }
        _ => frame.file = Some(location.to_string()),
    }
}

fn is_caller_frame(frame: &StackFrame) -> bool {
    let method = frame.method.as_deref().unwrap_or_default();
    if method.is_empty() && frame.file.is_none() {
        return false;
    }
    if SKIPPED_METHOD_PREFIXES.iter().any(|prefix| method.starts_with(prefix)) {
        return false;
    }
    match frame.file.as_deref() {
        Some(file) => !SKIPPED_FILE_MARKERS.iter().any(|marker| file.contains(marker)),
        None => true,
    }
}
