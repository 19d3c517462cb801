use super::{
    compact_json, dedup_by_identity, tree_layout, ErrorFormatter, FormatterOptions, TextFormatter,
};
use crate::types::HandlerError;
use std::sync::Arc;

pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_DIM: &str = "\x1b[2m";
pub const ANSI_RED: &str = "\x1b[31m";
pub const ANSI_GRAY: &str = "\x1b[90m";

/// Terminal output with ANSI escape codes.
///
/// Defaults: colors on, timestamp and metadata hidden. With colors off the
/// output is exactly that of a [`TextFormatter`] configured with the same
/// options.
#[derive(Debug, Clone)]
pub struct AnsiFormatter {
    options: FormatterOptions,
}

impl AnsiFormatter {
    pub fn defaults() -> FormatterOptions {
        FormatterOptions::new().colors(true).show_metadata(false).show_timestamp(false)
    }

    pub fn new(options: Option<FormatterOptions>) -> Self {
        Self { options: Self::defaults().merged(options.as_ref()) }
    }
}

impl Default for AnsiFormatter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ErrorFormatter for AnsiFormatter {
    fn options(&self) -> &FormatterOptions {
        &self.options
    }

    fn format(&self, error: &HandlerError, options: Option<&FormatterOptions>) -> String {
        let options = self.options.merged(options);

        if !options.colors_enabled() {
            return TextFormatter::new(Some(options)).format(error, None);
        }

        let mut result =
            format!("{ANSI_BOLD}{ANSI_RED}{}{ANSI_RESET}: {}", error.name(), error.message());
        if options.timestamp_enabled() {
            result = format!("{ANSI_GRAY}[{}]{ANSI_RESET} {result}", error.timestamp_iso());
        }
        if options.metadata_enabled() && !error.metadata().is_empty() {
            result.push_str(&format!(
                "\n{ANSI_DIM}Metadata: {}{ANSI_RESET}",
                compact_json(error.metadata())
            ));
        }
        result
    }

    fn format_chain(
        &self,
        errors: &[Arc<HandlerError>],
        options: Option<&FormatterOptions>,
    ) -> String {
        let options = self.options.merged(options);
        tree_layout(dedup_by_identity(errors).map(|error| self.format(error, Some(&options))))
    }
}
