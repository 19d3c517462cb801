use super::{compact_json, dedup_by_identity, tree_layout, ErrorFormatter, FormatterOptions};
use crate::types::HandlerError;
use std::sync::Arc;

/// Plain text: `[timestamp] Name: message` with an optional metadata line.
///
/// Defaults: timestamp and metadata shown, indent size 2.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    options: FormatterOptions,
}

impl TextFormatter {
    pub fn defaults() -> FormatterOptions {
        FormatterOptions::new().indent_size(2).show_metadata(true).show_timestamp(true)
    }

    pub fn new(options: Option<FormatterOptions>) -> Self {
        Self { options: Self::defaults().merged(options.as_ref()) }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ErrorFormatter for TextFormatter {
    fn options(&self) -> &FormatterOptions {
        &self.options
    }

    fn format(&self, error: &HandlerError, options: Option<&FormatterOptions>) -> String {
        let options = self.options.merged(options);

        let mut result = format!("{}: {}", error.name(), error.message());
        if options.timestamp_enabled() {
            result = format!("[{}] {result}", error.timestamp_iso());
        }
        if options.metadata_enabled() && !error.metadata().is_empty() {
            result.push_str("\nMetadata: ");
            result.push_str(&compact_json(error.metadata()));
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
