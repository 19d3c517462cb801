use super::{dedup_by_identity, ErrorFormatter, FormatterOptions};
use crate::types::{HandlerError, Metadata};
use serde::Serialize;
use std::sync::Arc;

/// Widest indent honoured; larger sizes are clamped.
const MAX_INDENT: usize = 10;

/// JSON documents: one object per entity, an array for a chain.
///
/// Defaults: indent 2, metadata, stack trace and timestamp included.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    options: FormatterOptions,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    message: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
}

impl<'a> JsonEntry<'a> {
    fn new(error: &'a HandlerError, options: &FormatterOptions) -> Self {
        Self {
            message: error.message(),
            name: error.name(),
            stack: error.stack().filter(|_| options.stack_trace_enabled()),
            timestamp: options.timestamp_enabled().then(|| error.timestamp_iso()),
            metadata: options.metadata_enabled().then(|| error.metadata()),
        }
    }
}

impl JsonFormatter {
    pub fn defaults() -> FormatterOptions {
        FormatterOptions::new()
            .indent_size(2)
            .show_metadata(true)
            .show_stack_trace(true)
            .show_timestamp(true)
    }

    pub fn new(options: Option<FormatterOptions>) -> Self {
        Self { options: Self::defaults().merged(options.as_ref()) }
    }

    fn render<T: Serialize + ?Sized>(value: &T, options: &FormatterOptions) -> String {
        let indent = options.indent_size.unwrap_or(0).min(MAX_INDENT);
        if indent == 0 {
            return super::compact_json(value);
        }

        let indent = " ".repeat(indent);
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        match value.serialize(&mut serializer) {
            Ok(()) => String::from_utf8(out).unwrap_or_default(),
            Err(error) => {
                tracing::warn!(%error, "json rendering failed; falling back to compact output");
                super::compact_json(value)
            }
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ErrorFormatter for JsonFormatter {
    fn options(&self) -> &FormatterOptions {
        &self.options
    }

    fn format(&self, error: &HandlerError, options: Option<&FormatterOptions>) -> String {
        let options = self.options.merged(options);
        Self::render(&JsonEntry::new(error, &options), &options)
    }

    fn format_chain(
        &self,
        errors: &[Arc<HandlerError>],
        options: Option<&FormatterOptions>,
    ) -> String {
        let options = self.options.merged(options);
        let compact = options.merge(&FormatterOptions::new().indent_size(0));
        let entries: Vec<serde_json::Value> = dedup_by_identity(errors)
            .map(|error| {
                let rendered = self.format(error, Some(&compact));
                serde_json::from_str(&rendered).unwrap_or(serde_json::Value::String(rendered))
            })
            .collect();
        Self::render(&entries, &options)
    }
}
