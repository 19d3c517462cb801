use super::{compact_json, dedup_by_identity, ErrorFormatter, FormatterOptions};
use crate::types::HandlerError;
use std::sync::Arc;

/// HTML fragments for web display.
///
/// Defaults: timestamp and metadata shown, stack trace hidden.
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    options: FormatterOptions,
}

impl HtmlFormatter {
    pub fn defaults() -> FormatterOptions {
        FormatterOptions::new().show_metadata(true).show_stack_trace(false).show_timestamp(true)
    }

    pub fn new(options: Option<FormatterOptions>) -> Self {
        Self { options: Self::defaults().merged(options.as_ref()) }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ErrorFormatter for HtmlFormatter {
    fn options(&self) -> &FormatterOptions {
        &self.options
    }

    fn format(&self, error: &HandlerError, options: Option<&FormatterOptions>) -> String {
        let options = self.options.merged(options);

        let timestamp = if options.timestamp_enabled() {
            format!("<div class=\"error-timestamp\">{}</div>", error.timestamp_iso())
        } else {
            String::new()
        };
        let metadata = if options.metadata_enabled() {
            format!(
                "<div class=\"error-metadata\"><pre>{}</pre></div>",
                escape_html(&compact_json(error.metadata()))
            )
        } else {
            String::new()
        };
        let stack = match error.stack() {
            Some(stack) if options.stack_trace_enabled() => {
                // Escaped like every other inserted value; frame names can hold `<`.
                format!("<pre class=\"error-stack\">{}</pre>", escape_html(stack))
            }
            _ => String::new(),
        };

        format!(
            "\n      <div class=\"error {class}\">\
             \n        <h3 class=\"error-title\">{name}</h3>\
             \n        <p class=\"error-message\">{message}</p>\
             \n        {timestamp}\
             \n        {metadata}\
             \n        {stack}\
             \n      </div>\
             \n    ",
            class = lowercase_first_letter(error.name()),
            name = error.name(),
            message = escape_html(error.message()),
        )
    }

    fn format_chain(
        &self,
        errors: &[Arc<HandlerError>],
        options: Option<&FormatterOptions>,
    ) -> String {
        let options = self.options.merged(options);
        let entries: Vec<String> =
            dedup_by_identity(errors).map(|error| self.format(error, Some(&options))).collect();
        format!("<div class=\"error-chain\">{}</div>", entries.join("\n"))
    }
}

/// Escapes `& < > " ' / `` ` for safe inclusion in HTML text.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            '/' => escaped.push_str("&#x2F;"),
            '`' => escaped.push_str("&#x60;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn lowercase_first_letter(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
