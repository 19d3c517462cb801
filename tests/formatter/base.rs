use crate::types::quiet;
use handler_error::formatter::{ErrorFormatter, FormatterOptions, TextFormatter};
use handler_error::{Error, HandlerError};
use std::io;

/// Formatter relying on the provided chain rendering.
struct Upper {
    options: FormatterOptions,
}

impl ErrorFormatter for Upper {
    fn options(&self) -> &FormatterOptions {
        &self.options
    }

    fn format(&self, error: &HandlerError, options: Option<&FormatterOptions>) -> String {
        let options = self.options.merged(options);
        let message = error.message().to_uppercase();
        match options.show_timestamp {
            Some(true) => format!("{} {message}", error.timestamp_iso()),
            _ => message,
        }
    }
}

#[test]
fn default_chain_dedups_and_joins() {
    let a = quiet("a");
    let b = quiet("b");
    let formatter = Upper { options: FormatterOptions::new() };

    assert_eq!(formatter.format_chain(&[a.clone(), b.clone(), a.clone()], None), "A\nB");
    assert_eq!(formatter.format_chain(&[], None), "");
}

#[test]
fn default_chain_passes_merged_options() {
    let a = quiet("a");
    let formatter = Upper { options: FormatterOptions::new().show_timestamp(true) };

    let call = FormatterOptions::new().show_timestamp(false);
    assert_eq!(formatter.format_chain(&[a.clone()], Some(&call)), "A");
    assert_eq!(
        formatter.format_chain(&[a.clone()], None),
        format!("{} A", a.timestamp_iso())
    );
}

#[test]
fn dedup_uses_identity_not_content() {
    let first = quiet("same");
    let second = quiet("same");
    let formatter = Upper { options: FormatterOptions::new() };

    assert_eq!(formatter.format_chain(&[first, second], None), "SAME\nSAME");
}

#[test]
fn format_dyn_accepts_handler_errors() {
    let error = HandlerError::builder("boxed").capture_stack(false).build();
    let boxed: Box<dyn std::error::Error> = Box::new(error);
    let formatter = TextFormatter::new(Some(FormatterOptions::minimal()));

    assert_eq!(formatter.format_dyn(boxed.as_ref(), None).unwrap(), "HandlerError: boxed");
}

#[test]
fn format_dyn_rejects_foreign_errors() {
    let foreign = io::Error::new(io::ErrorKind::Other, "disk full");
    let formatter = TextFormatter::default();

    let err = formatter.format_dyn(&foreign, None).unwrap_err();
    assert_eq!(
        err,
        Error::ContractViolation("Error must be an instance of HandlerError".to_string())
    );
}
