use crate::types::quiet;
use handler_error::formatter::{
    AnsiFormatter, ErrorFormatter, FormatterOptions, ANSI_BOLD, ANSI_DIM, ANSI_GRAY, ANSI_RED,
    ANSI_RESET,
};
use handler_error::HandlerError;
use serde_json::json;

#[test]
fn format_with_colors() {
    let error = quiet("Test error");
    let formatter = AnsiFormatter::default();
    assert_eq!(
        formatter.format(&error, None),
        format!("{ANSI_BOLD}{ANSI_RED}HandlerError{ANSI_RESET}: Test error")
    );
}

#[test]
fn format_without_colors_falls_back_to_text() {
    let error = quiet("Test error");
    let formatter = AnsiFormatter::new(Some(FormatterOptions::new().colors(false)));
    assert_eq!(formatter.format(&error, None), "HandlerError: Test error");
}

#[test]
fn fallback_respects_timestamp_option() {
    let error = quiet("Test error");
    let formatter =
        AnsiFormatter::new(Some(FormatterOptions::new().colors(false).show_timestamp(true)));
    assert_eq!(
        formatter.format(&error, None),
        format!("[{}] HandlerError: Test error", error.timestamp_iso())
    );
}

#[test]
fn format_with_timestamp_and_metadata() {
    let error = HandlerError::builder("Test error")
        .metadata_value(json!({ "key": "value" }))
        .unwrap()
        .capture_stack(false)
        .build();
    let formatter =
        AnsiFormatter::new(Some(FormatterOptions::new().show_metadata(true).show_timestamp(true)));

    assert_eq!(
        formatter.format(&error, None),
        format!(
            "{ANSI_GRAY}[{}]{ANSI_RESET} {ANSI_BOLD}{ANSI_RED}HandlerError{ANSI_RESET}: Test error\
             \n{ANSI_DIM}Metadata: {{\"key\":\"value\"}}{ANSI_RESET}",
            error.timestamp_iso()
        )
    );
}

#[test]
fn chain_draws_a_tree() {
    let root = quiet("Root error");
    let top = HandlerError::builder("Top error").cause(&root).capture_stack(false).build();
    let top = top.into_shared();

    let formatter = AnsiFormatter::default();
    let rendered = formatter.format_chain(&top.error_chain().error_chain(), None);
    assert_eq!(
        rendered,
        format!(
            "{ANSI_BOLD}{ANSI_RED}HandlerError{ANSI_RESET}: Top error\
             \n└── {ANSI_BOLD}{ANSI_RED}HandlerError{ANSI_RESET}: Root error"
        )
    );
}
