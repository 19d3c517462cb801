use crate::capture_logs;
use handler_error::report::{render, LogStyle};
use handler_error::{Error, ErrorType, HandlerError, Severity};
use serde_json::json;

fn detailed() -> HandlerError {
    HandlerError::builder("bad input")
        .name("ValidationError")
        .code("E001")
        .method("parse")
        .file("src/config.rs")
        .context("While parsing")
        .values(json!({ "x": 1 }))
        .unwrap()
        .solution("fix it")
        .example("parse(\"1\")")
        .library("config")
        .capture_stack(false)
        .build()
}

#[test]
fn style_parsing() {
    assert_eq!("compact".parse::<LogStyle>().unwrap(), LogStyle::Compact);
    assert_eq!("detail".parse::<LogStyle>().unwrap(), LogStyle::Detail);
    assert_eq!("simple".parse::<LogStyle>().unwrap(), LogStyle::Simple);
    assert_eq!(LogStyle::default(), LogStyle::Simple);

    let err = "verbose".parse::<LogStyle>().unwrap_err();
    assert_eq!(err, Error::InvalidArgument("Invalid log type: verbose".to_string()));
}

#[test]
fn compact_layout() {
    let err = detailed();
    assert_eq!(
        render(&err, LogStyle::Compact),
        format!("{} [parse] ERROR Error: E001 src/config.rs bad input", err.timestamp_iso())
    );
}

#[test]
fn compact_skips_missing_parts() {
    let err = HandlerError::builder("disk low")
        .severity(Severity::Warning)
        .error_type(ErrorType::Warning)
        .capture_stack(false)
        .build();
    assert_eq!(
        render(&err, LogStyle::Compact),
        format!("{} WARNING Warning: disk low", err.timestamp_iso())
    );
}

#[test]
fn detail_layout() {
    let err = detailed();
    assert_eq!(
        render(&err, LogStyle::Detail),
        "ValidationError [ERROR Error: E001] parse src/config.rs: bad input\
         \n\nDescription:\nWhile parsing bad input\
         \nReceived value: {\n  \"x\": 1\n}\
         \n\nSolution:\nfix it\
         \n\nExample:\nparse(\"1\")"
    );
}

#[test]
fn detail_without_code_or_location() {
    let err = HandlerError::builder("boom").capture_stack(false).build();
    assert_eq!(
        render(&err, LogStyle::Detail),
        "HandlerError [ERROR Error] boom\n\nDescription:\n boom"
    );
}

#[test]
fn detail_lists_parsed_frames() {
    let err = HandlerError::new("boom");
    let rendered = render(&err, LogStyle::Detail);
    assert_eq!(rendered.contains("\n\nStack Trace:"), !err.stack_trace().is_empty());
    assert_eq!(rendered.matches("\n ❯ ").count(), err.stack_trace().len());
}

#[test]
fn simple_layout() {
    let err = detailed();
    assert_eq!(
        render(&err, LogStyle::Simple),
        "[config] Error: While parsing bad input fix it \nReceived value: {\n  \"x\": 1\n}"
    );

    let bare = HandlerError::builder("boom").capture_stack(false).build();
    assert_eq!(render(&bare, LogStyle::Simple), "Error: boom");
}

#[test]
fn log_uses_severity_level() {
    let warning = HandlerError::builder("disk low")
        .severity(Severity::Warning)
        .capture_stack(false)
        .build();
    let output = capture_logs(|| warning.log(LogStyle::Simple));

    assert!(output.contains("WARN"));
    assert!(output.contains("Error: disk low"));
    assert!(output.contains(&warning.id().to_string()));
}

#[test]
fn log_critical_as_error() {
    let critical = HandlerError::builder("out of memory")
        .severity(Severity::Critical)
        .capture_stack(false)
        .build();
    let output = capture_logs(|| critical.log(LogStyle::Compact));

    assert!(output.contains("ERROR"));
    assert!(output.contains("CRITICAL Error: out of memory"));
}
