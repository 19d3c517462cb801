use handler_error::formatter::{
    AnsiFormatter, FormatterOptions, HtmlFormatter, JsonFormatter, TextFormatter,
};

#[test]
fn merge_prefers_overrides() {
    let base = FormatterOptions::new().show_timestamp(true).show_metadata(true).indent_size(2);
    let overrides = FormatterOptions::new().show_timestamp(false).colors(true);

    let merged = base.merge(&overrides);
    assert_eq!(merged.show_timestamp, Some(false));
    assert_eq!(merged.show_metadata, Some(true));
    assert_eq!(merged.show_stack_trace, None);
    assert_eq!(merged.indent_size, Some(2));
    assert_eq!(merged.colors, Some(true));
}

#[test]
fn merge_with_nothing_is_identity() {
    let base = FormatterOptions::verbose();
    assert_eq!(base.merged(None), base);
    assert_eq!(base.merge(&FormatterOptions::new()), base);
}

#[test]
fn presets() {
    let verbose = FormatterOptions::verbose();
    assert_eq!(verbose.show_timestamp, Some(true));
    assert_eq!(verbose.show_metadata, Some(true));
    assert_eq!(verbose.show_stack_trace, Some(true));
    assert_eq!(verbose.colors, None);

    let minimal = FormatterOptions::minimal();
    assert_eq!(minimal.show_timestamp, Some(false));
    assert_eq!(minimal.show_metadata, Some(false));
    assert_eq!(minimal.show_stack_trace, Some(false));
    assert_eq!(minimal.indent_size, None);
}

#[test]
fn formatter_defaults() {
    let text = TextFormatter::defaults();
    assert_eq!(text.show_timestamp, Some(true));
    assert_eq!(text.show_metadata, Some(true));
    assert_eq!(text.indent_size, Some(2));

    let ansi = AnsiFormatter::defaults();
    assert_eq!(ansi.colors, Some(true));
    assert_eq!(ansi.show_timestamp, Some(false));
    assert_eq!(ansi.show_metadata, Some(false));

    let html = HtmlFormatter::defaults();
    assert_eq!(html.show_stack_trace, Some(false));
    assert_eq!(html.show_timestamp, Some(true));

    let json = JsonFormatter::defaults();
    assert_eq!(json.indent_size, Some(2));
    assert_eq!(json.show_stack_trace, Some(true));
}

#[test]
fn deserializes_partial_camel_case() {
    let options: FormatterOptions =
        serde_json::from_str(r#"{ "showTimestamp": false, "indentSize": 4 }"#).unwrap();
    assert_eq!(options, FormatterOptions::new().show_timestamp(false).indent_size(4));

    let empty: FormatterOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, FormatterOptions::default());
}
