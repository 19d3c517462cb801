use crate::types::quiet;
use handler_error::formatter::{escape_html, ErrorFormatter, FormatterOptions, HtmlFormatter};
use handler_error::HandlerError;

#[test]
fn format_without_optional_blocks() {
    let error =
        HandlerError::builder("Test error").name("ValidationError").capture_stack(false).build();
    let formatter = HtmlFormatter::new(Some(FormatterOptions::minimal()));

    let expected = concat!(
        "\n      <div class=\"error validationError\">",
        "\n        <h3 class=\"error-title\">ValidationError</h3>",
        "\n        <p class=\"error-message\">Test error</p>",
        "\n        ",
        "\n        ",
        "\n        ",
        "\n      </div>",
        "\n    ",
    );
    assert_eq!(formatter.format(&error, None), expected);
}

#[test]
fn format_with_defaults() {
    let error = quiet("Test error");
    let formatter = HtmlFormatter::default();

    let rendered = formatter.format(&error, None);
    assert!(rendered.contains("<div class=\"error handlerError\">"));
    assert!(rendered.contains(&format!(
        "<div class=\"error-timestamp\">{}</div>",
        error.timestamp_iso()
    )));
    assert!(rendered.contains("<div class=\"error-metadata\"><pre>{}</pre></div>"));
    assert!(!rendered.contains("error-stack"));
}

#[test]
fn message_and_metadata_are_escaped() {
    let error = HandlerError::builder("<script>alert('x')</script>")
        .metadata_value(serde_json::json!({ "a": "b&c" }))
        .unwrap()
        .capture_stack(false)
        .build();
    let formatter = HtmlFormatter::new(Some(FormatterOptions::new().show_timestamp(false)));

    let rendered = formatter.format(&error, None);
    assert!(rendered.contains(
        "<p class=\"error-message\">&lt;script&gt;alert(&#039;x&#039;)&lt;&#x2F;script&gt;</p>"
    ));
    assert!(rendered.contains("<pre>{&quot;a&quot;:&quot;b&amp;c&quot;}</pre>"));
}

#[test]
fn escape_covers_all_special_characters() {
    assert_eq!(escape_html("&<>\"'`/"), "&amp;&lt;&gt;&quot;&#039;&#x60;&#x2F;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn chain_is_wrapped() {
    let root = quiet("Root error");
    let top = HandlerError::builder("Top error").cause(&root).capture_stack(false).build();
    let top = top.into_shared();
    let formatter = HtmlFormatter::new(Some(FormatterOptions::minimal()));

    let rendered = formatter.format_chain(&[top.clone(), root.clone(), top.clone()], None);
    assert!(rendered.starts_with("<div class=\"error-chain\">"));
    assert!(rendered.ends_with("</div>"));
    assert_eq!(rendered.matches("<div class=\"error handlerError\">").count(), 2);
    assert!(rendered.find("Top error").unwrap() < rendered.find("Root error").unwrap());
}

#[test]
fn stack_is_escaped_when_shown() {
    let error = HandlerError::new("Test error");
    let formatter = HtmlFormatter::new(Some(FormatterOptions::verbose()));

    let rendered = formatter.format(&error, None);
    match error.stack() {
        Some(stack) => assert!(rendered.contains(&format!(
            "<pre class=\"error-stack\">{}</pre>",
            escape_html(stack)
        ))),
        None => assert!(!rendered.contains("error-stack")),
    }
}
