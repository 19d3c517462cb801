use handler_error::types::stack::{parse_frames, relative_path};

const RAW: &str = "   0: std::backtrace_rs::backtrace::libunwind::trace
             at /rustc/90b35a623/library/std/src/../../backtrace/src/backtrace/libunwind.rs:116:5
   1: std::backtrace::Backtrace::capture
             at /rustc/90b35a623/library/std/src/backtrace.rs:296:9
   2: handler_error::types::stack::capture
             at ./src/types/stack.rs:48:21
   3: handler_error::types::handler_error::HandlerError::with_options
             at ./src/types/handler_error/mod.rs:74:55
   4: my_app::config::load
             at ./src/config.rs:42:9
   5: serde_json::de::from_str
             at /home/dev/.cargo/registry/src/index.crates.io/serde_json-1.0.145/src/de.rs:2670:5
   6: my_app::main
             at ./src/main.rs:7:5
   7: core::ops::function::FnOnce::call_once
             at /rustc/90b35a623/library/core/src/ops/function.rs:250:5
   8: main
   9: __libc_start_main
  10: _start
";

#[test]
fn keeps_only_caller_frames() {
    let frames = parse_frames(RAW);
    let methods: Vec<_> = frames.iter().filter_map(|f| f.method.as_deref()).collect();
    assert_eq!(methods, ["my_app::config::load", "my_app::main", "main"]);
}

#[test]
fn parses_locations() {
    let frames = parse_frames(RAW);
    assert_eq!(frames[0].file.as_deref(), Some("./src/config.rs"));
    assert_eq!(frames[0].line, Some(42));
    assert_eq!(frames[0].col, Some(9));
    assert_eq!(frames[2].file, None);
}

#[test]
fn garbage_yields_no_frames() {
    assert!(parse_frames("").is_empty());
    assert!(parse_frames("not a backtrace at all").is_empty());
    assert!(parse_frames("disabled backtrace").is_empty());
}

#[test]
fn relative_path_strips_current_dir() {
    let cwd = std::env::current_dir().unwrap();
    let absolute = cwd.join("src").join("lib.rs");

    let relative = relative_path(&absolute.display().to_string());
    assert_eq!(std::path::Path::new(&relative), std::path::Path::new("src").join("lib.rs"));
}

#[test]
fn relative_path_leaves_relative_input() {
    assert_eq!(relative_path("./src/lib.rs"), "./src/lib.rs");
    assert_eq!(relative_path("not/absolute.rs"), "not/absolute.rs");
}
