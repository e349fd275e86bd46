use super::*;
use pretty_assertions::assert_eq;
use slang_eval::buffer_handler;

#[test]
fn plain_line_is_complete() {
    let mut buffer = ReplBuffer::default();
    assert_eq!(buffer.push_line("x = 1;"), Some("x = 1;\n".to_string()));
    assert!(!buffer.is_continuing());
}

#[test]
fn open_definition_is_buffered_until_closed() {
    let mut buffer = ReplBuffer::default();
    assert_eq!(buffer.push_line("func f() {"), None);
    assert!(buffer.is_continuing());
    assert_eq!(buffer.push_line("x = 2;"), None);
    assert_eq!(
        buffer.push_line("}"),
        Some("func f() {\nx = 2;\n}\n".to_string())
    );
    assert!(!buffer.is_continuing());
}

#[test]
fn stray_closing_brace_does_not_stick() {
    let mut buffer = ReplBuffer::default();
    assert!(buffer.push_line("}").is_some());
    assert_eq!(buffer.push_line("func f() {"), None);
}

#[test]
fn finish_returns_unclosed_input() {
    let mut buffer = ReplBuffer::default();
    buffer.push_line("func f() {");
    let rest = buffer.finish().unwrap();
    let err = Interpreter::new()
        .execute(&rest, &buffer_handler())
        .unwrap_err();
    assert!(matches!(
        err.kind,
        slang_eval::ExecErrorKind::UnclosedFunctionDefinition { .. }
    ));
    assert_eq!(buffer.finish(), None);
}

#[test]
fn chunks_accumulate_state() {
    let interpreter = Interpreter::new();
    let out = buffer_handler();
    let mut buffer = ReplBuffer::default();
    for line in ["n = 5;", "func twice() {", "n = n * 2;", "}", "twice();", "print n;"] {
        if let Some(chunk) = buffer.push_line(line) {
            interpreter.execute(&chunk, &out).unwrap();
        }
    }
    assert_eq!(out.get_output(), "10\n");
}

#[test]
fn meta_commands() {
    assert_eq!(parse_meta(":vars\n"), Some(Meta::Vars));
    assert_eq!(parse_meta("  :q"), Some(Meta::Quit));
    assert_eq!(parse_meta(":nope"), Some(Meta::Unknown));
    assert_eq!(parse_meta("print 1;"), None);
}
