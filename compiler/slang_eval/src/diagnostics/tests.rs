use super::*;
use crate::errors::{invalid_function_body, ExecErrorKind};

#[test]
fn empty_stack() {
    let stack = CallStack::new(Some(10));
    assert!(stack.is_empty());
    assert_eq!(stack.depth(), 0);
}

#[test]
fn push_and_pop() {
    let mut stack = CallStack::new(None);
    stack.push("outer").expect("push should succeed");
    stack.push("inner").expect("push should succeed");
    assert_eq!(stack.depth(), 2);
    stack.pop();
    assert_eq!(stack.depth(), 1);
}

#[test]
fn depth_limit_enforced() {
    let mut stack = CallStack::new(Some(2));
    stack.push("a").expect("within limit");
    stack.push("b").expect("within limit");
    let err = stack.push("c").expect_err("push should fail at max depth");
    assert_eq!(err.kind, ExecErrorKind::CallDepthExceeded { limit: 2 });
    assert_eq!(stack.depth(), 2);
}

#[test]
fn unlimited_by_default() {
    let mut stack = CallStack::default();
    for _ in 0..5_000 {
        stack.push("deep").expect("unlimited should never fail");
    }
    assert_eq!(stack.depth(), 5_000);
}

#[test]
fn capture_is_innermost_first() {
    let mut stack = CallStack::new(None);
    stack.push("main").expect("push");
    stack.push("helper").expect("push");
    let backtrace = stack.capture();
    assert_eq!(backtrace.frames(), ["helper", "main"]);
    assert_eq!(backtrace.to_string(), "call backtrace:\n  0: helper\n  1: main\n");
}

#[test]
fn attach_keeps_deepest_backtrace() {
    let mut stack = CallStack::new(None);
    stack.push("outer").expect("push");
    stack.push("inner").expect("push");
    let err = stack.attach_backtrace(invalid_function_body("f"));
    stack.pop();
    let err = stack.attach_backtrace(err);
    assert_eq!(err.backtrace.frames(), ["inner", "outer"]);
}

#[test]
fn attach_on_empty_stack_is_noop() {
    let stack = CallStack::new(None);
    let err = stack.attach_backtrace(invalid_function_body("f"));
    assert!(err.backtrace.is_empty());
}
