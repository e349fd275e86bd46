use super::*;

#[test]
fn buffer_println_appends_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("10");
    handler.println("20");
    assert_eq!(handler.get_output(), "10\n20\n");
}

#[test]
fn take_output_drains_buffer() {
    let handler = buffer_handler();
    handler.println("x");
    assert_eq!(handler.take_output(), "x\n");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn clear_empties_buffer() {
    let handler = buffer_handler();
    handler.println("hello");
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn stdout_and_silent_capture_nothing() {
    let silent = silent_handler();
    silent.println("dropped");
    assert_eq!(silent.get_output(), "");
    assert_eq!(silent.take_output(), "");

    let stdout = PrintHandlerImpl::Stdout(StdoutPrintHandler);
    assert_eq!(stdout.get_output(), "");
}

#[test]
fn buffer_handler_is_thread_safe() {
    use std::thread;

    let handler = buffer_handler();
    let other = Arc::clone(&handler);

    let t1 = thread::spawn(move || {
        for _ in 0..100 {
            other.println("a");
        }
    });
    for _ in 0..100 {
        handler.println("b");
    }
    t1.join().unwrap();

    assert_eq!(handler.get_output().lines().count(), 200);
}
