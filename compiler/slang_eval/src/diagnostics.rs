//! Call frame tracking for function calls.
//!
//! `CallStack` records which functions are active so runtime errors can
//! carry a backtrace, and enforces the optional call depth limit.

use crate::errors::{call_depth_exceeded, Backtrace, ExecError};

/// Live call stack of one `execute` invocation.
///
/// Each function call pushes its name; return pops it. The depth check is
/// part of `push`.
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<String>,
    /// `None` means unlimited.
    max_depth: Option<usize>,
}

impl CallStack {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is not pushed when the limit is reached.
    pub fn push(&mut self, name: &str) -> Result<(), ExecError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(call_depth_exceeded(max));
            }
        }
        self.frames.push(name.to_string());
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of the active calls, innermost first.
    pub fn capture(&self) -> Backtrace {
        Backtrace::new(self.frames.iter().rev().cloned().collect())
    }

    /// Attach a backtrace to `err` unless the stack is empty or `err`
    /// already carries one from a deeper frame.
    pub fn attach_backtrace(&self, err: ExecError) -> ExecError {
        if self.frames.is_empty() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;
