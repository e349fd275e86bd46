//! `InterpreterBuilder` for creating configured `Interpreter` instances.

use parking_lot::Mutex;

use super::Interpreter;
use crate::namespace::{Namespace, VariableStore};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: empty namespace, stdout output, unlimited call depth.
#[derive(Default)]
pub struct InterpreterBuilder {
    variables: VariableStore,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the variable namespace. Later seeds overwrite earlier ones.
    #[must_use]
    pub fn variables<N, I>(mut self, seed: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, i64)>,
    {
        for (name, value) in seed {
            self.variables.assign(&name.into(), value);
        }
        self
    }

    /// Set the print handler used by [`Interpreter::run`].
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Bound the depth of nested function calls.
    ///
    /// `None` (the default) leaves recursion unbounded.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            namespace: Mutex::new(Namespace::new(self.variables)),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
        }
    }
}
