//! The interpreter: owns the namespace and drives extraction and dispatch.
//!
//! # Locking
//!
//! The namespace sits behind one mutex held for an entire `execute` call.
//! Function calls recurse inside that call on a `&mut Namespace` borrowed
//! from the guard, so re-entry never touches the lock again. Concurrent
//! callers sharing one `Interpreter` are serialized per `execute`.

mod builder;
mod session;

use parking_lot::Mutex;

use crate::errors::ExecError;
use crate::namespace::Namespace;
use crate::print_handler::{PrintHandlerImpl, SharedPrintHandler};

pub use builder::InterpreterBuilder;
use session::Session;

/// A slang interpreter instance.
///
/// State accumulates across `execute` calls. A failed call leaves every
/// mutation made before the failure in place.
pub struct Interpreter {
    namespace: Mutex<Namespace>,
    print_handler: SharedPrintHandler,
    max_call_depth: Option<usize>,
}

impl Interpreter {
    /// Interpreter with an empty namespace, printing to stdout, no call depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Execute `source`, writing output to `out`.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn execute(&self, source: &str, out: &PrintHandlerImpl) -> Result<(), ExecError> {
        let mut namespace = self.namespace.lock();
        let mut session = Session::new(&mut namespace, out, self.max_call_depth);
        let result = session.run(source);
        if let Err(err) = &result {
            tracing::debug!(error = %err.kind, "execution failed");
        }
        result
    }

    /// Execute `source` against the configured print handler.
    pub fn run(&self, source: &str) -> Result<(), ExecError> {
        self.execute(source, &self.print_handler)
    }

    /// The configured print handler.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn variable(&self, name: &str) -> Option<i64> {
        self.namespace.lock().variables.get(name)
    }

    /// All variables sorted by name.
    pub fn variables(&self) -> Vec<(String, i64)> {
        self.namespace.lock().variables.snapshot()
    }

    /// Stored body of `name`, as it will be re-executed on call.
    pub fn function_body(&self, name: &str) -> Option<String> {
        self.namespace
            .lock()
            .functions
            .get(name)
            .map(|body| body.to_string())
    }

    /// Defined function names, sorted.
    pub fn function_names(&self) -> Vec<String> {
        self.namespace.lock().functions.names()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
