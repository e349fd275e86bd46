//! Statement dispatch for one `execute` call.

use slang_expr::evaluate;
use slang_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::diagnostics::CallStack;
use crate::errors::{invalid_assignment_target, ExecError};
use crate::extractor::{Block, Blocks, FunctionDef};
use crate::namespace::Namespace;
use crate::print_handler::PrintHandlerImpl;
use crate::statement::Statement;
use crate::syntax::is_identifier;

/// Mutable state of one `execute` call, shared by every nested function call.
pub(super) struct Session<'a> {
    namespace: &'a mut Namespace,
    out: &'a PrintHandlerImpl,
    calls: CallStack,
}

impl<'a> Session<'a> {
    pub(super) fn new(
        namespace: &'a mut Namespace,
        out: &'a PrintHandlerImpl,
        max_call_depth: Option<usize>,
    ) -> Self {
        Self {
            namespace,
            out,
            calls: CallStack::new(max_call_depth),
        }
    }

    /// Extract and dispatch every block of `source` in order.
    ///
    /// Definitions are registered as they are reached, so a statement can
    /// only call functions defined above it (or in an earlier `execute`).
    pub(super) fn run(&mut self, source: &str) -> Result<(), ExecError> {
        for block in Blocks::new(source) {
            match block {
                Ok(Block::Function(def)) => self.define(&def),
                Ok(Block::Statement { line, text }) => self
                    .dispatch(text)
                    .map_err(|err| err.in_statement(line, text))
                    .map_err(|err| self.calls.attach_backtrace(err))?,
                Err(err) => return Err(self.calls.attach_backtrace(err)),
            }
        }
        Ok(())
    }

    fn define(&mut self, def: &FunctionDef) {
        let replaced = self.namespace.functions.define(&def.name, &def.body);
        debug!(name = %def.name, line = def.line, replaced, "defined function");
    }

    fn dispatch(&mut self, text: &str) -> Result<(), ExecError> {
        let statement = Statement::classify(text);
        trace!(?statement, "dispatch");
        match statement {
            Statement::Assign { target, expression } => self.assign(target, expression),
            Statement::Print { expression } => {
                let value = evaluate(expression, &self.namespace.variables)?;
                self.out.println(&value.to_string());
                Ok(())
            }
            Statement::Call { name } => self.call(name),
            Statement::Unrecognized => {
                trace!(text, "ignoring unrecognized statement");
                Ok(())
            }
        }
    }

    fn assign(&mut self, target: &str, expression: &str) -> Result<(), ExecError> {
        if !is_identifier(target) {
            return Err(invalid_assignment_target(target));
        }
        let value = evaluate(expression, &self.namespace.variables)?;
        self.namespace.variables.assign(target, value);
        Ok(())
    }

    /// Re-run the stored body of `name` in this session.
    ///
    /// An undefined function is not an error: a diagnostic line goes to the
    /// output sink and execution continues.
    #[tracing::instrument(level = "debug", skip(self))]
    fn call(&mut self, name: &str) -> Result<(), ExecError> {
        let Some(body) = self.namespace.functions.get(name) else {
            debug!("call to undefined function");
            self.out.println(&format!("Function {name} is not defined"));
            return Ok(());
        };

        self.calls.push(name)?;
        let result = ensure_sufficient_stack(|| self.run(&body));
        self.calls.pop();
        result
    }
}
