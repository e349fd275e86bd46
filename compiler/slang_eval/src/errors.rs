//! Execution errors.
//!
//! Every kind here is fatal: it unwinds the whole `execute` call. Calling an
//! undefined function is deliberately absent, it is reported on the output
//! sink instead (see `Session::call`).

use std::fmt;

use slang_expr::{ExprError, ExprErrorKind};

/// Typed category of an execution failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecErrorKind {
    /// An expression failed to evaluate.
    #[error("{0}")]
    Expr(ExprError),

    /// Input ended while a function body was still open.
    #[error("unclosed function definition starting at line {line}")]
    UnclosedFunctionDefinition { line: usize },

    /// Function header with no `(` after the keyword, or no valid name.
    #[error("invalid function declaration: {header}")]
    InvalidFunctionDeclaration { header: String },

    /// Function definition without a `{ ... }` body.
    #[error("invalid function body for '{name}'")]
    InvalidFunctionBody { name: String },

    /// Left side of `=` is not an identifier.
    #[error("invalid assignment target: '{target}'")]
    InvalidAssignmentTarget { target: String },

    /// The configured call depth limit was reached.
    #[error("maximum call depth exceeded (limit: {limit})")]
    CallDepthExceeded { limit: usize },
}

/// Function names active when an error was raised, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Backtrace {
    frames: Vec<String>,
}

impl Backtrace {
    pub fn new(frames: Vec<String>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for Backtrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "call backtrace:")?;
        for (i, name) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {name}")?;
        }
        Ok(())
    }
}

/// Execution error with statement context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecError {
    pub kind: ExecErrorKind,
    /// 1-based line within the text being executed (a function body for
    /// errors raised inside a call).
    pub line: Option<usize>,
    /// The statement being executed, if the error came from one.
    pub statement: Option<String>,
    pub backtrace: Backtrace,
}

impl ExecError {
    pub fn from_kind(kind: ExecErrorKind) -> Self {
        Self {
            kind,
            line: None,
            statement: None,
            backtrace: Backtrace::default(),
        }
    }

    /// Attach the statement that failed. Keeps the innermost one.
    #[must_use]
    pub fn in_statement(mut self, line: usize, statement: &str) -> Self {
        if self.statement.is_none() {
            self.line = Some(line);
            self.statement = Some(statement.to_string());
        }
        self
    }

    /// Attach a backtrace. Keeps the innermost one.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: Backtrace) -> Self {
        if self.backtrace.is_empty() {
            self.backtrace = backtrace;
        }
        self
    }

    /// The expression error kind, if this failure came from evaluation.
    pub fn expr_kind(&self) -> Option<&ExprErrorKind> {
        match &self.kind {
            ExecErrorKind::Expr(err) => Some(&err.kind),
            _ => None,
        }
    }
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let (Some(line), Some(statement)) = (self.line, &self.statement) {
            write!(f, "\n  --> line {line}: {statement}")?;
        }
        if !self.backtrace.is_empty() {
            write!(f, "\n{}", self.backtrace)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ExprError> for ExecError {
    fn from(err: ExprError) -> Self {
        Self::from_kind(ExecErrorKind::Expr(err))
    }
}

#[cold]
pub fn unclosed_function_definition(line: usize) -> ExecError {
    ExecError::from_kind(ExecErrorKind::UnclosedFunctionDefinition { line })
}

#[cold]
pub fn invalid_function_declaration(header: &str) -> ExecError {
    ExecError::from_kind(ExecErrorKind::InvalidFunctionDeclaration {
        header: header.to_string(),
    })
}

#[cold]
pub fn invalid_function_body(name: &str) -> ExecError {
    ExecError::from_kind(ExecErrorKind::InvalidFunctionBody {
        name: name.to_string(),
    })
}

#[cold]
pub fn invalid_assignment_target(target: &str) -> ExecError {
    ExecError::from_kind(ExecErrorKind::InvalidAssignmentTarget {
        target: target.to_string(),
    })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> ExecError {
    ExecError::from_kind(ExecErrorKind::CallDepthExceeded { limit })
}
