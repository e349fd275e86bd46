//! Error types for expression evaluation.
//!
//! `ExprErrorKind` is the structured category; `ExprError` adds the byte
//! offset into the expression text where the failure was detected. Factory
//! functions below are the constructors used by the evaluator.

use std::fmt;

/// Result of evaluating an expression.
pub type ExprResult<T = i64> = Result<T, ExprError>;

/// Typed category of an expression failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExprErrorKind {
    /// A character outside the token set (digits, letters, `+-*/()`,
    /// whitespace and `;`).
    #[error("invalid character: {ch:?}")]
    InvalidCharacter { ch: char },

    /// An identifier with no binding.
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    /// Too few operands for an operator, or not exactly one value left at the end.
    #[error("invalid expression")]
    InvalidExpression,

    /// A `)` with no opener, or a `(` never closed.
    #[error("unmatched parenthesis")]
    UnmatchedParenthesis,

    /// Right-hand side of `/` evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A literal or an arithmetic result does not fit in `i64`.
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
}

/// Expression evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExprError {
    pub kind: ExprErrorKind,
    /// Byte offset into the expression text, when the failure has a location.
    pub offset: Option<usize>,
}

impl ExprError {
    pub fn new(kind: ExprErrorKind, offset: Option<usize>) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} at offset {offset}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ExprErrorKind> for ExprError {
    fn from(kind: ExprErrorKind) -> Self {
        Self::new(kind, None)
    }
}

#[cold]
pub fn invalid_character(ch: char, offset: usize) -> ExprError {
    ExprError::new(ExprErrorKind::InvalidCharacter { ch }, Some(offset))
}

#[cold]
pub fn undefined_variable(name: &str, offset: usize) -> ExprError {
    ExprError::new(
        ExprErrorKind::UndefinedVariable {
            name: name.to_string(),
        },
        Some(offset),
    )
}

#[cold]
pub fn invalid_expression(offset: Option<usize>) -> ExprError {
    ExprError::new(ExprErrorKind::InvalidExpression, offset)
}

#[cold]
pub fn unmatched_parenthesis(offset: usize) -> ExprError {
    ExprError::new(ExprErrorKind::UnmatchedParenthesis, Some(offset))
}

#[cold]
pub fn division_by_zero() -> ExprErrorKind {
    ExprErrorKind::DivisionByZero
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> ExprErrorKind {
    ExprErrorKind::IntegerOverflow { operation }
}
