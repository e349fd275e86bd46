//! Statement classification.
//!
//! A statement is one trimmed line outside a function definition. The first
//! matching form wins: anything containing `=` is an assignment, then
//! `print`, then a zero-argument call ending in `();`. Lines matching none
//! of these are ignored.

use crate::syntax::{strip_keyword, CALL_SUFFIX, PRINT_KEYWORD};

/// A classified statement, borrowing from the source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `target = expression`, split at the first `=`.
    Assign { target: &'a str, expression: &'a str },
    /// `print expression`
    Print { expression: &'a str },
    /// `name();`
    Call { name: &'a str },
    /// No recognised form.
    Unrecognized,
}

impl<'a> Statement<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if let Some((target, expression)) = line.split_once('=') {
            return Statement::Assign {
                target: target.trim(),
                expression: expression.trim(),
            };
        }
        if let Some(expression) = strip_keyword(line, PRINT_KEYWORD) {
            return Statement::Print {
                expression: expression.trim(),
            };
        }
        if line.ends_with(CALL_SUFFIX) {
            let name = line.split('(').next().unwrap_or(line).trim();
            return Statement::Call { name };
        }
        Statement::Unrecognized
    }
}
