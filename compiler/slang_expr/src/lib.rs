//! Slang Expr - arithmetic expression evaluation for the slang interpreter.
//!
//! An expression is scanned and evaluated in one left-to-right pass with
//! two stacks: operands (`i64`) and pending operators. Identifiers are
//! resolved against a read-only [`Bindings`] snapshot as soon as they are
//! scanned, so evaluation never mutates the caller's state.
//!
//! ```text
//! let vars: FxHashMap<String, i64> = [("x".to_string(), 4)].into_iter().collect();
//! assert_eq!(evaluate("(x + 2) * 3", &vars)?, 18);
//! ```

mod bindings;
pub mod errors;
mod evaluator;
mod token;

pub use bindings::Bindings;
pub use errors::{ExprError, ExprErrorKind, ExprResult};
pub use evaluator::evaluate;
pub use token::{BinaryOp, Token, Tokens};
