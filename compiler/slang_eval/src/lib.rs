//! Slang Eval - execution engine for the slang scripting language.
//!
//! Slang is line oriented: each line is an assignment (`x = 1 + 2;`), a
//! print (`print x;`), a zero-argument call (`f();`), or part of a function
//! definition (`func f() { ... }`). Function bodies are stored as text and
//! re-executed on every call.
//!
//! # Architecture
//!
//! - `Blocks`: splits source into statements and function definitions by
//!   brace counting
//! - `Statement`: classifies one statement line
//! - `Interpreter`: owns the `Namespace` (variables and function bodies)
//!   and dispatches each statement, evaluating expressions with
//!   `slang_expr::evaluate`
//! - `PrintHandlerImpl`: output sink for `print`
//!
//! ```text
//! let out = buffer_handler();
//! let interp = Interpreter::new();
//! interp.execute("func add() { result = 3 + 2; }\nadd();\nprint result;", &out)?;
//! assert_eq!(out.get_output(), "5\n");
//! ```

mod diagnostics;
pub mod errors;
mod extractor;
mod interpreter;
mod namespace;
mod print_handler;
mod statement;
pub mod syntax;

pub use diagnostics::CallStack;
pub use errors::{Backtrace, ExecError, ExecErrorKind};
pub use extractor::{Block, Blocks, FunctionDef};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use namespace::{FunctionTable, Namespace, VariableStore};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use statement::Statement;

pub use slang_expr::{evaluate, ExprError, ExprErrorKind};
