//! CLI command implementations.

mod repl;
mod run;

pub use repl::run_repl;
pub use run::{run_file, run_source};

use slang_eval::{stdout_handler, Interpreter};

use crate::options::Options;

/// Interpreter configured from command-line options, printing to stdout.
fn build_interpreter(options: &Options) -> Interpreter {
    Interpreter::builder()
        .variables(options.variables.iter().cloned())
        .max_call_depth(options.max_call_depth)
        .print_handler(stdout_handler())
        .build()
}
