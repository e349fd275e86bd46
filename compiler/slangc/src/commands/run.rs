//! The `run` and `eval` commands.

use super::build_interpreter;
use crate::options::Options;

/// Execute a source file. Exits with status 1 on read or execution failure.
pub fn run_file(path: &str, options: &Options) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            std::process::exit(1);
        }
    };
    tracing::debug!(path, bytes = source.len(), "loaded source file");
    run_source(&source, options);
}

/// Execute `source` on a fresh interpreter. Exits with status 1 on failure.
pub fn run_source(source: &str, options: &Options) {
    let interpreter = build_interpreter(options);
    if let Err(err) = interpreter.run(source) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
