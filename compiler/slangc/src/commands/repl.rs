//! The interactive `repl` command.
//!
//! Lines are buffered while a function definition is open, using the same
//! brace counting as the block extractor, then the complete chunk is
//! executed against one long-lived interpreter.

use std::io::{self, BufRead, Write};

use slang_eval::syntax::brace_delta;
use slang_eval::Interpreter;

use super::build_interpreter;
use crate::options::Options;

const PROMPT: &str = "slang> ";
const CONTINUATION_PROMPT: &str = "  ...> ";

/// Accumulates input until it forms a chunk with balanced braces.
#[derive(Debug, Default)]
struct ReplBuffer {
    pending: String,
    depth: i64,
}

impl ReplBuffer {
    /// Add a line. Returns the buffered chunk once the brace depth is back
    /// to zero or below.
    fn push_line(&mut self, line: &str) -> Option<String> {
        self.pending.push_str(line);
        self.pending.push('\n');
        self.depth += brace_delta(line);
        if self.depth > 0 {
            return None;
        }
        self.depth = 0;
        Some(std::mem::take(&mut self.pending))
    }

    fn is_continuing(&self) -> bool {
        self.depth > 0
    }

    /// Whatever is left at end of input.
    fn finish(&mut self) -> Option<String> {
        self.depth = 0;
        let rest = std::mem::take(&mut self.pending);
        (!rest.trim().is_empty()).then_some(rest)
    }
}

/// REPL meta-commands, prefixed with `:`.
#[derive(Debug, PartialEq, Eq)]
enum Meta {
    Vars,
    Funcs,
    Quit,
    Help,
    Unknown,
}

fn parse_meta(line: &str) -> Option<Meta> {
    let command = line.trim().strip_prefix(':')?;
    Some(match command {
        "vars" => Meta::Vars,
        "funcs" => Meta::Funcs,
        "quit" | "q" => Meta::Quit,
        "help" => Meta::Help,
        _ => Meta::Unknown,
    })
}

/// Run the REPL on stdin until EOF or `:quit`.
pub fn run_repl(options: &Options) {
    let interpreter = build_interpreter(options);
    let stdin = io::stdin();
    let mut buffer = ReplBuffer::default();

    println!("slang {} - :help for commands", env!("CARGO_PKG_VERSION"));
    loop {
        prompt(if buffer.is_continuing() {
            CONTINUATION_PROMPT
        } else {
            PROMPT
        });

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: cannot read input: {err}");
                break;
            }
        }

        if !buffer.is_continuing() {
            if let Some(meta) = parse_meta(&line) {
                if meta == Meta::Quit {
                    return;
                }
                show_meta(&interpreter, &meta);
                continue;
            }
        }

        if let Some(chunk) = buffer.push_line(line.trim_end_matches(['\n', '\r'])) {
            execute_chunk(&interpreter, &chunk);
        }
    }

    if let Some(chunk) = buffer.finish() {
        execute_chunk(&interpreter, &chunk);
    }
    println!();
}

fn prompt(text: &str) {
    print!("{text}");
    // A failed flush only delays the prompt.
    let _ = io::stdout().flush();
}

/// Fatal errors are reported and the session continues with the state
/// left by the statements that did run.
fn execute_chunk(interpreter: &Interpreter, chunk: &str) {
    if let Err(err) = interpreter.run(chunk) {
        eprintln!("error: {err}");
    }
}

fn show_meta(interpreter: &Interpreter, meta: &Meta) {
    match meta {
        Meta::Vars => {
            for (name, value) in interpreter.variables() {
                println!("{name} = {value}");
            }
        }
        Meta::Funcs => {
            for name in interpreter.function_names() {
                println!("{name}()");
            }
        }
        Meta::Help => {
            println!(":vars    list variables");
            println!(":funcs   list defined functions");
            println!(":quit    leave the REPL");
        }
        Meta::Unknown => println!("unknown command, try :help"),
        Meta::Quit => {}
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
