//! Slang CLI
//!
//! `slang run <file>`, `slang eval <source>`, `slang repl`.

mod commands;
mod options;
mod tracing_setup;

use options::{parse_options, OptionsError};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let options = match parse_options(&args[2..]) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, OptionsError::UnknownFlag(_)) {
                eprintln!();
                print_usage();
            }
            std::process::exit(2);
        }
    };

    match command {
        "run" => {
            let Some(path) = options.positional.first() else {
                eprintln!("Usage: slang run <file> [--max-depth=<n>] [--var=<name>=<int>]...");
                std::process::exit(2);
            };
            commands::run_file(path, &options);
        }
        "eval" => {
            let Some(source) = options.positional.first() else {
                eprintln!("Usage: slang eval <source> [--max-depth=<n>] [--var=<name>=<int>]...");
                std::process::exit(2);
            };
            commands::run_source(&source.replace("\\n", "\n"), &options);
        }
        "repl" => commands::run_repl(&options),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("slang {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("Slang - a line-oriented toy scripting language");
    println!();
    println!("Usage: slang <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>       Execute a source file");
    println!("  eval <source>    Execute source given on the command line (\\n separates lines)");
    println!("  repl             Interactive session; state persists between inputs");
    println!("  help             Show this message");
    println!("  version          Show the version");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>        Fail when function calls nest deeper than n");
    println!("  --var=<name>=<int>     Seed a variable before execution (repeatable)");
    println!();
    println!("Logging goes to stderr, filtered by SLANG_LOG (or RUST_LOG), e.g. SLANG_LOG=slang_eval=debug");
}
