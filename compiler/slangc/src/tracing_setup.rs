//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber when `SLANG_LOG` or `RUST_LOG`
/// is set. Safe to call more than once.
///
/// stdout is reserved for program output, so logs never go there.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Some(directives) = std::env::var("SLANG_LOG")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
        else {
            return;
        };

        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            eprintln!("warning: ignoring invalid log filter {directives:?}: {err}");
            EnvFilter::new("warn")
        });
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .init();
    });
}
