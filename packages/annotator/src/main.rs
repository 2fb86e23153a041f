//! CLI entry point for the annotator.

use clap::Parser;
use structura_annotator::cli::{self, Cli};
use structura_annotator::config::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with WARN level by default, respecting RUST_LOG
    let fallback = if cli.verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
