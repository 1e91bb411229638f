//! Sealenv - bulk-provision .env secrets into GitHub Actions.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sealenv::cli::output;
use sealenv::cli::{execute, Cli};
use sealenv::core::constants;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sealenv=debug")
        } else {
            EnvFilter::new("sealenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
