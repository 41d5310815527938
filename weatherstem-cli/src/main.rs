//! Binary crate for the `weatherstem` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Driving the fetch, normalize and render pipeline
//! - Human-friendly output formatting
//!
//! Exit codes are part of the interface: 0 for success (including the
//! legend), 1 when the API call fails, 2 when its response will not decode,
//! 3 for configuration problems.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use weatherstem_core::ConfigError;

mod cli;
mod render;

#[tokio::main]
async fn main() {
    // RUST_LOG overrides; diagnostics go to stderr so data output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    if let Err(err) = cmd.run().await {
        eprintln!("Error: {err:#}");
        process::exit(exit_code(&err));
    }
}

/// Map a failure to the documented exit codes: 3 for config problems, 2 for
/// an API body that would not decode, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.is::<ConfigError>() {
            return 3;
        }
        if cause.is::<serde_json::Error>() {
            return 2;
        }
    }
    1
}
