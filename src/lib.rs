use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

pub mod cli;
pub mod commands;
pub mod error;

pub type Result<T> = anyhow::Result<T>;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Entry point used by the binary crate and integration tests.
///
/// Stdout carries only command output; diagnostics go to stderr.
pub fn run() -> Result<()> {
    init_tracing();

    let args = cli::Args::parse();
    let stdout = io::stdout();
    commands::execute(&args, &mut stdout.lock()).context("failed to write greeting")?;
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed when `run` is called more than once.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}
