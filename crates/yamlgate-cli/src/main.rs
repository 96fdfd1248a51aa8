//! # yamlgate entry point
//!
//! Parses command-line arguments, runs the check, and converts the outcome
//! into the process exit code. Malformed invocations are clap's to handle
//! (usage text, exit code 2) before any of this runs.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yamlgate_cli::check::{run_check, CheckArgs};
use yamlgate_schema::ExitStatus;

fn main() -> ExitCode {
    let args = CheckArgs::parse();

    // Diagnostics are opt-in via RUST_LOG and go to stderr, so the default
    // stdout/stderr contract holds byte for byte.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run_check(&args) {
        Ok(status) => status.into(),
        Err(err) => {
            // Outside the classified taxonomy; reported even under --quiet.
            eprintln!("Unexpected error: {err:#}");
            ExitStatus::UnexpectedError.into()
        }
    }
}
