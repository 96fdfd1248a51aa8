//! # Check command
//!
//! The single operation of the `yamlgate` binary: load a JSON schema, load
//! a YAML document, judge the document against the schema, and report the
//! outcome as one message line plus a contract exit code.
//!
//! ## Reporting contract
//!
//! The success line goes to stdout and every failure line to stderr;
//! `--quiet` suppresses both without touching the exit code. Exactly one
//! line is emitted per run.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use yamlgate_schema::{check, load_document, load_schema, CheckError, ExitStatus};

/// Command-line arguments for the check.
#[derive(Parser, Debug)]
#[command(
    name = "yamlgate",
    version,
    about = "Validate a YAML document against a JSON schema."
)]
pub struct CheckArgs {
    /// Path to the YAML document to validate.
    #[arg(short = 'd', long, visible_alias = "yaml-document")]
    pub document: PathBuf,

    /// Path to the JSON schema used for validation.
    #[arg(short = 's', long, visible_alias = "json-schema")]
    pub schema: PathBuf,

    /// Do not display any error or success message.
    #[arg(short = 'q', long, visible_alias = "quiet-mode")]
    pub quiet: bool,
}

/// Execute the check and report its outcome.
///
/// Every classified outcome is consumed here: the message line is written
/// to its stream (unless `--quiet`) and the matching [`ExitStatus`] is
/// returned. The `Err` branch is reserved for failures outside the
/// taxonomy, such as a report line that cannot be written; the caller maps
/// those to the unexpected-error exit code.
pub fn run_check(args: &CheckArgs) -> Result<ExitStatus> {
    match check_documents(args) {
        Ok(()) => {
            tracing::debug!("document conforms to schema");
            if !args.quiet {
                writeln!(io::stdout(), "YAML document is valid against JSON schema.")
                    .context("failed to write the success report to stdout")?;
            }
            Ok(ExitStatus::ValidDocument)
        }
        Err(err) => {
            let status = err.exit_status();
            tracing::debug!(code = status.code(), "check failed");
            if !args.quiet {
                writeln!(io::stderr(), "{err}")
                    .context("failed to write the failure report to stderr")?;
            }
            Ok(status)
        }
    }
}

/// Run the pipeline stages in their fixed order: schema, document, check.
fn check_documents(args: &CheckArgs) -> Result<(), CheckError> {
    let schema = load_schema(&args.schema)?;
    tracing::debug!(path = %args.schema.display(), "schema loaded");
    let document = load_document(&args.document)?;
    tracing::debug!(path = %args.document.display(), "document loaded");
    check(&document, &schema)
}
