//! # yamlgate-cli: the `yamlgate` command
//!
//! Provides the command-line surface over [`yamlgate_schema`]: argument
//! parsing, outcome reporting, and the binary's exit-code contract.
//!
//! ## Exit codes
//!
//! The exit code is the machine-readable result and is kept stable:
//!
//! - `0`: document valid against schema
//! - `1`: unexpected, unclassified error
//! - `10`: document fails validation
//! - `11`: schema itself is invalid
//! - `20`: document file could not be loaded
//! - `21`: schema file could not be loaded
//!
//! (`2` is clap's own usage-error convention for malformed invocations.)
//!
//! ## Usage
//!
//! ```bash
//! yamlgate --document config.yaml --schema config.schema.json
//! yamlgate -d config.yaml -s config.schema.json --quiet
//! ```

pub mod check;
