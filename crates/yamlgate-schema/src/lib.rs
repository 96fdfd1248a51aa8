//! # yamlgate-schema: YAML-against-JSON-Schema validation core
//!
//! This crate loads a JSON Schema and a YAML document from disk and checks
//! the document's conformance, reporting every failure through a closed
//! error taxonomy whose variants map one-to-one onto the process exit
//! codes of the `yamlgate` binary.
//!
//! ## Responsibilities
//!
//! - **Loading:** read the schema (JSON) and the document (YAML) into
//!   plain `serde_json::Value` trees ([`load_schema`], [`load_document`]).
//! - **Checking:** judge the document against the schema, separating
//!   document violations from schemas that are themselves invalid
//!   ([`check`]).
//! - **Classification:** expose every failure as one of the four
//!   [`CheckError`] variants, each with a fixed [`ExitStatus`].
//!
//! ## Design
//!
//! [`check_files`] runs the stages in their fixed order: schema first,
//! then document, then validation. Nothing downstream of a failure runs,
//! so when both files are unusable the schema error is the one reported.

use std::path::Path;

pub mod error;
pub mod load;
pub mod validate;

// Re-export primary types.
pub use error::{CheckError, ExitStatus, ValidationDetail};
pub use load::{load_document, load_schema};
pub use validate::check;

/// Runs the full pipeline over a document file and a schema file.
///
/// Stage order is part of the contract: the schema is loaded first, then
/// the document, then the document is checked against the schema. When
/// both files are unusable, the schema load failure is the one returned.
pub fn check_files(document: &Path, schema: &Path) -> Result<(), CheckError> {
    let schema_value = load_schema(schema)?;
    let document_value = load_document(document)?;
    check(&document_value, &schema_value)
}
