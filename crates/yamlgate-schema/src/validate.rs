//! Conformance checking of a document value against a schema value.
//!
//! The check distinguishes its two failure classes by which engine call
//! fails, never by inspecting error contents. Building the validator
//! judges the schema against its meta-schema; running it judges the
//! document. A schema that does not compile yields the schema-error class
//! regardless of what the document contains, because compilation comes
//! first.

use serde_json::Value;

use crate::error::{CheckError, ValidationDetail};

/// Checks `document` against `schema`.
///
/// The schema's own `$schema` declaration selects the draft; without one,
/// the engine's default dialect applies. Returns `Ok(())` for a conforming
/// document, [`CheckError::SchemaInvalid`] when the schema itself fails to
/// compile, or [`CheckError::DocumentInvalid`] carrying the first reported
/// violation.
pub fn check(document: &Value, schema: &Value) -> Result<(), CheckError> {
    let validator = jsonschema::validator_for(schema).map_err(|err| CheckError::SchemaInvalid {
        detail: violation_detail(&err),
    })?;

    validator
        .validate(document)
        .map_err(|err| CheckError::DocumentInvalid {
            detail: violation_detail(&err),
        })
}

fn violation_detail(error: &jsonschema::ValidationError<'_>) -> ValidationDetail {
    ValidationDetail {
        instance_path: error.instance_path.to_string(),
        schema_path: error.schema_path.to_string(),
        message: error.to_string(),
    }
}
