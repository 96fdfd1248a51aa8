//! Error taxonomy and the process exit-code contract.
//!
//! Every failure the check can produce is one of the four [`CheckError`]
//! variants, and every variant maps to exactly one exit code through
//! [`ExitStatus`]. Scripts branch on these codes, so the numeric values are
//! a frozen interface.

use std::fmt;
use std::process::ExitCode;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

/// Final outcome of a run, each tied to a fixed process exit code.
///
/// | Code | Outcome |
/// |------|---------|
/// | 0    | document valid against schema |
/// | 1    | unexpected, unclassified error |
/// | 10   | document fails validation |
/// | 11   | schema itself is invalid |
/// | 20   | document file could not be loaded |
/// | 21   | schema file could not be loaded |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The document conforms to the schema.
    ValidDocument,
    /// A failure outside the classified taxonomy.
    UnexpectedError,
    /// The document does not conform to the schema.
    InvalidDocument,
    /// The schema violates the JSON Schema meta-schema.
    InvalidSchema,
    /// The document file could not be read or parsed as YAML.
    DocumentLoadError,
    /// The schema file could not be read or parsed as JSON.
    SchemaLoadError,
}

impl ExitStatus {
    /// The numeric exit code for this outcome.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::ValidDocument => 0,
            ExitStatus::UnexpectedError => 1,
            ExitStatus::InvalidDocument => 10,
            ExitStatus::InvalidSchema => 11,
            ExitStatus::DocumentLoadError => 20,
            ExitStatus::SchemaLoadError => 21,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

// ---------------------------------------------------------------------------
// Violation detail
// ---------------------------------------------------------------------------

/// Structured description of a single schema violation.
///
/// For document violations the instance path points into the document; for
/// schema violations it points into the schema, which is itself the
/// instance being judged against the meta-schema.
#[derive(Debug, Clone)]
pub struct ValidationDetail {
    /// JSON Pointer to the offending value (empty for root-level violations).
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that was violated.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for ValidationDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (at {})", self.message, self.instance_path)
        }
    }
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Errors produced by the check pipeline.
///
/// The enum is closed on purpose: [`CheckError::exit_status`] matches it
/// exhaustively, so a new failure kind cannot be added without also
/// extending the exit-code contract.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The schema file could not be read, or its contents are not JSON.
    ///
    /// File-access problems and JSON syntax errors collapse into this one
    /// kind: callers only learn that the schema never made it into memory,
    /// which is all the exit code distinguishes.
    #[error("Error loading JSON schema: {path}: {reason}")]
    SchemaLoad {
        /// Path to the schema file as given on the command line.
        path: String,
        /// The underlying error's message.
        reason: String,
    },

    /// The document file could not be read, or its contents are not YAML
    /// representable as plain JSON-compatible data.
    #[error("Error loading YAML document: {path}: {reason}")]
    DocumentLoad {
        /// Path to the document file as given on the command line.
        path: String,
        /// The underlying error's message.
        reason: String,
    },

    /// The schema parsed as JSON but does not compile against the
    /// JSON Schema meta-schema.
    #[error("Error in JSON schema: {detail}")]
    SchemaInvalid {
        /// The violation reported by the validation engine.
        detail: ValidationDetail,
    },

    /// The document does not conform to the schema.
    #[error("Error in YAML document: {detail}")]
    DocumentInvalid {
        /// The first violation reported by the validation engine.
        detail: ValidationDetail,
    },
}

impl CheckError {
    /// The exit status this error maps to.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            CheckError::SchemaLoad { .. } => ExitStatus::SchemaLoadError,
            CheckError::DocumentLoad { .. } => ExitStatus::DocumentLoadError,
            CheckError::SchemaInvalid { .. } => ExitStatus::InvalidSchema,
            CheckError::DocumentInvalid { .. } => ExitStatus::InvalidDocument,
        }
    }
}
