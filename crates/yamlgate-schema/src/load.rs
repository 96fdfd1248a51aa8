//! Schema and document loading.
//!
//! Both loaders collapse every failure (missing file, unreadable file,
//! syntax error, unconvertible content) into the single load-error kind for
//! their input. The distinction callers can act on is which file failed,
//! not how, and the exit-code contract only encodes that much.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::CheckError;

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Reads and parses a JSON Schema file.
///
/// Any failure, file access or JSON syntax alike, becomes
/// [`CheckError::SchemaLoad`].
pub fn load_schema(path: &Path) -> Result<Value, CheckError> {
    let schema_load = |reason: String| CheckError::SchemaLoad {
        path: path.display().to_string(),
        reason,
    };
    let text = fs::read_to_string(path).map_err(|err| schema_load(err.to_string()))?;
    serde_json::from_str(&text).map_err(|err| schema_load(err.to_string()))
}

/// Reads and parses a YAML document file into JSON-compatible data.
///
/// Parsing is safe by construction: `serde_yaml` only ever produces plain
/// scalars, sequences and mappings, never arbitrary types. Merge keys
/// (`<<`) are resolved before conversion, tags are stripped to their inner
/// value, and boolean or numeric mapping keys are stringified. Content that
/// has no JSON representation (non-scalar mapping keys, NaN, infinities)
/// is a load failure like any other: everything becomes
/// [`CheckError::DocumentLoad`].
pub fn load_document(path: &Path) -> Result<Value, CheckError> {
    let document_load = |reason: String| CheckError::DocumentLoad {
        path: path.display().to_string(),
        reason,
    };
    let text = fs::read_to_string(path).map_err(|err| document_load(err.to_string()))?;
    let mut yaml: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|err| document_load(err.to_string()))?;
    yaml.apply_merge()
        .map_err(|err| document_load(err.to_string()))?;
    yaml_to_json(yaml).map_err(document_load)
}

// ---------------------------------------------------------------------------
// YAML to JSON conversion
// ---------------------------------------------------------------------------

fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, String> {
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_yaml::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else {
                // Finite floats only; .nan and .inf have no JSON form.
                let f = n.as_f64().unwrap_or(f64::NAN);
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("number {f} has no JSON representation"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s)),
        serde_yaml::Value::Sequence(seq) => seq
            .into_iter()
            .map(yaml_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                object.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn mapping_key(key: serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(format!(
            "cannot represent a {} mapping key as a JSON object key",
            key_kind(&other)
        )),
    }
}

fn key_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_schema_reads_valid_json() {
        let tmp = tempfile::tempdir().unwrap();
        let schema_path = tmp.path().join("schema.json");
        std::fs::write(&schema_path, r#"{"type": "object"}"#).unwrap();

        let schema = load_schema(&schema_path).unwrap();
        assert_eq!(schema, json!({"type": "object"}));
    }

    #[test]
    fn load_schema_collapses_missing_file_and_bad_json_into_one_kind() {
        let tmp = tempfile::tempdir().unwrap();

        let missing = load_schema(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(missing, CheckError::SchemaLoad { .. }));

        let bad_path = tmp.path().join("schema.json");
        std::fs::write(&bad_path, "not json").unwrap();
        let malformed = load_schema(&bad_path).unwrap_err();
        assert!(matches!(malformed, CheckError::SchemaLoad { .. }));
    }

    #[test]
    fn load_schema_error_names_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let schema_path = tmp.path().join("schema.json");
        std::fs::write(&schema_path, "{").unwrap();

        let err = load_schema(&schema_path).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Error loading JSON schema: "));
        assert!(message.contains("schema.json"));
    }

    #[test]
    fn load_document_reads_plain_yaml() {
        let tmp = tempfile::tempdir().unwrap();
        let doc_path = tmp.path().join("doc.yaml");
        std::fs::write(&doc_path, "name: Alice\nports:\n  - 80\n  - 443\n").unwrap();

        let doc = load_document(&doc_path).unwrap();
        assert_eq!(doc, json!({"name": "Alice", "ports": [80, 443]}));
    }

    #[test]
    fn load_document_collapses_missing_file_and_bad_yaml_into_one_kind() {
        let tmp = tempfile::tempdir().unwrap();

        let missing = load_document(&tmp.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(missing, CheckError::DocumentLoad { .. }));

        let bad_path = tmp.path().join("doc.yaml");
        std::fs::write(&bad_path, "{{invalid yaml: [unbalanced").unwrap();
        let malformed = load_document(&bad_path).unwrap_err();
        assert!(matches!(malformed, CheckError::DocumentLoad { .. }));
        assert!(malformed
            .to_string()
            .starts_with("Error loading YAML document: "));
    }

    #[test]
    fn empty_document_loads_as_null() {
        let tmp = tempfile::tempdir().unwrap();
        let doc_path = tmp.path().join("empty.yaml");
        std::fs::write(&doc_path, "").unwrap();

        assert_eq!(load_document(&doc_path).unwrap(), Value::Null);
    }

    #[test]
    fn numeric_and_boolean_keys_are_stringified() {
        let tmp = tempfile::tempdir().unwrap();
        let doc_path = tmp.path().join("keys.yaml");
        std::fs::write(&doc_path, "1: one\n2.5: two and a half\ntrue: yes\n").unwrap();

        let doc = load_document(&doc_path).unwrap();
        assert_eq!(
            doc,
            json!({"1": "one", "2.5": "two and a half", "true": "yes"})
        );
    }

    #[test]
    fn sequence_keys_are_a_load_error() {
        let tmp = tempfile::tempdir().unwrap();
        let doc_path = tmp.path().join("seqkey.yaml");
        std::fs::write(&doc_path, "[a, b]: value\n").unwrap();

        let err = load_document(&doc_path).unwrap_err();
        assert!(matches!(err, CheckError::DocumentLoad { .. }));
        assert!(err.to_string().contains("sequence mapping key"));
    }

    #[test]
    fn non_finite_floats_are_a_load_error() {
        let tmp = tempfile::tempdir().unwrap();
        let doc_path = tmp.path().join("nan.yaml");
        std::fs::write(&doc_path, "value: .nan\n").unwrap();

        let err = load_document(&doc_path).unwrap_err();
        assert!(matches!(err, CheckError::DocumentLoad { .. }));
        assert!(err.to_string().contains("no JSON representation"));
    }

    #[test]
    fn tags_are_stripped_to_their_inner_value() {
        let tmp = tempfile::tempdir().unwrap();
        let doc_path = tmp.path().join("tagged.yaml");
        std::fs::write(&doc_path, "port: !Custom 8080\n").unwrap();

        let doc = load_document(&doc_path).unwrap();
        assert_eq!(doc, json!({"port": 8080}));
    }

    #[test]
    fn merge_keys_are_resolved() {
        let tmp = tempfile::tempdir().unwrap();
        let doc_path = tmp.path().join("merge.yaml");
        std::fs::write(
            &doc_path,
            "base: &base\n  retries: 3\nservice:\n  <<: *base\n  name: api\n",
        )
        .unwrap();

        let doc = load_document(&doc_path).unwrap();
        assert_eq!(
            doc,
            json!({
                "base": {"retries": 3},
                "service": {"retries": 3, "name": "api"}
            })
        );
    }

    #[test]
    fn large_unsigned_integers_survive_conversion() {
        let tmp = tempfile::tempdir().unwrap();
        let doc_path = tmp.path().join("big.yaml");
        std::fs::write(&doc_path, "big: 18446744073709551615\nsmall: -3\n").unwrap();

        let doc = load_document(&doc_path).unwrap();
        assert_eq!(doc, json!({"big": 18446744073709551615u64, "small": -3}));
    }
}
