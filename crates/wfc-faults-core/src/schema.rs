//! JSON Schema of the exported artifact
//!
//! Lets consumers outside Rust validate `fault_categories.json` without
//! reading this crate.

use crate::export::{ExportError, FaultCategoryDocument};

/// Generate the JSON Schema for [`FaultCategoryDocument`].
///
/// # Errors
///
/// Returns error if the schema cannot be rendered as JSON.
pub fn generate_schema() -> Result<String, ExportError> {
    let schema = schemars::schema_for!(FaultCategoryDocument);
    serde_json::to_string_pretty(&schema).map_err(|e| ExportError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_generation_produces_valid_json() {
        let schema = generate_schema().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&schema).unwrap();
        assert!(parsed.get("$schema").is_some());
        assert_eq!(parsed.get("type").and_then(|v| v.as_str()), Some("array"));
    }

    #[test]
    fn schema_uses_wire_field_names() {
        let schema = generate_schema().unwrap();
        for field in ["\"code\"", "\"name\"", "\"testCaseLabel\"", "\"fullDescription\""] {
            assert!(schema.contains(field), "missing {field}");
        }
        assert!(!schema.contains("\"test_case_label\""));
    }
}
