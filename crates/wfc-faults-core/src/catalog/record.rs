//! A single fault category

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CatalogIntegrityError, FaultCategoryGroup};

/// One named, numbered class of defect an API testing tool can detect.
///
/// Field names on the wire are `code`, `name`, `testCaseLabel` and
/// `fullDescription`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaultCategoryRecord {
    /// Unique, strictly positive identifier
    pub code: u16,
    /// Short human-readable title
    pub name: String,
    /// Identifier token used in generated test names
    #[serde(alias = "test_case_label")]
    pub test_case_label: String,
    /// Full explanation of the fault, how it is detected, and its false positives
    #[serde(rename = "fullDescription", alias = "description")]
    pub description: String,
}

impl FaultCategoryRecord {
    /// Build a validated record.
    ///
    /// # Errors
    ///
    /// Returns error if the code is zero, a text field is blank, or the
    /// label is not an identifier token.
    pub fn new(
        code: u16,
        name: impl Into<String>,
        test_case_label: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, CatalogIntegrityError> {
        let record = Self {
            code,
            name: name.into(),
            test_case_label: test_case_label.into(),
            description: description.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the per-record invariants.
    ///
    /// Fields are public, so catalogs call this again on every record they
    /// are built from.
    pub fn validate(&self) -> Result<(), CatalogIntegrityError> {
        if self.code == 0 {
            return Err(CatalogIntegrityError::ZeroCode);
        }
        for (field, value) in [
            ("name", &self.name),
            ("testCaseLabel", &self.test_case_label),
            ("fullDescription", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogIntegrityError::EmptyField {
                    code: self.code,
                    field,
                });
            }
        }
        if !is_identifier(&self.test_case_label) {
            return Err(CatalogIntegrityError::InvalidLabel {
                code: self.code,
                label: self.test_case_label.clone(),
            });
        }
        Ok(())
    }

    /// Group derived from the code range
    #[must_use]
    pub const fn group(&self) -> FaultCategoryGroup {
        FaultCategoryGroup::from_code(self.code)
    }
}

impl std::fmt::Display for FaultCategoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(label: &str) -> bool {
    let mut chars = label.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
