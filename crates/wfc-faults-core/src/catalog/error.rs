//! Integrity errors raised while building a catalog

/// A record or a set of records violates the catalog invariants.
///
/// Raised at construction time only; a catalog that exists is valid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIntegrityError {
    #[error("Fault category code must be strictly positive")]
    ZeroCode,
    #[error("Fault category {code}: `{field}` must not be empty")]
    EmptyField { code: u16, field: &'static str },
    #[error("Fault category {code}: test case label `{label}` is not an identifier")]
    InvalidLabel { code: u16, label: String },
    #[error("Duplicate fault category code {0}")]
    DuplicateCode(u16),
    #[error("Test case label `{label}` is used by both {first} and {second}")]
    DuplicateLabel {
        label: String,
        first: u16,
        second: u16,
    },
    #[error("Custom fault category {0} must use a 9xx code")]
    NotCustomCode(u16),
}
