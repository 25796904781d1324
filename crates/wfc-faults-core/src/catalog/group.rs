//! Code ranges that group fault categories
//!
//! The hundreds digit of a code tells which family a category belongs to.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Family of a fault category, derived from its code
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FaultCategoryGroup {
    /// 1xx: generic faults (crashes, schema mismatches, broken CRUD semantics)
    Base,
    /// 2xx: security faults
    Security,
    /// 3xx-8xx: kept for future groups (e.g. GraphQL, RPC)
    Reserved,
    /// 9xx: user-defined categories
    Custom,
    /// Outside 100-999
    Unassigned,
}

impl FaultCategoryGroup {
    /// All groups in code order
    pub const ALL: [Self; 5] = [
        Self::Base,
        Self::Security,
        Self::Reserved,
        Self::Custom,
        Self::Unassigned,
    ];

    /// Classify a code
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            100..=199 => Self::Base,
            200..=299 => Self::Security,
            300..=899 => Self::Reserved,
            900..=999 => Self::Custom,
            _ => Self::Unassigned,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Security => "security",
            Self::Reserved => "reserved",
            Self::Custom => "custom",
            Self::Unassigned => "unassigned",
        }
    }

    /// Human-readable title, used as a section header
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Base => "Base faults (1xx)",
            Self::Security => "Security faults (2xx)",
            Self::Reserved => "Reserved (3xx-8xx)",
            Self::Custom => "Custom faults (9xx)",
            Self::Unassigned => "Unassigned",
        }
    }
}

impl std::fmt::Display for FaultCategoryGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
