//! Catalog module - fault category records, code groups, and the built-in table

mod defined;
mod error;
mod group;
mod record;

use std::collections::BTreeMap;

use tracing::debug;

pub use defined::codes;
pub use error::CatalogIntegrityError;
pub use group::FaultCategoryGroup;
pub use record::FaultCategoryRecord;

/// Immutable set of fault categories, unique by code and by test case label.
///
/// Built once and passed by reference to whatever reads it. There are no
/// mutating operations; extending a catalog consumes it and validates the
/// result as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultCategoryCatalog {
    records: Vec<FaultCategoryRecord>,
    by_code: BTreeMap<u16, usize>,
    by_label: BTreeMap<String, usize>,
}

impl FaultCategoryCatalog {
    /// Build a catalog from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first integrity violation: an invalid record, a repeated
    /// code, or a repeated test case label.
    pub fn new(records: Vec<FaultCategoryRecord>) -> Result<Self, CatalogIntegrityError> {
        let mut by_code = BTreeMap::new();
        let mut by_label = BTreeMap::new();

        for (idx, record) in records.iter().enumerate() {
            record.validate()?;
            if by_code.insert(record.code, idx).is_some() {
                return Err(CatalogIntegrityError::DuplicateCode(record.code));
            }
            if let Some(first) = by_label.insert(record.test_case_label.clone(), idx) {
                return Err(CatalogIntegrityError::DuplicateLabel {
                    label: record.test_case_label.clone(),
                    first: records[first].code,
                    second: record.code,
                });
            }
        }

        debug!(categories = records.len(), "fault category catalog built");
        Ok(Self {
            records,
            by_code,
            by_label,
        })
    }

    /// The built-in catalog.
    ///
    /// # Errors
    ///
    /// Only if the compiled-in table is broken, which the unit tests rule out.
    pub fn defined() -> Result<Self, CatalogIntegrityError> {
        Self::new(defined::defined_records()?)
    }

    /// Append user-defined categories. Every one of them must use a 9xx code.
    ///
    /// # Errors
    ///
    /// Returns error if a custom code is outside 900-999 or the combined set
    /// breaks an invariant.
    pub fn with_custom(
        self,
        custom: impl IntoIterator<Item = FaultCategoryRecord>,
    ) -> Result<Self, CatalogIntegrityError> {
        let mut records = self.records;
        for record in custom {
            if record.group() != FaultCategoryGroup::Custom {
                return Err(CatalogIntegrityError::NotCustomCode(record.code));
            }
            records.push(record);
        }
        Self::new(records)
    }

    /// Every record, in declaration order
    #[must_use]
    pub fn all_categories(&self) -> &[FaultCategoryRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaultCategoryRecord> {
        self.records.iter()
    }

    /// Every record, ascending by code
    #[must_use]
    pub fn sorted_by_code(&self) -> Vec<&FaultCategoryRecord> {
        self.by_code.values().map(|&idx| &self.records[idx]).collect()
    }

    #[must_use]
    pub fn lookup_by_code(&self, code: u16) -> Option<&FaultCategoryRecord> {
        self.by_code.get(&code).map(|&idx| &self.records[idx])
    }

    #[must_use]
    pub fn lookup_by_label(&self, label: &str) -> Option<&FaultCategoryRecord> {
        self.by_label.get(label).map(|&idx| &self.records[idx])
    }

    /// Records of one group, ascending by code
    pub fn in_group(
        &self,
        group: FaultCategoryGroup,
    ) -> impl Iterator<Item = &FaultCategoryRecord> + '_ {
        self.sorted_by_code()
            .into_iter()
            .filter(move |r| r.group() == group)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a FaultCategoryCatalog {
    type Item = &'a FaultCategoryRecord;
    type IntoIter = std::slice::Iter<'a, FaultCategoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
