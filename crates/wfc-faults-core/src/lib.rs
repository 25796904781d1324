//! wfc-faults-core: Catalog of fault categories for automated API testing
//!
//! This crate holds the authoritative list of fault categories (numbered,
//! named classes of defects such as HTTP 500 responses or SQL injection),
//! its canonical JSON export, and the check that keeps the checked-in
//! export in sync with the code.

pub mod catalog;
pub mod config;
pub mod export;
pub mod schema;

pub use catalog::{
    CatalogIntegrityError, FaultCategoryCatalog, FaultCategoryGroup, FaultCategoryRecord, codes,
};
pub use config::{Config, ConfigError};
pub use export::{
    Consistency, DEFAULT_ARTIFACT_PATH, Drift, ExportError, FaultCategoryDocument, Regenerated,
};
