//! Canonical JSON export of the catalog and the consistency check
//!
//! The artifact is checked in so tools outside Rust can read the catalog.
//! It must always equal `serialize(&catalog)` byte for byte:
//!
//! ```text
//! [
//!   {
//!     "code": 100,
//!     "name": "HTTP Status 500",
//!     "testCaseLabel": "causes500_internalServerError",
//!     "fullDescription": "..."
//!   },
//!   ...
//! ]
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{FaultCategoryCatalog, FaultCategoryRecord};

/// Artifact location, relative to the workspace root
pub const DEFAULT_ARTIFACT_PATH: &str = "resources/wfc/faults/fault_categories.json";

/// The serialized catalog: records ascending by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FaultCategoryDocument(pub Vec<FaultCategoryRecord>);

impl FaultCategoryDocument {
    #[must_use]
    pub fn from_catalog(catalog: &FaultCategoryCatalog) -> Self {
        Self(catalog.sorted_by_code().into_iter().cloned().collect())
    }

    /// Parse an artifact. Formatting is not checked here, only structure.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not a JSON array of records.
    pub fn parse(json: &str) -> Result<Self, ExportError> {
        serde_json::from_str(json).map_err(|e| ExportError::Serialization(e.to_string()))
    }

    #[must_use]
    pub fn codes(&self) -> Vec<u16> {
        self.0.iter().map(|r| r.code).collect()
    }
}

/// Render the catalog as the canonical document.
///
/// Pure function of the catalog contents: declaration order does not
/// matter, and the output ends with exactly one newline.
///
/// # Errors
///
/// Returns error if serde fails, which well-formed records never trigger.
pub fn serialize(catalog: &FaultCategoryCatalog) -> Result<String, ExportError> {
    let document = FaultCategoryDocument::from_catalog(catalog);
    let mut json = serde_json::to_string_pretty(&document)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;
    json.push('\n');
    debug!(
        categories = document.0.len(),
        bytes = json.len(),
        "catalog serialized"
    );
    Ok(json)
}

/// Overwrite `path` with `json`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if the directory or file cannot be created or written.
pub fn write_to_file(json: &str, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| ExportError::Write(parent.to_path_buf(), e.to_string()))?;
    }

    let file = std::fs::File::create(path)
        .map_err(|e| ExportError::Write(path.to_path_buf(), e.to_string()))?;
    let mut writer = std::io::BufWriter::new(file);
    writer
        .write_all(json.as_bytes())
        .map_err(|e| ExportError::Write(path.to_path_buf(), e.to_string()))?;
    writer
        .flush()
        .map_err(|e| ExportError::Write(path.to_path_buf(), e.to_string()))?;

    info!(path = %path.display(), bytes = json.len(), "fault category artifact written");
    Ok(())
}

/// Read the artifact verbatim.
///
/// # Errors
///
/// Returns error if the file is missing or unreadable.
pub fn read_from_file(path: &Path) -> Result<String, ExportError> {
    std::fs::read_to_string(path).map_err(|e| ExportError::Read(path.to_path_buf(), e.to_string()))
}

/// True iff the file holds exactly `serialize(catalog)`.
///
/// # Errors
///
/// Returns error if the catalog cannot be serialized or the file read.
pub fn is_consistent(catalog: &FaultCategoryCatalog, path: &Path) -> Result<bool, ExportError> {
    Ok(check_consistency(catalog, path)?.is_in_sync())
}

/// Compare the live serialization with the file and locate the first drift.
///
/// The comparison is on raw bytes, so a file that is not even UTF-8 is
/// reported as drift, not as a read failure.
///
/// # Errors
///
/// Returns error if the catalog cannot be serialized or the file read.
pub fn check_consistency(
    catalog: &FaultCategoryCatalog,
    path: &Path,
) -> Result<Consistency, ExportError> {
    let expected = serialize(catalog)?;
    let found =
        std::fs::read(path).map_err(|e| ExportError::Read(path.to_path_buf(), e.to_string()))?;

    if found == expected.as_bytes() {
        debug!(path = %path.display(), "fault category artifact in sync");
        return Ok(Consistency::InSync);
    }

    let found = String::from_utf8_lossy(&found);
    let drift = first_difference(&expected, &found).unwrap_or(Drift {
        line: 1,
        expected: expected.split('\n').next().map(str::to_string),
        found: found.split('\n').next().map(str::to_string),
    });
    debug!(path = %path.display(), line = drift.line, "fault category artifact drifted");
    Ok(Consistency::Drifted(drift))
}

/// Serialize the catalog and overwrite the artifact.
///
/// # Errors
///
/// Returns error if serialization or the write fails. An unreadable
/// previous file is not an error; it is simply replaced.
pub fn regenerate(catalog: &FaultCategoryCatalog, path: &Path) -> Result<Regenerated, ExportError> {
    let json = serialize(catalog)?;
    let changed = !read_from_file(path).is_ok_and(|previous| previous == json);
    write_to_file(&json, path)?;

    Ok(Regenerated {
        path: path.to_path_buf(),
        categories: catalog.len(),
        changed,
    })
}

/// Outcome of [`regenerate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Regenerated {
    pub path: PathBuf,
    pub categories: usize,
    /// False when the file already held the same content
    pub changed: bool,
}

/// Result of comparing the artifact with the live catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Consistency {
    InSync,
    Drifted(Drift),
}

impl Consistency {
    #[must_use]
    pub const fn is_in_sync(&self) -> bool {
        matches!(self, Self::InSync)
    }
}

/// First line where the artifact differs from the live serialization.
///
/// `None` on either side means that text ended before this line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drift {
    /// 1-based
    pub line: usize,
    pub expected: Option<String>,
    pub found: Option<String>,
}

impl std::fmt::Display for Drift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |s: &Option<String>| match s {
            Some(text) => format!("{text:?}"),
            None => "<end of file>".to_string(),
        };
        write!(
            f,
            "line {}: expected {}, found {}",
            self.line,
            show(&self.expected),
            show(&self.found)
        )
    }
}

/// Splitting on '\n' (not `lines()`) keeps a missing or extra final
/// newline and stray '\r' visible as a difference.
fn first_difference(expected: &str, found: &str) -> Option<Drift> {
    if expected == found {
        return None;
    }

    let mut exp = expected.split('\n');
    let mut got = found.split('\n');
    let mut line = 1;
    loop {
        match (exp.next(), got.next()) {
            (Some(a), Some(b)) if a == b => line += 1,
            (None, None) => return None,
            (a, b) => {
                return Some(Drift {
                    line,
                    expected: a.map(str::to_string),
                    found: b.map(str::to_string),
                });
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Cannot read {0}: {1}")]
    Read(PathBuf, String),
    #[error("Cannot write {0}: {1}")]
    Write(PathBuf, String),
}
