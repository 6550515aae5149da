//! Rush workspace manifest loading.
//!
//! Both jobs start here: read `rush.json`, strip its comments, and extract the
//! project list. Malformed project entries are skipped with a warning; an
//! unreadable or unparsable manifest is fatal.

pub mod comments;
pub mod mapping;

pub use comments::strip_comments;
pub use mapping::{PackageMapping, package_doc_stem};

use crate::error::ManifestError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One workspace project as declared in the manifest's `projects` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// npm package name, e.g. `@yuants/data-series`.
    pub package_name: String,
    /// Project folder relative to the repository root.
    pub project_folder: PathBuf,
}

/// Read and parse the manifest at `path`.
pub fn load_projects(path: &Path) -> Result<Vec<ProjectRecord>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_projects(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse manifest text (comments allowed) into project records.
///
/// A missing or non-array `projects` field yields an empty list.
pub fn parse_projects(content: &str) -> Result<Vec<ProjectRecord>, serde_json::Error> {
    let stripped = strip_comments(content);
    let mut manifest: serde_json::Value = serde_json::from_str(&stripped)?;

    let Some(entries) = manifest
        .get_mut("projects")
        .and_then(serde_json::Value::as_array_mut)
    else {
        warn!("Manifest has no `projects` array");
        return Ok(Vec::new());
    };

    let mut projects = Vec::with_capacity(entries.len());
    for (index, entry) in entries.drain(..).enumerate() {
        match serde_json::from_value::<ProjectRecord>(entry) {
            Ok(record) if record.package_name.is_empty() => {
                warn!("Skipping project #{}: empty packageName", index);
            }
            Ok(record) if record.project_folder.as_os_str().is_empty() => {
                warn!(
                    "Skipping project #{} ({}): empty projectFolder",
                    index, record.package_name
                );
            }
            Ok(record) => projects.push(record),
            Err(e) => warn!("Skipping project #{}: {}", index, e),
        }
    }

    debug!("Loaded {} projects from manifest", projects.len());
    Ok(projects)
}
