//! Doc Sync: republish package READMEs into the localized documentation trees.

use crate::error::Result;
use crate::manifest::{ProjectRecord, package_doc_stem};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// README filename looked up in each project folder.
pub const README: &str = "README.md";

/// Outcome of a doc sync run, by package name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: Vec<String>,
    /// Projects without a README.
    pub skipped: Vec<String>,
    /// Projects whose README could not be read or written, with the error message.
    pub failed: Vec<(String, String)>,
}

/// Ensure `content` opens with a top-level heading.
///
/// Content whose trimmed text already starts with `# ` is returned unchanged;
/// otherwise `# <package_name>` and a blank line are prepended.
pub fn with_title(content: &str, package_name: &str) -> String {
    if content.trim().starts_with("# ") {
        content.to_string()
    } else {
        format!("# {}\n\n{}", package_name, content)
    }
}

/// Copy every project's README into each destination directory.
///
/// Output files are named after [`package_doc_stem`] and overwrite existing
/// files. A failure on one project is logged and recorded; the remaining
/// projects are still processed.
pub fn sync_docs(
    repo_root: &Path,
    projects: &[ProjectRecord],
    destinations: &[PathBuf],
) -> SyncReport {
    let mut report = SyncReport::default();

    for project in projects {
        let readme = repo_root.join(&project.project_folder).join(README);
        if !readme.is_file() {
            debug!(
                "No README for {} at {}, skipping",
                project.package_name,
                readme.display()
            );
            report.skipped.push(project.package_name.clone());
            continue;
        }

        match sync_project(project, &readme, destinations) {
            Ok(()) => {
                info!("Synced {}", project.package_name);
                report.synced.push(project.package_name.clone());
            }
            Err(e) => {
                error!("Failed to sync {}: {:#}", project.package_name, e);
                report
                    .failed
                    .push((project.package_name.clone(), format!("{:#}", e)));
            }
        }
    }

    report
}

fn sync_project(project: &ProjectRecord, readme: &Path, destinations: &[PathBuf]) -> Result<()> {
    let content = std::fs::read_to_string(readme)
        .with_context(|| format!("Failed to read {}", readme.display()))?;
    let content = with_title(&content, &project.package_name);
    let filename = format!("{}.md", package_doc_stem(&project.package_name));

    for dest in destinations {
        std::fs::create_dir_all(dest)
            .with_context(|| format!("Failed to create {}", dest.display()))?;
        let target = dest.join(&filename);
        std::fs::write(&target, &content)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        debug!("Wrote {}", target.display());
    }

    Ok(())
}
