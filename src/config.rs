//! Repository layout resolution.
//!
//! Every path the jobs touch is derived from the repository root. The defaults
//! match the monorepo's layout; the CLI can override each one.

use std::path::{Path, PathBuf};

/// Manifest filename at the repository root.
pub const DEFAULT_MANIFEST: &str = "rush.json";

/// Documentation root scanned by the link fixer.
pub const DEFAULT_DOCS_ROOT: &str = "docs";

/// Locale trees that receive synchronized package READMEs.
pub const DEFAULT_DESTINATIONS: [&str; 2] = ["docs/en/packages", "docs/zh-Hans/packages"];

/// Resolved filesystem layout for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    /// Repository root; project folders are relative to it.
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub docs_root: PathBuf,
    /// Directories that each receive a copy of every package README.
    pub destinations: Vec<PathBuf>,
}

impl RepoLayout {
    /// Default layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            manifest: root.join(DEFAULT_MANIFEST),
            docs_root: root.join(DEFAULT_DOCS_ROOT),
            destinations: DEFAULT_DESTINATIONS.iter().map(|d| root.join(d)).collect(),
            root,
        }
    }

    /// Override the manifest path. Relative paths resolve against the root.
    #[must_use]
    pub fn with_manifest(mut self, manifest: Option<PathBuf>) -> Self {
        if let Some(path) = manifest {
            self.manifest = self.resolve(&path);
        }
        self
    }

    /// Override the documentation root. Relative paths resolve against the root.
    #[must_use]
    pub fn with_docs_root(mut self, docs_root: Option<PathBuf>) -> Self {
        if let Some(path) = docs_root {
            self.docs_root = self.resolve(&path);
        }
        self
    }

    /// Replace the destination directories. An empty list keeps the defaults.
    #[must_use]
    pub fn with_destinations(mut self, destinations: Vec<PathBuf>) -> Self {
        if !destinations.is_empty() {
            self.destinations = destinations.into_iter().map(|d| self.resolve(&d)).collect();
        }
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
