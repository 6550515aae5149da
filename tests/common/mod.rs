//! Fixtures shared by the integration tests.
//!
//! [`TempWorkspace`] is a disposable monorepo checkout: a `rush.json`, package
//! folders with READMEs, and a `docs/` tree, all under one temp directory.

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Disposable monorepo rooted in a temp directory; removed on drop.
#[allow(dead_code)] // Each integration test crate uses a different subset
pub struct TempWorkspace {
    dir: TempDir,
}

#[allow(dead_code)] // Each integration test crate uses a different subset
impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp workspace"),
        }
    }

    /// Repository root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a repo-relative file.
    pub fn at(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to a repo-relative file, creating missing folders.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) {
        let target = self.at(relative);
        if let Some(folder) = target.parent() {
            std::fs::create_dir_all(folder)
                .unwrap_or_else(|e| panic!("mkdir for {}: {}", relative, e));
        }
        std::fs::write(&target, content).unwrap_or_else(|e| panic!("write {}: {}", relative, e));
    }

    /// Contents of a repo-relative file.
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.at(relative))
            .unwrap_or_else(|e| panic!("read {}: {}", relative, e))
    }

    /// Make `link` a symlink to the repo-relative `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, link: &str) {
        let link_path = self.at(link);
        if let Some(folder) = link_path.parent() {
            std::fs::create_dir_all(folder).unwrap_or_else(|e| panic!("mkdir for {}: {}", link, e));
        }
        std::os::unix::fs::symlink(self.at(target), &link_path)
            .unwrap_or_else(|e| panic!("symlink {} -> {}: {}", link, target, e));
    }

    /// Write a `rush.json` listing `(packageName, projectFolder)` pairs.
    ///
    /// The manifest carries both comment styles, as real Rush manifests do.
    pub fn create_rush_json(&self, projects: &[(&str, &str)]) {
        let entries: Vec<String> = projects
            .iter()
            .map(|(name, folder)| {
                format!(
                    "    {{\n      \"packageName\": \"{}\",\n      \"projectFolder\": \"{}\" // {}\n    }}",
                    name, folder, folder
                )
            })
            .collect();

        let content = format!(
            "/**\n * Rush configuration.\n */\n{{\n  \"rushVersion\": \"5.100.1\",\n  \"projects\": [\n{}\n  ]\n}}\n",
            entries.join(",\n")
        );
        self.write("rush.json", content);
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A workspace with a three-package manifest; only two packages have READMEs.
#[allow(dead_code)] // Used by some integration test crates only
#[fixture]
pub fn monorepo() -> TempWorkspace {
    let workspace = TempWorkspace::new();
    workspace.create_rush_json(&[
        ("@yuants/data-series", "libraries/data-series"),
        ("@yuants/protocol", "libraries/protocol"),
        ("@yuants/app-host", "apps/host"),
    ]);
    workspace.write("libraries/data-series/README.md", "Hello World");
    workspace.write(
        "libraries/protocol/README.md",
        "# Protocol\n\nSee [yuants/data-series](../data-series/README.md).\n",
    );
    workspace
}
