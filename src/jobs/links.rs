//! Link Fixer: point cross-package markdown links at the synchronized docs.
//!
//! A link such as `[@yuants/protocol](../../libraries/protocol/README.md)` is
//! rewritten to `[@yuants/protocol](./packages/@yuants-protocol.md)`. Links to
//! packages missing from the manifest are left alone.

use crate::error::Result;
use crate::manifest::PackageMapping;
use anyhow::Context;
use ignore::WalkBuilder;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{error, info, warn};

/// `[yuants/x](...)` or `[@yuants/x](...)`; group 1 is the link text.
static PACKAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(@?yuants/[^@\[\]()]+)\]\([^)]*\)").expect("package link pattern is valid")
});

/// `[@yuants/x](...)` only; group 1 is the text after the `@`.
static SCOPED_PACKAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[@(yuants/[^@\[\]()]+)\]\([^)]*\)").expect("scoped link pattern is valid")
});

/// Outcome of a link fixing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkFixReport {
    pub files_found: usize,
    pub files_updated: usize,
    /// Files that could not be read or written; these are never counted as updated.
    pub files_failed: usize,
}

/// Recursively collect `.md` files under `root`, sorted by path.
///
/// Hidden files, git-ignored files, symlinks to files, and a file named just
/// `.md` are all included. Symlinked directories are not descended into. A
/// missing root yields no files.
pub fn find_markdown_files(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!("Docs directory {} does not exist", root.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkBuilder::new(root)
        .standard_filters(false)
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .map(ignore::DirEntry::into_path)
        // `is_file` stats through symlinks, so linked markdown files are kept.
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".md"))
        })
        .collect();

    files.sort();
    files
}

/// Rewrite every known package link in `content` to its canonical docs path.
///
/// Returns `Cow::Borrowed` when no package link matched. Applying this to its
/// own output yields the same text.
pub fn rewrite_links<'a>(content: &'a str, mapping: &PackageMapping) -> Cow<'a, str> {
    let replace = |caps: &Captures<'_>, name: String| match mapping.get(&name) {
        Some(stem) => format!("[{}](./packages/{}.md)", name, stem),
        None => caps[0].to_string(),
    };

    let first = PACKAGE_LINK.replace_all(content, |caps: &Captures<'_>| {
        let text = &caps[1];
        let name = if text.starts_with('@') {
            text.to_string()
        } else {
            format!("@{}", text)
        };
        replace(caps, name)
    });

    if let Cow::Owned(rewritten) =
        SCOPED_PACKAGE_LINK.replace_all(&first, |caps: &Captures<'_>| {
            replace(caps, format!("@{}", &caps[1]))
        })
    {
        return Cow::Owned(rewritten);
    }
    first
}

/// Fix links in one markdown file, writing it back only if it changed.
///
/// Returns `true` when the file was rewritten.
pub fn fix_file(path: &Path, mapping: &PackageMapping) -> Result<bool> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match rewrite_links(&content, mapping) {
        Cow::Owned(rewritten) if rewritten != content => {
            std::fs::write(path, rewritten)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Fix package links in every markdown file under `docs_root`.
///
/// Per-file errors are logged and counted; they never abort the run.
pub fn fix_links(docs_root: &Path, mapping: &PackageMapping) -> LinkFixReport {
    let files = find_markdown_files(docs_root);
    info!("Found {} markdown files", files.len());

    let mut report = LinkFixReport {
        files_found: files.len(),
        ..LinkFixReport::default()
    };

    for path in &files {
        match fix_file(path, mapping) {
            Ok(true) => {
                info!("Updated links in {}", path.display());
                report.files_updated += 1;
            }
            Ok(false) => info!("No changes needed in {}", path.display()),
            Err(e) => {
                error!("Error processing {}: {:#}", path.display(), e);
                report.files_failed += 1;
            }
        }
    }

    report
}
