//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for per-item rush-docs operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when the workspace manifest cannot be loaded.
///
/// Both variants are fatal: no job starts processing files without a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("Failed to read manifest at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The manifest is not valid JSON once comments are stripped.
    #[error("Failed to parse manifest at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
