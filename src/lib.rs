pub mod cli;
pub mod config;
pub mod error;
pub mod jobs;
pub mod manifest;
pub mod tracing;

pub use config::RepoLayout;
pub use error::ManifestError;
pub use jobs::{LinkFixReport, SyncReport, fix_links, sync_docs};
pub use manifest::{PackageMapping, ProjectRecord, load_projects};
