//! The two documentation maintenance jobs.
//!
//! Each job takes an already-loaded manifest view and returns a report; neither
//! calls the other.

pub mod links;
pub mod sync;

pub use links::{LinkFixReport, find_markdown_files, fix_file, fix_links, rewrite_links};
pub use sync::{SyncReport, sync_docs, with_title};
