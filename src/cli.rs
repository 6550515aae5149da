use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rush-docs")]
#[command(about = "Keep package documentation in a Rush monorepo in sync", long_about = None)]
pub struct Cli {
    /// Repository root containing rush.json.
    #[arg(short, long, env = "RUSH_DOCS_ROOT", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Log at DEBUG level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy each package README into the localized documentation trees.
    SyncDocs {
        /// Manifest path, relative to the root.
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Destination directory; repeat to replace the default locale pair.
        #[arg(short, long = "dest")]
        destinations: Vec<PathBuf>,
    },
    /// Rewrite cross-package links in the docs to canonical package pages.
    FixLinks {
        /// Manifest path, relative to the root.
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Documentation root to scan, relative to the root.
        #[arg(short, long)]
        docs: Option<PathBuf>,
    },
}
