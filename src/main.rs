use clap::Parser;
use rush_docs::cli::{Cli, Commands};
use rush_docs::{PackageMapping, RepoLayout, fix_links, load_projects, sync_docs};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    rush_docs::tracing::init(cli.verbose);

    match cli.command {
        Commands::SyncDocs {
            manifest,
            destinations,
        } => {
            let layout = RepoLayout::new(cli.root)
                .with_manifest(manifest)
                .with_destinations(destinations);

            info!("Loading projects from {}...", layout.manifest.display());
            let projects = load_projects(&layout.manifest)?;
            info!("Found {} projects", projects.len());

            let report = sync_docs(&layout.root, &projects, &layout.destinations);
            info!(
                "Finished syncing. Synced {}, skipped {} without README, failed {}.",
                report.synced.len(),
                report.skipped.len(),
                report.failed.len()
            );
            for (package, reason) in &report.failed {
                warn!("  {}: {}", package, reason);
            }
        }
        Commands::FixLinks { manifest, docs } => {
            let layout = RepoLayout::new(cli.root)
                .with_manifest(manifest)
                .with_docs_root(docs);

            info!("Loading package mapping from {}...", layout.manifest.display());
            let mapping = PackageMapping::from_projects(&load_projects(&layout.manifest)?);
            info!("Found {} packages", mapping.len());

            let report = fix_links(&layout.docs_root, &mapping);
            info!(
                "Finished processing. Updated {} of {} files ({} failed).",
                report.files_updated, report.files_found, report.files_failed
            );
        }
    }

    Ok(())
}
