//! CLI entry-point for typed medicine search.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::config::Settings;

/// Args for the `search` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Brand, generic or manufacturer text to look for.
    pub query: String,
    /// Override the configured result cap.
    #[arg(long)]
    pub limit: Option<usize>,
    /// Emit JSON instead of a listing.
    #[arg(long)]
    pub json: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let catalog = super::load_catalog(&settings)?;
    let engine = super::engine_for(&settings, args.limit)?;
    let results = engine.search_by_query(&catalog, &args.query);
    info!(results = results.len(), "search finished");
    super::print_results(&results, &engine, args.json)
}
