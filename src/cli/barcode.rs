//! CLI entry-point for barcode lookup.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{instrument, warn};

use crate::config::Settings;

/// Args for the `barcode` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Barcode digits as printed on the pack.
    pub code: String,
    /// Emit JSON instead of a listing.
    #[arg(long)]
    pub json: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let catalog = super::load_catalog(&settings)?;
    let engine = super::engine_for(&settings, None)?;
    let results: Vec<_> = engine
        .search_by_barcode(&catalog, &args.code)
        .into_iter()
        .collect();
    if results.is_empty() {
        warn!(code = %args.code, "barcode not in catalog");
    }
    super::print_results(&results, &engine, args.json)
}
