//! Command-line interface wiring for medscan.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::{
    api::types::SearchResultDto,
    catalog::{self, MedicineRecord},
    config::Settings,
    matching::{MatchEngine, SearchResult},
};

pub mod barcode;
pub mod ocr;
pub mod search;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Identify medicines from packaging text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Search(args) => search::run(args, settings).await,
            Commands::Ocr(args) => ocr::run(args, settings).await,
            Commands::Barcode(args) => barcode::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank catalog medicines against a typed query.
    Search(search::Args),
    /// Rank catalog medicines against OCR output read from a file or stdin.
    Ocr(ocr::Args),
    /// Look a medicine up by its exact barcode.
    Barcode(barcode::Args),
    /// Serve the JSON search API.
    Serve(serve::Args),
}

/// Read the catalog snapshot named by the settings.
pub(crate) fn load_catalog(settings: &Settings) -> Result<Vec<MedicineRecord>> {
    catalog::load(&settings.catalog_path)
        .with_context(|| format!("loading catalog {}", settings.catalog_path.display()))
}

/// Engine for one invocation, honouring an optional `--limit` override.
pub(crate) fn engine_for(settings: &Settings, limit: Option<usize>) -> Result<MatchEngine> {
    let mut config = settings.match_config();
    if let Some(limit) = limit {
        anyhow::ensure!(limit > 0, "--limit must be at least 1");
        config = config.with_max_results(limit);
    }
    Ok(MatchEngine::new(config))
}

/// Print results as a plain listing or as JSON.
pub(crate) fn print_results(
    results: &[SearchResult<'_>],
    engine: &MatchEngine,
    json: bool,
) -> Result<()> {
    if json {
        let dtos: Vec<SearchResultDto> = results
            .iter()
            .map(|r| SearchResultDto::from_result(r, engine))
            .collect();
        println!("{}", serde_json::to_string_pretty(&dtos)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("no matching medicines");
        return Ok(());
    }
    for (rank, result) in results.iter().enumerate() {
        let medicine = result.medicine;
        let marker = if engine.is_high_confidence(result) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker}{}. {} ({}) {} - {} [{:.2} {}]",
            rank + 1,
            medicine.brand_name,
            medicine.generic_name,
            medicine.strength,
            medicine.manufacturer,
            result.confidence_score,
            result.band(),
        );
    }
    Ok(())
}
