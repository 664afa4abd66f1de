//! CLI entry-point for OCR-driven search.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tokio::io::AsyncReadExt;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    ocr::{clean_ocr_text, OcrOutput, PackagingHints},
};

/// Args for the `ocr` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// OCR output: plain text, or a JSON payload when the name ends in `.json`.
    /// Use `-` to read plain text from stdin.
    pub input: PathBuf,
    /// Override the configured result cap.
    #[arg(long)]
    pub limit: Option<usize>,
    /// Emit JSON instead of a listing.
    #[arg(long)]
    pub json: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let output = read_output(&args.input).await?;
    let catalog = super::load_catalog(&settings)?;
    let engine = super::engine_for(&settings, args.limit)?;

    let text = output.full_text();
    let results = engine.search_by_ocr_text(&catalog, &text);
    info!(
        chars = text.len(),
        mean_confidence = ?output.mean_confidence,
        results = results.len(),
        "ocr search finished"
    );

    if !args.json {
        let hints = PackagingHints::extract(&clean_ocr_text(&text));
        if !hints.is_empty() {
            println!(
                "hints: barcode={} strength={} manufacturer={}",
                hints.barcode.as_deref().unwrap_or("-"),
                hints.strength.as_deref().unwrap_or("-"),
                hints.manufacturer.as_deref().unwrap_or("-"),
            );
        }
    }
    super::print_results(&results, &engine, args.json)
}

async fn read_output(input: &Path) -> Result<OcrOutput> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("reading ocr text from stdin")?;
        return Ok(OcrOutput::from_text(text));
    }
    let raw = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("reading {}", input.display()))?;
    let is_json = input
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", input.display()))
    } else {
        Ok(OcrOutput::from_text(raw))
    }
}
