//! Runtime configuration utilities for medscan.

use std::{env, path::PathBuf, str::FromStr};

use anyhow::ensure;
use serde::Deserialize;

use crate::matching::MatchConfig;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// CSV or JSON file holding the medicine catalog.
    pub catalog_path: PathBuf,
    /// Maximum results returned per search.
    pub max_search_results: usize,
    /// Score at or above which a result is reported as high confidence.
    pub high_confidence_threshold: f64,
    /// Worst fuzzy dissimilarity still counted as a match.
    pub fuzzy_threshold: f64,
    /// Characters of searchable text a fuzzy match may start within.
    pub fuzzy_window: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = MatchConfig::default();
        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/medicines.csv"));

        let settings = Self {
            catalog_path,
            max_search_results: parse_var("MAX_SEARCH_RESULTS", defaults.max_results),
            high_confidence_threshold: parse_var(
                "HIGH_CONFIDENCE_THRESHOLD",
                defaults.high_confidence_threshold,
            ),
            fuzzy_threshold: parse_var("FUZZY_THRESHOLD", defaults.fuzzy_threshold),
            fuzzy_window: parse_var("FUZZY_WINDOW", defaults.fuzzy_window),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.max_search_results > 0,
            "MAX_SEARCH_RESULTS must be at least 1"
        );
        ensure!(
            (0.0..=1.0).contains(&self.high_confidence_threshold),
            "HIGH_CONFIDENCE_THRESHOLD must lie in [0, 1], got {}",
            self.high_confidence_threshold
        );
        ensure!(
            (0.0..=1.0).contains(&self.fuzzy_threshold),
            "FUZZY_THRESHOLD must lie in [0, 1], got {}",
            self.fuzzy_threshold
        );
        ensure!(self.fuzzy_window > 0, "FUZZY_WINDOW must be at least 1");
        Ok(())
    }

    /// Engine tunables derived from these settings.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            max_results: self.max_search_results,
            high_confidence_threshold: self.high_confidence_threshold,
            fuzzy_threshold: self.fuzzy_threshold,
            fuzzy_window: self.fuzzy_window,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
