//! Candidate matching engine: turns queries and OCR text into ranked,
//! confidence-scored medicine candidates.

pub mod candidates;
pub mod confidence;
pub mod fuzzy;
pub mod normalize;
pub mod ranking;
pub mod scoring;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    catalog::MedicineRecord,
    ocr::{clean_ocr_text, PackagingHints},
};

pub use candidates::extract_candidates;
pub use confidence::ConfidenceBand;
pub use fuzzy::{FuzzyMatch, FuzzyMatcher};
pub use normalize::normalize;
pub use scoring::Scorer;

/// Score given to a record whose barcode was read off the packaging text.
const OCR_BARCODE_SCORE: f64 = 0.95;

/// Tunables of the matching engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Upper bound on returned results.
    pub max_results: usize,
    /// Minimum score for a result to count as high confidence.
    pub high_confidence_threshold: f64,
    /// Worst fuzzy dissimilarity still accepted.
    pub fuzzy_threshold: f64,
    /// Characters of searchable text within which a fuzzy match may start.
    pub fuzzy_window: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            high_confidence_threshold: 0.9,
            fuzzy_threshold: 0.3,
            fuzzy_window: 100,
        }
    }
}

impl MatchConfig {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// How a result was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Text,
    Ocr,
    Barcode,
}

/// One ranked candidate. Borrows the record from the caller's catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    pub medicine: &'a MedicineRecord,
    pub confidence_score: f64,
    pub matched_text: String,
    pub match_type: MatchType,
}

impl SearchResult<'_> {
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_score(self.confidence_score)
    }
}

/// Stateless search service. Construct once and share by reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine {
    config: MatchConfig,
    scorer: Scorer,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        let fuzzy = FuzzyMatcher::new(config.fuzzy_threshold, config.fuzzy_window);
        Self {
            config,
            scorer: Scorer::new(fuzzy),
        }
    }

    /// Same engine with a different result cap.
    pub fn with_max_results(&self, max_results: usize) -> Self {
        Self::new(self.config.with_max_results(max_results))
    }

    /// Score one normalised query against one record.
    pub fn score(&self, query: &str, medicine: &MedicineRecord) -> f64 {
        self.scorer.score(query, medicine)
    }

    /// Rank the catalog against a user-entered query.
    pub fn search_by_query<'a>(
        &self,
        catalog: &'a [MedicineRecord],
        query: &str,
    ) -> Vec<SearchResult<'a>> {
        self.search_normalized(catalog, &normalize(query), MatchType::Text)
    }

    /// Rank the catalog against raw OCR text.
    ///
    /// Every extracted candidate is searched on its own; the union is
    /// collapsed to one result per medicine id at its best score.
    pub fn search_by_ocr_text<'a>(
        &self,
        catalog: &'a [MedicineRecord],
        ocr_text: &str,
    ) -> Vec<SearchResult<'a>> {
        let cleaned = clean_ocr_text(ocr_text);
        let candidates = extract_candidates(&cleaned);

        let mut hits = Vec::new();
        for candidate in &candidates {
            hits.extend(self.search_normalized(catalog, candidate, MatchType::Ocr));
        }
        if let Some(code) = PackagingHints::extract(&cleaned).barcode {
            if let Some(mut hit) = self.search_by_barcode(catalog, &code) {
                hit.confidence_score = OCR_BARCODE_SCORE;
                hits.push(hit);
            }
        }

        let mut results = ranking::merge_best(hits);
        ranking::rank(&mut results, self.config.max_results);
        debug!(
            candidates = candidates.len(),
            results = results.len(),
            "ocr search complete"
        );
        results
    }

    /// Exact barcode lookup; a hit is certain.
    pub fn search_by_barcode<'a>(
        &self,
        catalog: &'a [MedicineRecord],
        barcode: &str,
    ) -> Option<SearchResult<'a>> {
        let code = barcode.trim();
        if code.is_empty() {
            return None;
        }
        catalog
            .iter()
            .find(|medicine| medicine.barcode.as_deref().map(str::trim) == Some(code))
            .map(|medicine| SearchResult {
                medicine,
                confidence_score: 1.0,
                matched_text: code.to_string(),
                match_type: MatchType::Barcode,
            })
    }

    pub fn classify(&self, result: &SearchResult<'_>) -> ConfidenceBand {
        result.band()
    }

    pub fn is_high_confidence(&self, result: &SearchResult<'_>) -> bool {
        confidence::is_high_confidence(
            result.confidence_score,
            self.config.high_confidence_threshold,
        )
    }

    fn search_normalized<'a>(
        &self,
        catalog: &'a [MedicineRecord],
        query: &str,
        match_type: MatchType,
    ) -> Vec<SearchResult<'a>> {
        if query.is_empty() {
            return Vec::new();
        }
        let mut results: Vec<SearchResult<'a>> = catalog
            .iter()
            .filter_map(|medicine| {
                let fields = scoring::SearchableFields::from_record(medicine);
                let score = self.scorer.score_fields(query, &fields);
                (score > 0.0).then(|| SearchResult {
                    medicine,
                    confidence_score: score,
                    matched_text: scoring::matched_words(query, &fields.text),
                    match_type,
                })
            })
            .collect();
        ranking::rank(&mut results, self.config.max_results);
        debug!(%query, results = results.len(), "query search complete");
        results
    }
}
