//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::MedicineRecord,
    matching::{ConfidenceBand, MatchEngine, MatchType, SearchResult},
    ocr::{OcrOutput, PackagingHints},
};

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrSearchRequest {
    #[serde(flatten)]
    pub ocr: OcrOutput,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultDto {
    pub medicine: MedicineRecord,
    pub confidence_score: f64,
    pub confidence_band: ConfidenceBand,
    pub high_confidence: bool,
    pub matched_text: String,
    pub match_type: MatchType,
}

impl SearchResultDto {
    pub fn from_result(result: &SearchResult<'_>, engine: &MatchEngine) -> Self {
        Self {
            medicine: result.medicine.clone(),
            confidence_score: result.confidence_score,
            confidence_band: engine.classify(result),
            high_confidence: engine.is_high_confidence(result),
            matched_text: result.matched_text.clone(),
            match_type: result.match_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrSearchResponse {
    pub extracted_text: String,
    pub medicine_info: PackagingHints,
    pub search_results: Vec<SearchResultDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}
