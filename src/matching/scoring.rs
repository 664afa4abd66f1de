//! Per-record confidence scoring.

use crate::catalog::MedicineRecord;

use super::{
    fuzzy::FuzzyMatcher,
    normalize::{normalize, words},
};

const FULL_TEXT_WEIGHT: f64 = 0.8;
const BRAND_WEIGHT: f64 = 0.6;
const GENERIC_WEIGHT: f64 = 0.5;
const MANUFACTURER_WEIGHT: f64 = 0.3;
const FUZZY_WEIGHT: f64 = 0.4;
const OVERLAP_WEIGHT: f64 = 0.3;

/// Query words this short never count towards word overlap.
const MIN_QUERY_WORD_CHARS: usize = 3;

/// Normalised views of one record, built once per scoring call.
#[derive(Debug, Clone)]
pub struct SearchableFields {
    pub text: String,
    pub brand: String,
    pub generic: String,
    pub manufacturer: String,
}

impl SearchableFields {
    pub fn from_record(medicine: &MedicineRecord) -> Self {
        let joined = [
            medicine.brand_name.as_str(),
            medicine.generic_name.as_str(),
            medicine.manufacturer.as_str(),
            medicine.strength.as_str(),
        ]
        .into_iter()
        .filter(|field| !field.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Self {
            text: normalize(&joined),
            brand: normalize(&medicine.brand_name),
            generic: normalize(&medicine.generic_name),
            manufacturer: normalize(&medicine.manufacturer),
        }
    }
}

/// Multi-signal scorer combining substring, fuzzy and word-overlap evidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    fuzzy: FuzzyMatcher,
}

impl Scorer {
    pub fn new(fuzzy: FuzzyMatcher) -> Self {
        Self { fuzzy }
    }

    /// Score an already-normalised `query` against `medicine`, in `[0, 1]`.
    ///
    /// The terms are additive and not mutually exclusive: an exact full-text
    /// hit usually also earns the fuzzy and word-overlap terms.
    pub fn score(&self, query: &str, medicine: &MedicineRecord) -> f64 {
        if query.is_empty() {
            return 0.0;
        }
        let fields = SearchableFields::from_record(medicine);
        self.score_fields(query, &fields)
    }

    pub fn score_fields(&self, query: &str, fields: &SearchableFields) -> f64 {
        if query.is_empty() {
            return 0.0;
        }
        let mut score = 0.0;

        if fields.text.contains(query) {
            score += FULL_TEXT_WEIGHT;
        }
        if fields.brand.contains(query) {
            score += BRAND_WEIGHT;
        }
        if fields.generic.contains(query) {
            score += GENERIC_WEIGHT;
        }
        if fields.manufacturer.contains(query) {
            score += MANUFACTURER_WEIGHT;
        }
        if let Some(similarity) = self.fuzzy.similarity(query, &fields.text) {
            score += similarity * FUZZY_WEIGHT;
        }
        score += word_overlap(query, &fields.text) * OVERLAP_WEIGHT;

        score.clamp(0.0, 1.0)
    }
}

/// Fraction of qualifying query words that overlap some searchable word.
pub fn word_overlap(query: &str, searchable: &str) -> f64 {
    let targets: Vec<&str> = words(searchable).collect();
    let mut qualifying = 0usize;
    let mut matched = 0usize;
    for word in qualifying_words(query) {
        qualifying += 1;
        if targets.iter().any(|target| overlaps(word, target)) {
            matched += 1;
        }
    }
    if qualifying == 0 {
        0.0
    } else {
        matched as f64 / qualifying as f64
    }
}

/// Searchable words that overlap any qualifying query word, space-joined.
pub fn matched_text(query: &str, medicine: &MedicineRecord) -> String {
    let fields = SearchableFields::from_record(medicine);
    matched_words(query, &fields.text)
}

pub fn matched_words(query: &str, searchable: &str) -> String {
    let query_words: Vec<&str> = qualifying_words(query).collect();
    words(searchable)
        .filter(|target| query_words.iter().any(|word| overlaps(word, target)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn qualifying_words(query: &str) -> impl Iterator<Item = &str> {
    words(query).filter(|word| word.chars().count() >= MIN_QUERY_WORD_CHARS)
}

fn overlaps(query_word: &str, target: &str) -> bool {
    target.contains(query_word) || query_word.contains(target)
}
