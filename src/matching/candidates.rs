//! Candidate medicine-name extraction from OCR text.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::normalize::normalize;

/// A capitalised run of letters, spaces and hyphens ("Amoxicillin",
/// "Co-Amoxiclav Forte").
static NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Lu}[\p{L}\s-]+$").expect("valid regex"));

/// The same shape followed by a dosage number ("Amoxicillin 250").
static DOSED_NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Lu}[\p{L}\s-]+\s+\d+").expect("valid regex"));

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").expect("valid regex"));

/// Terms kept by the token pass regardless of their length.
const MEDICINE_VOCABULARY: &[&str] = &[
    // units and dosage forms
    "mg",
    "mcg",
    "ml",
    "iu",
    "gm",
    "tab",
    "tabs",
    "tablet",
    "tablets",
    "cap",
    "caps",
    "capsule",
    "capsules",
    "syrup",
    "suspension",
    "injection",
    "cream",
    "ointment",
    "drops",
    // common generics and brands
    "paracetamol",
    "acetaminophen",
    "ibuprofen",
    "aspirin",
    "amoxicillin",
    "azithromycin",
    "cetirizine",
    "metformin",
    "omeprazole",
    "pantoprazole",
    "diclofenac",
    "crocin",
    "dolo",
    "calpol",
    "panadol",
    "tylenol",
    "advil",
    // manufacturer boilerplate
    "pharma",
    "pharmaceuticals",
    "labs",
    "laboratories",
    "ltd",
    "inc",
    "corp",
];

/// Derive candidate name strings from a block of OCR text.
///
/// Runs a line pass over the original-case text and a token pass over its
/// whitespace-separated tokens; every candidate is normalised before it is
/// added to the set.
pub fn extract_candidates(ocr_text: &str) -> IndexSet<String> {
    let mut candidates = IndexSet::new();

    for line in line_candidates(ocr_text) {
        insert_normalized(&mut candidates, line);
    }
    for token in token_candidates(ocr_text) {
        insert_normalized(&mut candidates, &token);
    }

    debug!(count = candidates.len(), "extracted ocr candidates");
    candidates
}

fn insert_normalized(set: &mut IndexSet<String>, raw: &str) {
    let normalized = normalize(raw);
    if !normalized.is_empty() {
        set.insert(normalized);
    }
}

/// Lines that look like a capitalised product name, optionally with a dose.
pub fn line_candidates(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| {
        line.chars().count() > 2 && (NAME_LINE.is_match(line) || DOSED_NAME_LINE.is_match(line))
    })
}

/// Alphabetic tokens longer than three characters plus vocabulary hits.
pub fn token_candidates(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|raw| {
        let cleaned = NON_WORD.replace_all(raw, "");
        let is_word = cleaned.chars().count() > 3 && cleaned.chars().all(char::is_alphabetic);
        if is_word || is_vocabulary_term(&cleaned) {
            Some(cleaned.to_lowercase())
        } else {
            None
        }
    })
}

fn is_vocabulary_term(token: &str) -> bool {
    let lower = token.to_lowercase();
    MEDICINE_VOCABULARY.contains(&lower.as_str())
}
