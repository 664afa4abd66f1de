//! Structured hints read off packaging text: barcode, strength, maker.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BARCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{8,13}\b").expect("valid regex"));
static STRENGTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+(?:\.\d+)?\s*(?:mg|mcg|g|ml|iu)\b").expect("valid regex")
});

const MANUFACTURER_KEYWORDS: &[&str] = &[
    "ltd",
    "inc",
    "corp",
    "pharma",
    "pharmaceuticals",
    "company",
];

/// First barcode, strength and manufacturer-looking line found in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingHints {
    pub barcode: Option<String>,
    pub strength: Option<String>,
    pub manufacturer: Option<String>,
}

impl PackagingHints {
    pub fn extract(text: &str) -> Self {
        let mut hints = Self::default();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if hints.barcode.is_none() {
                hints.barcode = BARCODE.find(line).map(|m| m.as_str().to_string());
            }
            if hints.strength.is_none() {
                hints.strength = STRENGTH.find(line).map(|m| m.as_str().to_string());
            }
            if hints.manufacturer.is_none() && mentions_manufacturer(line) {
                hints.manufacturer = Some(line.to_string());
            }
        }
        hints
    }

    pub fn is_empty(&self) -> bool {
        self.barcode.is_none() && self.strength.is_none() && self.manufacturer.is_none()
    }
}

fn mentions_manufacturer(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| MANUFACTURER_KEYWORDS.contains(&word))
}
