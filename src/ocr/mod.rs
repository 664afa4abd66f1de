//! Contract with the OCR collaborator and cleanup of its raw text.

pub mod hints;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use hints::PackagingHints;

/// Axis-aligned region of a recognised fragment, in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One localised piece of recognised text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextFragment {
    pub text: String,
    #[serde(default)]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
}

/// Everything an OCR run hands over. Only the text feeds matching.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OcrOutput {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mean_confidence: Option<f32>,
    #[serde(default)]
    pub fragments: Vec<TextFragment>,
}

impl OcrOutput {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The concatenated text, falling back to one line per fragment when the
    /// collaborator only produced fragments.
    pub fn full_text(&self) -> String {
        if !self.text.trim().is_empty() {
            return self.text.clone();
        }
        self.fragments
            .iter()
            .map(|fragment| fragment.text.trim())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

static STRAY_SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\-.,:;()\[\]{}]").expect("valid regex"));
static HORIZONTAL_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\S\n]+").expect("valid regex"));

/// Strip recognition artifacts while keeping line structure and case.
///
/// Each line loses stray symbols and has its whitespace runs collapsed;
/// lines left empty are dropped.
pub fn clean_ocr_text(text: &str) -> String {
    text.lines()
        .map(|line| {
            let stripped = STRAY_SYMBOLS.replace_all(line, "");
            HORIZONTAL_SPACE.replace_all(&stripped, " ").trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
