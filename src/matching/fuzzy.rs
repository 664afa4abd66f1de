//! Bounded approximate substring matching.
//!
//! The matcher looks for the substring of `text` that is cheapest to turn into
//! `pattern` (semi-global Levenshtein, insertions, deletions and substitutions
//! all cost 1). A match is rated by its dissimilarity
//!
//! ```text
//! errors / pattern_chars + start_offset / window
//! ```
//!
//! so an exact hit at the start of the text rates `0.0`, while typos and
//! matches further into the text are penalised. Matches rated above the
//! acceptance threshold are discarded.
//!
//! Whole-string metrics such as Jaro-Winkler compare the query against the
//! entire searchable text, which mixes brand, generic, manufacturer and
//! strength; a short query would rate poorly against it and the metric has no
//! start offset to feed the proximity term.

/// Parameters of the approximate matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    /// Highest dissimilarity still accepted as a match.
    pub threshold: f64,
    /// Characters from the start of the text within which a match may begin.
    pub window: usize,
}

/// Best accepted match of a pattern inside a text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    /// Dissimilarity in `[0, 1]`; `0.0` is an exact match at offset zero.
    pub distance: f64,
    pub errors: usize,
    /// Character offsets of the matched substring, end exclusive.
    pub start: usize,
    pub end: usize,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            window: 100,
        }
    }
}

impl FuzzyMatcher {
    pub fn new(threshold: f64, window: usize) -> Self {
        Self { threshold, window }
    }

    /// Locate `pattern` in `text`, returning `None` when nothing rates within
    /// the threshold.
    pub fn find(&self, pattern: &str, text: &str) -> Option<FuzzyMatch> {
        let pattern: Vec<char> = pattern.chars().collect();
        let m = pattern.len();
        if m == 0 || self.window == 0 {
            return None;
        }
        // Starts past the window already rate above 1.0, so the tail never matters.
        let text: Vec<char> = text.chars().take(self.window.saturating_add(m)).collect();
        if text.is_empty() {
            return None;
        }

        // cost[i] / start[i]: cheapest alignment of pattern[..i] ending at the
        // current text column, and the text offset where it begins.
        let mut cost: Vec<usize> = (0..=m).collect();
        let mut start: Vec<usize> = vec![0; m + 1];
        let mut best: Option<FuzzyMatch> = None;

        for (j, &tc) in text.iter().enumerate() {
            let column = j + 1;
            let mut diag_cost = cost[0];
            let mut diag_start = start[0];
            cost[0] = 0;
            start[0] = column;

            for i in 1..=m {
                let up_cost = cost[i];
                let up_start = start[i];

                let substitution = diag_cost + usize::from(pattern[i - 1] != tc);
                let skip_pattern = cost[i - 1] + 1;
                let skip_text = up_cost + 1;

                // ties prefer the earlier start, which rates better
                let mut next = (substitution, diag_start);
                for candidate in [(skip_pattern, start[i - 1]), (skip_text, up_start)] {
                    if candidate < next {
                        next = candidate;
                    }
                }
                let (next_cost, next_start) = next;

                diag_cost = up_cost;
                diag_start = up_start;
                cost[i] = next_cost;
                start[i] = next_start;
            }

            let errors = cost[m];
            let offset = start[m];
            let distance = errors as f64 / m as f64 + offset as f64 / self.window as f64;
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(FuzzyMatch {
                    distance,
                    errors,
                    start: offset,
                    end: column,
                });
            }
        }

        best.filter(|b| b.distance <= self.threshold)
            .map(|b| FuzzyMatch {
                distance: b.distance.clamp(0.0, 1.0),
                ..b
            })
    }

    /// Similarity term in `[0, 1]`: `1 - distance` for an accepted match.
    pub fn similarity(&self, pattern: &str, text: &str) -> Option<f64> {
        self.find(pattern, text).map(|m| 1.0 - m.distance)
    }
}
