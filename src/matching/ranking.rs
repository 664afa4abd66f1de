//! Merging, ordering and capping of search results.

use std::cmp::Ordering;

use indexmap::{map::Entry, IndexMap};

use super::SearchResult;

/// Sort by descending score and keep the first `cap` results.
///
/// Equal scores fall back to brand name, then id, so output is deterministic.
pub fn rank(results: &mut Vec<SearchResult<'_>>, cap: usize) {
    results.sort_by(compare);
    results.truncate(cap);
}

fn compare(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.confidence_score
        .total_cmp(&a.confidence_score)
        .then_with(|| a.medicine.brand_name.cmp(&b.medicine.brand_name))
        .then_with(|| a.medicine.id.cmp(&b.medicine.id))
}

/// Collapse results that reference the same medicine id, keeping the one with
/// the highest score.
pub fn merge_best<'a, I>(results: I) -> Vec<SearchResult<'a>>
where
    I: IntoIterator<Item = SearchResult<'a>>,
{
    let mut best: IndexMap<&'a str, SearchResult<'a>> = IndexMap::new();
    for result in results {
        let medicine = result.medicine;
        match best.entry(medicine.id.as_str()) {
            Entry::Occupied(mut slot) => {
                if result.confidence_score > slot.get().confidence_score {
                    slot.insert(result);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(result);
            }
        }
    }
    best.into_values().collect()
}
