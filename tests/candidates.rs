use medscan::matching::candidates::{extract_candidates, line_candidates, token_candidates};

#[test]
fn packaging_text_yields_line_and_token_candidates() {
    let candidates = extract_candidates("Amoxicillin\n250 mg\nXYZ Pharmaceuticals");
    assert!(candidates.contains("amoxicillin"));
    assert!(candidates.contains("xyz pharmaceuticals"));
    assert!(candidates.contains("pharmaceuticals"));
    assert!(candidates.contains("mg"));
    assert!(!candidates.contains("250 mg"));
    assert!(!candidates.contains("xyz"));
}

#[test]
fn line_pass_requires_leading_capital() {
    let lines: Vec<&str> = line_candidates("Amoxicillin 250\namoxicillin\nOk\nCo-Trimoxazole Forte").collect();
    assert_eq!(lines, vec!["Amoxicillin 250", "Co-Trimoxazole Forte"]);
}

#[test]
fn line_pass_rejects_digits_mid_name() {
    let lines: Vec<&str> = line_candidates("B12 Complex\nVitamin B12").collect();
    assert!(lines.is_empty());
}

#[test]
fn token_pass_keeps_long_words_and_vocabulary() {
    let tokens: Vec<String> = token_candidates("Take 1 TAB of Dolo, 650mg (fever)").collect();
    assert_eq!(tokens, vec!["take", "tab", "dolo", "fever"]);
}

#[test]
fn duplicates_collapse() {
    let candidates = extract_candidates("Crocin\nCrocin\ncrocin crocin");
    assert_eq!(candidates.len(), 1);
}

#[test]
fn blank_text_yields_nothing() {
    assert!(extract_candidates("").is_empty());
    assert!(extract_candidates(" \n \n").is_empty());
}
