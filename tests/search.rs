mod common;

use medscan::{
    catalog::MedicineRecord,
    matching::{normalize, ConfidenceBand, MatchConfig, MatchEngine, MatchType},
};

#[test]
fn exact_brand_query_returns_single_very_high_result() {
    let catalog = vec![common::paracetamol()];
    let engine = MatchEngine::default();
    let results = engine.search_by_query(&catalog, "paracetamol");
    assert_eq!(results.len(), 1);
    assert!(results[0].confidence_score >= 0.8);
    assert!(matches!(
        results[0].band(),
        ConfidenceBand::VeryHigh | ConfidenceBand::High
    ));
    assert_eq!(results[0].match_type, MatchType::Text);
    assert_eq!(results[0].matched_text, "paracetamol");
}

#[test]
fn typo_query_returns_low_confidence_result() {
    let catalog = vec![common::paracetamol()];
    let results = MatchEngine::default().search_by_query(&catalog, "paracetmol");
    assert_eq!(results.len(), 1);
    let score = results[0].confidence_score;
    assert!(score > 0.0 && score < 0.8);
    assert!(matches!(
        results[0].band(),
        ConfidenceBand::Low | ConfidenceBand::Medium
    ));
}

#[test]
fn nonexistent_query_returns_nothing() {
    let catalog = vec![common::paracetamol()];
    assert!(MatchEngine::default()
        .search_by_query(&catalog, "xyz-nonexistent")
        .is_empty());
}

#[test]
fn blank_query_returns_nothing() {
    let catalog = common::sample_catalog();
    let engine = MatchEngine::default();
    assert!(engine.search_by_query(&catalog, "").is_empty());
    assert!(engine.search_by_query(&catalog, "  !! ").is_empty());
}

#[test]
fn empty_catalog_returns_nothing() {
    let engine = MatchEngine::default();
    assert!(engine.search_by_query(&[], "paracetamol").is_empty());
    assert!(engine.search_by_ocr_text(&[], "Paracetamol\n500 mg").is_empty());
}

#[test]
fn query_is_normalised_before_scoring() {
    let catalog = common::sample_catalog();
    let results = MatchEngine::default().search_by_query(&catalog, "  BRUFEN!! ");
    assert_eq!(results[0].medicine.id, "3");
}

#[test]
fn results_are_capped_and_sorted() {
    let catalog: Vec<MedicineRecord> = (0..6)
        .map(|i| {
            MedicineRecord::new(
                i.to_string(),
                format!("Brand{i} Tabs"),
                "Generic",
                "10mg",
                "Maker",
            )
        })
        .collect();
    let engine = MatchEngine::default();
    let results = engine.search_by_query(&catalog, "tabs");
    assert_eq!(results.len(), 3);
    assert!(results
        .windows(2)
        .all(|w| w[0].confidence_score >= w[1].confidence_score));

    let wide = engine.with_max_results(10);
    assert_eq!(wide.search_by_query(&catalog, "tabs").len(), 6);
}

#[test]
fn equal_scores_order_by_brand_then_id() {
    let catalog = vec![
        MedicineRecord::new("b", "Zeta Tabs", "Generic", "10mg", "Maker"),
        MedicineRecord::new("z", "Alpha Tabs", "Generic", "10mg", "Maker"),
        MedicineRecord::new("a", "Alpha Tabs", "Generic", "10mg", "Maker"),
    ];
    let results = MatchEngine::default().search_by_query(&catalog, "tabs");
    let ids: Vec<&str> = results.iter().map(|r| r.medicine.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "z", "b"]);
}

#[test]
fn ocr_search_collapses_candidates_per_medicine() {
    let catalog = common::sample_catalog();
    let results = MatchEngine::default()
        .search_by_ocr_text(&catalog, "Amoxicillin\n250 mg\nXYZ Pharmaceuticals");

    let amoxicillin: Vec<_> = results.iter().filter(|r| r.medicine.id == "2").collect();
    assert_eq!(amoxicillin.len(), 1);
    assert!((amoxicillin[0].confidence_score - 1.0).abs() < 1e-12);
    assert_eq!(amoxicillin[0].match_type, MatchType::Ocr);
    assert_eq!(results[0].medicine.id, "2");

    let mut ids: Vec<&str> = results.iter().map(|r| r.medicine.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), results.len());
}

#[test]
fn ocr_search_tolerates_artifacts() {
    let catalog = common::sample_catalog();
    let results = MatchEngine::default().search_by_ocr_text(&catalog, "  ~~Brufen~~ \u{00ae}\n\n 400mg ");
    assert_eq!(results[0].medicine.id, "3");
}

#[test]
fn ocr_barcode_surfaces_record_without_name_match() {
    let catalog = vec![
        MedicineRecord::new("z1", "Zincovit", "Zinc", "50mg", "Apex").with_barcode("8901234567890"),
    ];
    let results =
        MatchEngine::default().search_by_ocr_text(&catalog, "batch no 42\n8901234567890");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_type, MatchType::Barcode);
    assert!((results[0].confidence_score - 0.95).abs() < 1e-12);
}

#[test]
fn barcode_lookup_is_exact() {
    let catalog = vec![
        common::paracetamol().with_barcode("8901234567890"),
        common::ibuprofen(),
    ];
    let engine = MatchEngine::default();
    let hit = engine.search_by_barcode(&catalog, " 8901234567890 ").unwrap();
    assert_eq!(hit.medicine.id, "1");
    assert_eq!(hit.confidence_score, 1.0);
    assert!(engine.is_high_confidence(&hit));
    assert!(engine.search_by_barcode(&catalog, "890123456789").is_none());
    assert!(engine.search_by_barcode(&catalog, "").is_none());
}

#[test]
fn high_confidence_threshold_is_configurable() {
    let catalog = vec![common::paracetamol()];
    let strict = MatchEngine::default();
    let lenient = MatchEngine::new(MatchConfig {
        high_confidence_threshold: 0.3,
        ..MatchConfig::default()
    });
    let typo = strict.search_by_query(&catalog, "paracetmol");
    assert!(!strict.is_high_confidence(&typo[0]));
    assert!(lenient.is_high_confidence(&typo[0]));
}

#[test]
fn confidence_bands_use_inclusive_lower_bounds() {
    assert_eq!(ConfidenceBand::from_score(1.0), ConfidenceBand::VeryHigh);
    assert_eq!(ConfidenceBand::from_score(0.9), ConfidenceBand::VeryHigh);
    assert_eq!(ConfidenceBand::from_score(0.89), ConfidenceBand::High);
    assert_eq!(ConfidenceBand::from_score(0.7), ConfidenceBand::High);
    assert_eq!(ConfidenceBand::from_score(0.5), ConfidenceBand::Medium);
    assert_eq!(ConfidenceBand::from_score(0.3), ConfidenceBand::Low);
    assert_eq!(ConfidenceBand::from_score(0.29), ConfidenceBand::VeryLow);
    assert_eq!(ConfidenceBand::from_score(0.0), ConfidenceBand::VeryLow);
    assert_eq!(ConfidenceBand::VeryHigh.to_string(), "Very High");
}

#[test]
fn engine_scores_single_records() {
    let engine = MatchEngine::default();
    let query = normalize("Ibuprofen");
    assert!((engine.score(&query, &common::ibuprofen()) - 1.0).abs() < 1e-12);
    assert_eq!(engine.score(&query, &common::amoxicillin()), 0.0);
}
