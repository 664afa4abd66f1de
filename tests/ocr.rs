use medscan::ocr::{clean_ocr_text, OcrOutput, PackagingHints, TextFragment};

#[test]
fn cleaning_keeps_lines_and_case() {
    let cleaned = clean_ocr_text("  Amoxicillin™  Caps \n\n|| 250 mg ||\n @@ \nXYZ   Pharma (Ltd.)");
    assert_eq!(cleaned, "Amoxicillin Caps\n250 mg\nXYZ Pharma (Ltd.)");
}

#[test]
fn hints_pick_first_barcode_strength_and_maker() {
    let text = "DOLO 650\nParacetamol Tablets IP 650 mg\nMicro Labs Ltd\nMRP 30.00\n8901234567890";
    let hints = PackagingHints::extract(text);
    assert_eq!(hints.barcode.as_deref(), Some("8901234567890"));
    assert_eq!(hints.strength.as_deref(), Some("650 mg"));
    assert_eq!(hints.manufacturer.as_deref(), Some("Micro Labs Ltd"));
    assert!(!hints.is_empty());
}

#[test]
fn short_digit_runs_are_not_barcodes() {
    let hints = PackagingHints::extract("Batch 1234567\nExp 12/2026");
    assert_eq!(hints.barcode, None);
    assert!(hints.is_empty());
}

#[test]
fn fragments_stand_in_for_missing_text() {
    let output = OcrOutput {
        text: String::new(),
        mean_confidence: Some(0.82),
        fragments: vec![
            TextFragment {
                text: "Crocin".into(),
                confidence: Some(0.9),
                bbox: None,
            },
            TextFragment {
                text: "  ".into(),
                confidence: None,
                bbox: None,
            },
            TextFragment {
                text: "500 mg".into(),
                confidence: Some(0.7),
                bbox: None,
            },
        ],
    };
    assert_eq!(output.full_text(), "Crocin\n500 mg");
    assert_eq!(OcrOutput::from_text("Crocin").full_text(), "Crocin");
}

#[test]
fn ocr_payload_parses_from_json() {
    let raw = r#"{"text": "", "fragments": [{"text": "Brufen", "bbox": {"x": 1, "y": 2, "width": 30, "height": 8}}]}"#;
    let output: OcrOutput = serde_json::from_str(raw).unwrap();
    assert_eq!(output.full_text(), "Brufen");
    assert_eq!(output.fragments[0].bbox.map(|b| b.width), Some(30));
}
