//! Integration tests for settings files and layout document loading.

use std::fs;

use pdfoutline::config::{DEFAULT_MAX_HEADING_LENGTH, DEFAULT_MIN_HEADING_CONFIDENCE};
use pdfoutline::{extract_result, load_document, Error, Language, Settings};

const LAYOUT: &str = r##"{
    "filename": "guide.pdf",
    "filepath": "/docs/guide.pdf",
    "language": "english",
    "page_dimensions": [[612, 792], [612, 792]],
    "text_blocks": [
        {"text": "Getting Started", "page": 1, "x": 72, "y": 72, "width": 300, "height": 24,
         "font_info": {"family": "Helvetica-Bold", "size": 24, "flags": 16, "color": "#000000"}},
        {"text": "Install the package first.", "page": 1, "x": 72, "y": 140, "width": 450, "height": 12,
         "font_info": {"family": "Helvetica", "size": 11}},
        {"text": "Configuration", "page": 2, "x": 72, "y": 72, "width": 300, "height": 24,
         "font_info": {"family": "Helvetica-Bold", "size": 24}},
        {"text": "Edit the settings file.", "page": 2, "x": 72, "y": 140, "width": 450, "height": 12,
         "font_info": {"family": "Helvetica", "size": 11}}
    ]
}"##;

#[test]
fn test_load_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"MAX_HEADING_LENGTH": 80, "MIN_HEADING_CONFIDENCE": 0.55, "EMBEDDING_MODEL": "ignored"}"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.max_heading_length, 80);
    assert!((settings.min_heading_confidence - 0.55).abs() < 1e-6);
    assert!(!settings.skip_headers_footers);
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.json")).unwrap();
    assert_eq!(settings.max_heading_length, DEFAULT_MAX_HEADING_LENGTH);
    assert_eq!(settings.min_heading_confidence, DEFAULT_MIN_HEADING_CONFIDENCE);
}

#[test]
fn test_invalid_settings_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"MIN_HEADING_CONFIDENCE": 1.5}"#).unwrap();

    assert!(matches!(Settings::load(&path), Err(Error::InvalidConfig(_))));
    assert!(matches!(
        Settings::load(dir.path().join("absent.json")),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_load_layout_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.json");
    fs::write(&path, LAYOUT).unwrap();

    let doc = load_document(&path).unwrap();
    assert_eq!(doc.filename(), "guide.pdf");
    assert_eq!(doc.filepath(), "/docs/guide.pdf");
    assert_eq!(doc.language(), Language::English);
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.text_blocks().len(), 4);
    assert!(doc.text_blocks()[0].font_info.is_bold());
    assert_eq!(doc.primary_font(), "Helvetica-Bold");

    let result = extract_result(&doc, &Settings::default());
    let texts: Vec<&str> = result.outline.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Getting Started", "Configuration"]);
    assert!(result.outline.iter().all(|e| e.level == "H1"));
}

#[test]
fn test_unknown_language_falls_back_to_english() {
    let json = LAYOUT.replace("\"english\"", "\"klingon\"");
    let doc = pdfoutline::parse_document(&json).unwrap();
    assert_eq!(doc.language(), Language::English);
}
