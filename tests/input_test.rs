//! Tests for fragment files and rendered output.

use std::fs;

use pdfoutline::render::{to_json, to_markdown};
use pdfoutline::{
    analyze_file, read_fragments, Error, HeadingLevel, JsonFormat, Outliner, ParseResult,
};
use tempfile::TempDir;

const REPORT: &str = r#"[
    {"text": "Field Survey Results", "page": 1, "font_size": 24.0, "bbox": [72, 90, 400, 114]},
    {"text": "Collected across three sites.", "page": 1, "font_size": 11.0, "order": 1},
    {"text": "Methods", "page": 2, "font_size": 15.0, "bold": true, "order": 2},
    {"text": "Samples were  taken weekly.", "page": 2, "font_size": 11.0, "order": 3},
    {"text": "Sampling Sites", "page": 2, "font_size": 11.0, "bold": true, "order": 4},
    {"text": "Each site was visited twice.", "page": 2, "font_size": 11.0, "order": 5}
]"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_read_fragments_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "report.json", REPORT);

    let fragments = read_fragments(&path).unwrap();
    assert_eq!(fragments.len(), 6);
    assert_eq!(fragments[0].order, 0);
    assert_eq!(fragments[0].bbox.x1, 400.0);
    assert!(!fragments[1].bold);
    assert!(fragments[1].bbox.is_empty());
    assert_eq!(fragments[3].text, "Samples were taken weekly.");
}

#[test]
fn test_analyze_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "report.json", REPORT);

    let result = analyze_file(&path).unwrap();
    assert_eq!(result.title, "Field Survey Results");
    assert_eq!(result.outline.len(), 2);
    assert_eq!(result.outline[0].level, HeadingLevel::H1);
    assert_eq!(result.outline[0].text, "Methods");
    assert_eq!(result.outline[1].level, HeadingLevel::H2);
    assert_eq!(result.outline[1].text, "Sampling Sites");
}

#[test]
fn test_invalid_files() {
    let dir = TempDir::new().unwrap();

    let malformed = write_file(&dir, "malformed.json", "[{\"text\": \"x\"");
    assert!(matches!(read_fragments(&malformed), Err(Error::Json(_))));

    let bad_page = write_file(
        &dir,
        "bad_page.json",
        r#"[{"text": "Intro", "page": 0, "font_size": 12.0}]"#,
    );
    match read_fragments(&bad_page) {
        Err(Error::InvalidFragment { index, .. }) => assert_eq!(index, 0),
        other => panic!("expected InvalidFragment, got {:?}", other),
    }

    let missing = dir.path().join("missing.json");
    assert!(matches!(read_fragments(&missing), Err(Error::Io(_))));
}

#[test]
fn test_json_output_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "report.json", REPORT);
    let result = analyze_file(&path).unwrap();

    let json = to_json(&result, JsonFormat::Pretty).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "Field Survey Results");
    assert_eq!(value["outline"][0]["level"], "H1");
    assert_eq!(value["outline"][0]["page"], 2);
    assert!(value["outline"][0].get("order").is_none());

    let parsed: ParseResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.title, result.title);
    assert_eq!(parsed.outline.len(), result.outline.len());
}

#[test]
fn test_outliner_markdown() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "report.json", REPORT);

    let markdown = Outliner::new().analyze_file(&path).unwrap().to_markdown();
    assert_eq!(
        markdown,
        "# Field Survey Results\n\n## Methods (p. 2)\n### Sampling Sites (p. 2)"
    );
    assert_eq!(to_markdown(&ParseResult::empty()), "");
}
