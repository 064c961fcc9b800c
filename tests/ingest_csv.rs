// tests/ingest_csv.rs
//
// CSV upload: extension gate, verbatim text, and how a rejected or
// repeated pick lands in app state.
//
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use seo_audit::audit::SimulatedAudit;
use seo_audit::config::options::AuditMode;
use seo_audit::gui::actions;
use seo_audit::gui::app::App;
use seo_audit::ingest::{self, IngestError};

fn write_file(dir: &tempfile::TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn app() -> App {
    let mut app = App::with_service(Arc::new(SimulatedAudit::with_delay_ms(0)));
    app.select_mode(AuditMode::Bulk);
    app
}

#[test]
fn csv_file_is_read_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let text = "https://example.com/a\nhttps://example.com/b\n";
    let path = write_file(&dir, "urls.csv", text);

    let file = ingest::read_urls_file(&path).unwrap();
    assert_eq!(file.name, "urls.csv");
    assert_eq!(file.text, text);
}

#[test]
fn extension_gate_is_case_insensitive() {
    assert!(ingest::is_csv_name("urls.csv"));
    assert!(ingest::is_csv_name("URLS.CSV"));
    assert!(ingest::is_csv_name("Urls.Csv"));
    // a bare dotfile named .csv still counts
    assert!(ingest::is_csv_name(".csv"));
    assert!(!ingest::is_csv_name("urls.txt"));
    assert!(!ingest::is_csv_name("csv"));
    assert!(!ingest::is_csv_name(""));
}

#[test]
fn non_csv_is_rejected_with_the_banner_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "urls.txt", "https://example.com\n");

    let err = ingest::read_urls_file(&path).unwrap_err();
    assert!(matches!(err, IngestError::NotCsv));
    assert_eq!(err.to_string(), "Please upload a CSV file");
}

#[test]
fn accepted_pick_fills_name_and_textarea() {
    let dir = tempfile::tempdir().unwrap();
    let text = "https://example.com/a\nhttps://example.com/b";
    let path = write_file(&dir, "urls.csv", text);

    let mut app = app();
    actions::ingest_csv(&mut app, &path);

    assert_eq!(app.state.gui.uploaded_file_name, "urls.csv");
    assert_eq!(app.state.gui.bulk_urls, text);
    assert!(app.state.gui.error.is_none());
}

#[test]
fn rejected_pick_sets_error_and_leaves_fields_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "urls.txt", "https://example.com\n");

    let mut app = app();
    actions::ingest_csv(&mut app, &path);

    assert_eq!(app.state.gui.error.as_deref(), Some("Please upload a CSV file"));
    assert!(app.state.gui.uploaded_file_name.is_empty());
    assert!(app.state.gui.bulk_urls.is_empty());
}

#[test]
fn second_pick_replaces_the_first() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(&dir, "first.csv", "https://example.com/1\n");
    let second = write_file(&dir, "second.csv", "https://example.com/2\n");

    let mut app = app();
    actions::ingest_csv(&mut app, &first);
    actions::ingest_csv(&mut app, &second);

    assert_eq!(app.state.gui.uploaded_file_name, "second.csv");
    assert_eq!(app.state.gui.bulk_urls, "https://example.com/2\n");
}
