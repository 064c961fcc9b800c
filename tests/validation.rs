// tests/validation.rs
//
// Pre-flight validation per mode: exact banner text, no state damage.
//
use std::sync::Arc;

use seo_audit::audit::SimulatedAudit;
use seo_audit::config::options::AuditMode;
use seo_audit::gui::app::{AnalysisStatus, App};

fn app() -> App {
    App::with_service(Arc::new(SimulatedAudit::with_delay_ms(0)))
}

#[test]
fn single_mode_empty_url_is_rejected() {
    let mut app = app();
    assert_eq!(app.current_mode(), AuditMode::Single);

    assert!(!app.try_begin_run());
    assert_eq!(app.state.gui.error.as_deref(), Some("Please enter a URL to analyze"));
    assert_eq!(app.analysis, AnalysisStatus::Idle);
    assert!(app.report.is_none());
    assert_eq!(app.run_generation, 0);
}

#[test]
fn bulk_mode_empty_inputs_are_rejected() {
    let mut app = app();
    app.select_mode(AuditMode::Bulk);

    assert!(!app.try_begin_run());
    assert_eq!(
        app.state.gui.error.as_deref(),
        Some("Please enter URLs or upload a CSV file")
    );
    assert_eq!(app.analysis, AnalysisStatus::Idle);
}

#[test]
fn sitemap_mode_empty_url_is_rejected() {
    let mut app = app();
    app.select_mode(AuditMode::Sitemap);

    assert!(!app.try_begin_run());
    assert_eq!(app.state.gui.error.as_deref(), Some("Please enter a sitemap URL"));
}

#[test]
fn bulk_mode_recorded_upload_alone_passes() {
    let mut app = app();
    app.select_mode(AuditMode::Bulk);
    app.state.gui.uploaded_file_name = "urls.csv".into();
    assert!(app.state.gui.bulk_urls.is_empty());

    assert!(app.try_begin_run());
    assert_eq!(app.analysis, AnalysisStatus::Running);
    assert!(app.state.gui.error.is_none());
}

#[test]
fn bulk_mode_pasted_urls_alone_pass() {
    let mut app = app();
    app.select_mode(AuditMode::Bulk);
    app.state.gui.bulk_urls = "https://example.com/a\nhttps://example.com/b".into();

    assert!(app.try_begin_run());
}

#[test]
fn error_clears_when_a_valid_trigger_follows() {
    let mut app = app();
    assert!(!app.try_begin_run());
    assert!(app.state.gui.error.is_some());

    app.state.gui.url = "https://example.com".into();
    assert!(app.try_begin_run());
    assert!(app.state.gui.error.is_none());
}

#[test]
fn trigger_is_refused_while_a_run_is_active() {
    let mut app = app();
    app.state.gui.url = "https://example.com".into();

    assert!(app.try_begin_run());
    let generation = app.run_generation;

    assert!(!app.try_begin_run());
    assert_eq!(app.run_generation, generation);
    assert_eq!(app.analysis, AnalysisStatus::Running);
}
