// tests/app_state.rs
//
// View-state defaults and the invariants the layout counts on.
//
use std::sync::Arc;

use seo_audit::audit::SimulatedAudit;
use seo_audit::config::options::AuditMode;
use seo_audit::config::state::GuiState;
use seo_audit::gui::app::{AnalysisStatus, App};
use seo_audit::gui::router;

fn app() -> App {
    App::with_service(Arc::new(SimulatedAudit::with_delay_ms(0)))
}

#[test]
fn initial_state() {
    let app = app();
    assert_eq!(app.analysis, AnalysisStatus::Idle);
    assert_eq!(app.current_mode(), AuditMode::Single);
    assert!(app.report.is_none());
    assert!(app.state.gui.error.is_none());
    assert!(app.state.gui.expanded_technical);
    assert!(!app.state.gui.expanded_recommendations);
}

#[test]
fn summary_defaults_before_the_first_run() {
    let app = app();
    let s = app.summary();
    assert_eq!(s.overall_score, 72);
    assert_eq!(s.tests_passed, 18);
    assert_eq!(s.critical_issues, 3);
    assert_eq!(s.urls_analyzed, 1);
    assert!(app.metrics().is_empty());
}

#[test]
fn panel_flags_are_independent() {
    let mut gui = GuiState::default();

    gui.expanded_recommendations = !gui.expanded_recommendations;
    assert!(gui.expanded_technical);
    assert!(gui.expanded_recommendations);

    gui.expanded_recommendations = !gui.expanded_recommendations;
    assert!(gui.expanded_technical);
    assert!(!gui.expanded_recommendations);
}

#[test]
fn mode_switch_preserves_other_modes_fields() {
    let mut app = app();
    app.state.gui.url = "https://example.com".into();
    app.state.gui.keywords = "seo".into();

    app.select_mode(AuditMode::Bulk);
    app.state.gui.bulk_urls = "https://example.com/a".into();

    app.select_mode(AuditMode::Sitemap);
    app.select_mode(AuditMode::Single);

    assert_eq!(app.state.gui.url, "https://example.com");
    assert_eq!(app.state.gui.keywords, "seo");
    assert_eq!(app.state.gui.bulk_urls, "https://example.com/a");
}

#[test]
fn router_covers_all_three_modes_in_order() {
    let forms = router::all_forms();
    assert_eq!(forms.len(), 3);
    assert_eq!(forms[0].kind(), AuditMode::Single);
    assert_eq!(forms[1].kind(), AuditMode::Bulk);
    assert_eq!(forms[2].kind(), AuditMode::Sitemap);

    for mode in [AuditMode::Single, AuditMode::Bulk, AuditMode::Sitemap] {
        assert_eq!(router::form_for(mode).kind(), mode);
        assert_eq!(forms[router::index_of(mode)].kind(), mode);
    }
}
