// tests/simulated_audit.rs
//
// The stand-in provider: randomized headline ranges, the fixed metric
// list, and the run lifecycle folded through App.
//
use std::sync::Arc;

use seo_audit::audit::{
    run_request, AuditError, AuditRequest, AuditService, SimulatedAudit,
};
use seo_audit::config::options::{
    AnalysisDepth, AnalysisType, CrawlDepth, CrawlSpeed, Language,
};
use seo_audit::gui::app::{AnalysisStatus, App, FinishedRun};
use seo_audit::progress::NullProgress;

fn provider() -> SimulatedAudit {
    SimulatedAudit::with_delay_ms(0)
}

#[test]
fn single_report_stays_in_advertised_ranges() {
    let report = provider()
        .audit_single(
            "https://example.com",
            "seo, audit",
            AnalysisDepth::default(),
            Language::default(),
            None,
        )
        .unwrap();

    let s = report.summary;
    assert!((70..=99).contains(&s.overall_score));
    assert!((20..=24).contains(&s.tests_passed));
    assert!((1..=3).contains(&s.critical_issues));
    assert_eq!(s.urls_analyzed, 1);
    assert_eq!(s.tests_total(), 25);
}

#[test]
fn single_report_carries_the_ten_fixed_metrics() {
    let report = provider()
        .audit_single(
            "https://example.com",
            "",
            AnalysisDepth::default(),
            Language::default(),
            None,
        )
        .unwrap();

    assert_eq!(report.metrics.len(), 10);
    assert_eq!(report.metrics[0].title, "Title Tag");
    assert_eq!(report.metrics[0].score, 95);
    assert_eq!(report.metrics[9].title, "SSL Certificate");
    assert_eq!(report.metrics[9].score, 100);
}

#[test]
fn metrics_are_identical_across_runs() {
    let p = provider();
    let a = p
        .audit_single("https://a.example", "", AnalysisDepth::default(), Language::default(), None)
        .unwrap();
    let b = p
        .audit_single("https://b.example", "kw", AnalysisDepth::Advanced, Language::French, None)
        .unwrap();
    assert_eq!(a.metrics, b.metrics);
}

#[test]
fn bulk_and_sitemap_report_a_batch() {
    let p = provider();

    let bulk = p
        .audit_bulk(&["https://a".into(), "https://b".into()], AnalysisType::default(), None)
        .unwrap();
    assert!((2..=11).contains(&bulk.summary.urls_analyzed));

    let sitemap = p
        .audit_sitemap(
            "https://example.com/sitemap.xml",
            CrawlDepth::default(),
            CrawlSpeed::default(),
            None,
        )
        .unwrap();
    assert!((2..=11).contains(&sitemap.summary.urls_analyzed));
}

#[test]
fn run_request_dispatches_to_the_matching_method() {
    let p = provider();
    let request = AuditRequest::Single {
        url: "https://example.com".into(),
        keywords: String::new(),
        depth: AnalysisDepth::default(),
        language: Language::default(),
    };

    let mut sink = NullProgress;
    let report = run_request(&p, &request, Some(&mut sink)).unwrap();
    assert_eq!(report.summary.urls_analyzed, 1);
    assert_eq!(request.url_count(), Some(1));
}

#[test]
fn completed_run_replaces_the_report() {
    let mut app = App::with_service(Arc::new(provider()));
    app.state.gui.url = "https://example.com".into();

    assert!(app.try_begin_run());
    let report = provider()
        .audit_single("https://example.com", "", AnalysisDepth::default(), Language::default(), None)
        .unwrap();

    app.apply_run_outcome(FinishedRun {
        generation: app.run_generation,
        result: Ok(report.clone()),
    });

    assert_eq!(app.analysis, AnalysisStatus::Complete);
    assert_eq!(app.report, Some(report));
}

#[test]
fn stale_generation_is_discarded() {
    let mut app = App::with_service(Arc::new(provider()));
    app.state.gui.url = "https://example.com".into();
    assert!(app.try_begin_run());

    let report = provider()
        .audit_single("https://example.com", "", AnalysisDepth::default(), Language::default(), None)
        .unwrap();

    app.apply_run_outcome(FinishedRun {
        generation: app.run_generation - 1,
        result: Ok(report),
    });

    // a stale outcome changes nothing
    assert_eq!(app.analysis, AnalysisStatus::Running);
    assert!(app.report.is_none());
}

#[test]
fn provider_failure_reverts_to_idle_with_error() {
    let mut app = App::with_service(Arc::new(provider()));
    app.state.gui.url = "https://example.com".into();
    assert!(app.try_begin_run());

    app.apply_run_outcome(FinishedRun {
        generation: app.run_generation,
        result: Err(AuditError::Service("boom".into())),
    });

    assert_eq!(app.analysis, AnalysisStatus::Idle);
    assert_eq!(app.state.gui.error.as_deref(), Some("Audit failed: boom"));
    assert!(app.report.is_none());
}
