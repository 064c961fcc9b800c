// src/audit/report.rs
use crate::config::consts::TESTS_TOTAL;

/// Headline numbers shown in the stat cards. Replaced wholesale per
/// completed run; no history is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuditSummary {
    /// 0–100
    pub overall_score: u8,
    /// Shown as "x/25"
    pub tests_passed: u8,
    pub critical_issues: u8,
    pub urls_analyzed: u32,
}

impl AuditSummary {
    pub fn tests_total(&self) -> u8 {
        TESTS_TOTAL
    }
}

impl Default for AuditSummary {
    // Values the cards show before the first audit has run.
    fn default() -> Self {
        Self {
            overall_score: 72,
            tests_passed: 18,
            critical_issues: 3,
            urls_analyzed: 1,
        }
    }
}

/// One labeled sub-score in the results grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricRecord {
    pub title: String,
    pub description: String,
    /// 0–100
    pub score: u8,
}

impl MetricRecord {
    pub fn new(title: &str, description: &str, score: u8) -> Self {
        Self { title: s!(title), description: s!(description), score }
    }
}

/// What a provider returns for one request. For bulk/sitemap runs the
/// summary covers the whole batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditReport {
    pub summary: AuditSummary,
    pub metrics: Vec<MetricRecord>,
}

/// The fixed set of findings the simulated provider reports, identical
/// every run regardless of mode or input.
pub fn canned_metrics() -> Vec<MetricRecord> {
    vec![
        MetricRecord::new("Title Tag", "Title length is optimal", 95),
        MetricRecord::new("Meta Description", "Description could be more descriptive", 75),
        MetricRecord::new("URL Structure", "URL is SEO friendly", 100),
        MetricRecord::new("Heading Tags", "H1 tag is missing", 60),
        MetricRecord::new("Image Alt Tags", "3 images missing alt tags", 70),
        MetricRecord::new("Content Length", "Content is thin (under 300 words)", 45),
        MetricRecord::new("Keyword Density", "Primary keyword density is optimal", 90),
        MetricRecord::new("Mobile Responsiveness", "Page is mobile friendly", 100),
        MetricRecord::new("Page Load Speed", "Page loads in under 3 seconds", 85),
        MetricRecord::new("SSL Certificate", "HTTPS is properly configured", 100),
    ]
}
