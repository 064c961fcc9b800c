// src/audit/simulated.rs
//
// Stand-in provider: waits a fixed delay, then reports randomized
// headline numbers and the canned metric list. No network, no parsing.
// Kept behind the AuditService trait so the GUI never knows whether
// results are simulated or real.

use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::config::consts::*;
use crate::config::options::{
    AnalysisDepth, AnalysisType, CrawlDepth, CrawlSpeed, Language,
};
use crate::progress::Progress;

use super::report::{canned_metrics, AuditReport, AuditSummary};
use super::{AuditError, AuditService};

pub struct SimulatedAudit {
    delay: Duration,
}

impl SimulatedAudit {
    pub fn new() -> Self {
        Self::with_delay_ms(ANALYSIS_DELAY_MS)
    }

    /// Tests pass 0 here; the GUI uses the default.
    pub fn with_delay_ms(ms: u64) -> Self {
        Self { delay: Duration::from_millis(ms) }
    }

    fn simulate(
        &self,
        urls_analyzed: u32,
        mut progress: Option<&mut dyn Progress>,
    ) -> AuditReport {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(urls_analyzed as usize);
            p.log("Analyzing…");
        }

        thread::sleep(self.delay);

        if let Some(p) = progress.as_deref_mut() {
            for i in 0..urls_analyzed as usize {
                p.item_done(i);
            }
        }

        let mut rng = rand::thread_rng();
        let summary = AuditSummary {
            overall_score: rng.gen_range(OVERALL_SCORE_MIN..=OVERALL_SCORE_MAX),
            tests_passed: rng.gen_range(TESTS_PASSED_MIN..=TESTS_PASSED_MAX),
            critical_issues: rng.gen_range(CRITICAL_ISSUES_MIN..=CRITICAL_ISSUES_MAX),
            urls_analyzed,
        };

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        AuditReport { summary, metrics: canned_metrics() }
    }

    /// Batch size for bulk/sitemap runs. The stand-in draws it rather
    /// than crawling anything.
    fn batch_size(&self) -> u32 {
        rand::thread_rng().gen_range(BATCH_URLS_MIN..=BATCH_URLS_MAX)
    }
}

impl Default for SimulatedAudit {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditService for SimulatedAudit {
    fn audit_single(
        &self,
        url: &str,
        _keywords: &str,
        depth: AnalysisDepth,
        _language: Language,
        progress: Option<&mut dyn Progress>,
    ) -> Result<AuditReport, AuditError> {
        logf!("Audit: single url={} depth={:?}", url, depth);
        Ok(self.simulate(1, progress))
    }

    fn audit_bulk(
        &self,
        urls: &[String],
        analysis_type: AnalysisType,
        progress: Option<&mut dyn Progress>,
    ) -> Result<AuditReport, AuditError> {
        logf!("Audit: bulk urls={} type={:?}", urls.len(), analysis_type);
        Ok(self.simulate(self.batch_size(), progress))
    }

    fn audit_sitemap(
        &self,
        sitemap_url: &str,
        crawl_depth: CrawlDepth,
        crawl_speed: CrawlSpeed,
        progress: Option<&mut dyn Progress>,
    ) -> Result<AuditReport, AuditError> {
        logf!(
            "Audit: sitemap url={} depth={:?} speed={:?}",
            sitemap_url, crawl_depth, crawl_speed
        );
        Ok(self.simulate(self.batch_size(), progress))
    }
}
