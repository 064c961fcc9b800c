// src/audit/mod.rs
//
// The Audit Service boundary. The GUI builds an AuditRequest from the
// active form and hands it to whichever provider was injected at startup;
// today that is the SimulatedAudit stand-in, later a real crawler behind
// the same trait.

pub mod error;
pub mod report;
pub mod score;
pub mod simulated;

pub use error::{AuditError, ValidationError};
pub use report::{AuditReport, AuditSummary, MetricRecord};
pub use score::ScoreBand;
pub use simulated::SimulatedAudit;

use crate::config::options::{
    AnalysisDepth, AnalysisType, CrawlDepth, CrawlSpeed, Language,
};
use crate::progress::Progress;

/// One audit attempt, fully described. Built by the active form after
/// pre-flight validation has passed.
#[derive(Clone, Debug)]
pub enum AuditRequest {
    Single {
        url: String,
        keywords: String,
        depth: AnalysisDepth,
        language: Language,
    },
    Bulk {
        urls: Vec<String>,
        analysis_type: AnalysisType,
    },
    Sitemap {
        sitemap_url: String,
        crawl_depth: CrawlDepth,
        crawl_speed: CrawlSpeed,
    },
}

impl AuditRequest {
    /// How many URLs the request names up front (unknown for sitemaps
    /// until crawled).
    pub fn url_count(&self) -> Option<usize> {
        match self {
            AuditRequest::Single { .. } => Some(1),
            AuditRequest::Bulk { urls, .. } => Some(urls.len()),
            AuditRequest::Sitemap { .. } => None,
        }
    }
}

/// The collaborator that computes audit findings. Implementations must be
/// callable from a worker thread.
pub trait AuditService: Send + Sync {
    fn audit_single(
        &self,
        url: &str,
        keywords: &str,
        depth: AnalysisDepth,
        language: Language,
        progress: Option<&mut dyn Progress>,
    ) -> Result<AuditReport, AuditError>;

    fn audit_bulk(
        &self,
        urls: &[String],
        analysis_type: AnalysisType,
        progress: Option<&mut dyn Progress>,
    ) -> Result<AuditReport, AuditError>;

    fn audit_sitemap(
        &self,
        sitemap_url: &str,
        crawl_depth: CrawlDepth,
        crawl_speed: CrawlSpeed,
        progress: Option<&mut dyn Progress>,
    ) -> Result<AuditReport, AuditError>;
}

/// Dispatch a request to the matching service method.
pub fn run_request(
    service: &dyn AuditService,
    request: &AuditRequest,
    progress: Option<&mut dyn Progress>,
) -> Result<AuditReport, AuditError> {
    match request {
        AuditRequest::Single { url, keywords, depth, language } => {
            service.audit_single(url, keywords, *depth, *language, progress)
        }
        AuditRequest::Bulk { urls, analysis_type } => {
            service.audit_bulk(urls, *analysis_type, progress)
        }
        AuditRequest::Sitemap { sitemap_url, crawl_depth, crawl_speed } => {
            service.audit_sitemap(sitemap_url, *crawl_depth, *crawl_speed, progress)
        }
    }
}
