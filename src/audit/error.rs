// src/audit/error.rs
use thiserror::Error;

/// Pre-flight input validation failures. The display strings are exactly
/// what the inline banner shows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a URL to analyze")]
    MissingUrl,
    #[error("Please enter URLs or upload a CSV file")]
    MissingBulkInput,
    #[error("Please enter a sitemap URL")]
    MissingSitemapUrl,
}

/// Failure of the audit service itself. The simulated provider never
/// produces one; real providers will.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Audit failed: {0}")]
    Service(String),
}
