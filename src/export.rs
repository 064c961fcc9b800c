// src/export.rs
//
// Export Service boundary. Neither serializer exists yet; both entry
// points only record intent and report that back for the status line.
// The ExportOptions path plumbing is real so the buttons behave like the
// rest of the app while the writers are pending.

use crate::audit::AuditReport;
use crate::config::options::ExportOptions;

/// Ask for an export of the last completed report. Returns the status
/// line to show. `report` is None until a run has completed.
pub fn export_report(options: &ExportOptions, report: Option<&AuditReport>) -> String {
    let Some(report) = report else {
        logd!("Export: requested with no completed audit");
        return s!("Nothing to export (run an audit first)");
    };

    let target = options.out_path();
    logf!(
        "Export: {} → {} (stub; score={} metrics={})",
        options.format.label(),
        target.display(),
        report.summary.overall_score,
        report.metrics.len()
    );
    format!("{} export is not implemented yet", options.format.label())
}
