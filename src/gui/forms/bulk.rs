// src/gui/forms/bulk.rs
use eframe::egui;

use crate::audit::{AuditRequest, ValidationError};
use crate::config::options::{AnalysisType, AuditMode};
use crate::config::state::AppState;

use super::{combo, Form, FormEvent};

pub struct BulkForm;
pub static FORM: BulkForm = BulkForm;

impl Form for BulkForm {
    fn kind(&self) -> AuditMode { AuditMode::Bulk }
    fn title(&self) -> &'static str { "Bulk Analysis" }
    fn subtitle(&self) -> &'static str { "Multiple URLs" }

    fn draw(&self, ui: &mut egui::Ui, state: &mut AppState) -> FormEvent {
        let mut event = FormEvent::None;

        ui.label("Upload CSV File");
        ui.horizontal(|ui| {
            if ui.button("Choose File…").clicked() {
                event = FormEvent::BrowseCsv;
            }
            if !state.gui.uploaded_file_name.is_empty() {
                ui.weak(&state.gui.uploaded_file_name);
            }
        });

        ui.add_space(6.0);
        ui.label("Or Enter URLs (one per line)");
        ui.add(
            egui::TextEdit::multiline(&mut state.gui.bulk_urls)
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .hint_text(
                    "https://example.com/page1\nhttps://example.com/page2\nhttps://example.com/page3",
                ),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            combo(
                ui,
                "analysis-type",
                "Analysis Type",
                &mut state.options.audit.analysis_type,
                AnalysisType::ALL,
                AnalysisType::label,
            );
        });

        event
    }

    // A recorded upload counts even if the textarea is empty; ingestion
    // fills the textarea synchronously, so both normally move together.
    fn validate(&self, state: &AppState) -> Result<(), ValidationError> {
        if state.gui.bulk_urls.is_empty() && state.gui.uploaded_file_name.is_empty() {
            return Err(ValidationError::MissingBulkInput);
        }
        Ok(())
    }

    fn request(&self, state: &AppState) -> AuditRequest {
        let urls: Vec<String> = state
            .gui
            .bulk_urls
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| s!(l))
            .collect();

        AuditRequest::Bulk {
            urls,
            analysis_type: state.options.audit.analysis_type,
        }
    }
}
