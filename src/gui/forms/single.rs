// src/gui/forms/single.rs
use eframe::egui;

use crate::audit::{AuditRequest, ValidationError};
use crate::config::options::{AnalysisDepth, AuditMode, Language};
use crate::config::state::AppState;

use super::{combo, Form, FormEvent};

pub struct SingleForm;
pub static FORM: SingleForm = SingleForm;

impl Form for SingleForm {
    fn kind(&self) -> AuditMode { AuditMode::Single }
    fn title(&self) -> &'static str { "Single URL" }
    fn subtitle(&self) -> &'static str { "Analyze one page" }

    fn draw(&self, ui: &mut egui::Ui, state: &mut AppState) -> FormEvent {
        ui.columns(2, |cols| {
            cols[0].label("Website URL");
            cols[0].add(
                egui::TextEdit::singleline(&mut state.gui.url)
                    .hint_text("https://example.com")
                    .desired_width(f32::INFINITY),
            );
            cols[1].label("Target Keywords");
            cols[1].add(
                egui::TextEdit::singleline(&mut state.gui.keywords)
                    .hint_text("keyword1, keyword2, keyword3")
                    .desired_width(f32::INFINITY),
            );
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            combo(
                ui,
                "analysis-depth",
                "Analysis Depth",
                &mut state.options.audit.depth,
                AnalysisDepth::ALL,
                AnalysisDepth::label,
            );
            ui.add_space(12.0);
            combo(
                ui,
                "language",
                "Language",
                &mut state.options.audit.language,
                Language::ALL,
                Language::label,
            );
        });

        FormEvent::None
    }

    fn validate(&self, state: &AppState) -> Result<(), ValidationError> {
        if state.gui.url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        Ok(())
    }

    fn request(&self, state: &AppState) -> AuditRequest {
        AuditRequest::Single {
            url: state.gui.url.clone(),
            keywords: state.gui.keywords.clone(),
            depth: state.options.audit.depth,
            language: state.options.audit.language,
        }
    }
}
