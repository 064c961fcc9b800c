// src/gui/forms/mod.rs
use eframe::egui;

use crate::audit::{AuditRequest, ValidationError};
use crate::config::options::AuditMode;
use crate::config::state::AppState;

pub mod bulk;
pub mod single;
pub mod sitemap;

/// What a form body wants the app to do this frame, beyond plain field
/// edits (those go straight into AppState).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEvent {
    None,
    /// Bulk tab: open the CSV picker.
    BrowseCsv,
}

/// One analysis input form (tab). Drawing mutates only AppState; the
/// validation/request pair is the pre-flight contract for the trigger.
pub trait Form: Send + Sync + 'static {
    fn kind(&self) -> AuditMode;
    fn title(&self) -> &'static str;
    fn subtitle(&self) -> &'static str;

    /// Render the form body.
    fn draw(&self, ui: &mut egui::Ui, state: &mut AppState) -> FormEvent;

    /// Pre-flight check. Failing leaves everything but the error
    /// message untouched.
    fn validate(&self, state: &AppState) -> Result<(), ValidationError>;

    /// Build the audit request. Only called after validate() passed.
    fn request(&self, state: &AppState) -> AuditRequest;
}

/// Shared label + dropdown row for the option selects.
pub(crate) fn combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    all: &'static [T],
    label_of: fn(&T) -> &'static str,
) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(label_of(value))
        .show_ui(ui, |ui| {
            for v in all {
                ui.selectable_value(value, *v, label_of(v));
            }
        });
}
