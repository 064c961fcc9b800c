// src/gui/components/error_banner.rs
use eframe::egui::{self, Color32};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if let Some(err) = &app.state.gui.error {
        ui.colored_label(Color32::from_rgb(220, 38, 38), format!("⚠ {err}"));
        ui.add_space(4.0);
    }
}
