// src/gui/components/run_bar.rs
use eframe::egui::{self, Button, Color32, RichText};

use crate::gui::actions;
use crate::gui::app::{AnalysisStatus, App};

const ACCENT: Color32 = Color32::from_rgb(123, 50, 227);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.analysis == AnalysisStatus::Running;

    ui.horizontal(|ui| {
        let button = Button::new(
            RichText::new("Start Analysis")
                .color(Color32::WHITE)
                .strong(),
        )
        .fill(ACCENT);

        if ui.add_enabled(!running, button).clicked() {
            let ctx = ui.ctx().clone();
            actions::start_analysis(app, &ctx);
        }

        if running {
            ui.add(egui::widgets::Spinner::new());
            ui.label("Analyzing…");
        }

        let status = app.status.lock().unwrap().clone();
        ui.weak(format!("Status: {status}"));
    });
}
