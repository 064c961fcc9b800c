// src/gui/components/summary_cards.rs
use eframe::egui::{self, Color32, ProgressBar, RichText};

use crate::gui::app::App;

const ACCENT: Color32 = Color32::from_rgb(123, 50, 227);

fn card(ui: &mut egui::Ui, value: String, caption: &str, bar: Option<f32>) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical(|ui| {
            ui.label(RichText::new(value).size(26.0).strong());
            ui.weak(caption);
            if let Some(frac) = bar {
                ui.add(ProgressBar::new(frac).fill(ACCENT).desired_height(6.0));
            }
        });
    });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let summary = app.summary();

    ui.columns(4, |cols| {
        card(
            &mut cols[0],
            format!("{}%", summary.overall_score),
            "Overall Score",
            Some(summary.overall_score as f32 / 100.0),
        );
        card(
            &mut cols[1],
            format!("{}/{}", summary.tests_passed, summary.tests_total()),
            "Tests Passed",
            Some(summary.tests_passed as f32 / summary.tests_total() as f32),
        );
        card(
            &mut cols[2],
            format!("{}", summary.critical_issues),
            "Critical Issues",
            None,
        );
        card(
            &mut cols[3],
            format!("{}", summary.urls_analyzed),
            "URLs Analyzed",
            None,
        );
    });
}
