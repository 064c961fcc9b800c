// src/gui/components/metrics_grid.rs
use eframe::egui::{self, Color32, ProgressBar, RichText};
use egui_extras::{Column, TableBuilder};

use crate::audit::ScoreBand;
use crate::gui::app::App;

fn text_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::Good => Color32::from_rgb(22, 163, 74),
        ScoreBand::Warning => Color32::from_rgb(202, 138, 4),
        ScoreBand::Critical => Color32::from_rgb(220, 38, 38),
    }
}

fn fill_color(band: ScoreBand) -> Color32 {
    match band {
        ScoreBand::Good => Color32::from_rgb(34, 197, 94),
        ScoreBand::Warning => Color32::from_rgb(234, 179, 8),
        ScoreBand::Critical => Color32::from_rgb(239, 68, 68),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let metrics = app.metrics();
    if metrics.is_empty() {
        return;
    }

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Metric Scores").strong());
        ui.add_space(4.0);

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(140.0))
            .column(Column::remainder())
            .column(Column::auto().at_least(48.0))
            .column(Column::exact(120.0))
            .header(20.0, |mut header| {
                header.col(|ui| { ui.strong("Metric"); });
                header.col(|ui| { ui.strong("Finding"); });
                header.col(|ui| { ui.strong("Score"); });
                header.col(|_ui| {});
            })
            .body(|body| {
                body.rows(22.0, metrics.len(), |mut row| {
                    let m = &metrics[row.index()];
                    let band = ScoreBand::classify(m.score);
                    row.col(|ui| { ui.label(&m.title); });
                    row.col(|ui| { ui.weak(&m.description); });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!("{}", m.score))
                                .color(text_color(band))
                                .strong(),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            ProgressBar::new(m.score as f32 / 100.0)
                                .fill(fill_color(band))
                                .desired_height(8.0),
                        );
                    });
                });
            });
    });
}
