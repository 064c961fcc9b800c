// src/gui/components/export_bar.rs
use eframe::egui::{self, TextEdit};

use crate::config::options::ExportFormat;
use crate::gui::actions;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label("Format:");
            let before = app.state.options.export.format;
            for format in [ExportFormat::Csv, ExportFormat::Pdf] {
                ui.selectable_value(
                    &mut app.state.options.export.format,
                    format,
                    format.label(),
                );
            }
            let after = app.state.options.export.format;
            if after != before {
                logf!("Export: format {:?} -> {:?}", before, after);
                // keep the suggested path in step unless the user edited it
                if !app.out_path_dirty {
                    app.out_path_text = app
                        .state
                        .options
                        .export
                        .out_path()
                        .to_string_lossy()
                        .into_owned();
                }
            }

            ui.separator();
            ui.label("Output:");
            let edit = ui.add(
                TextEdit::singleline(&mut app.out_path_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(260.0),
            );
            if edit.changed() {
                app.out_path_dirty = true;
                logd!("Export: output path edited");
            }

            if ui.button("Export").clicked() {
                actions::export(app);
            }
        });
    });
}
