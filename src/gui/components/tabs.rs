// src/gui/components/tabs.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;
use crate::gui::router;

/// Mode selector. Switching tabs only changes which form draws; every
/// mode keeps its own field values until the window closes.
pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let current = app.current_mode();
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        for form in router::all_forms() {
            let selected = form.kind() == current;
            ui.vertical(|ui| {
                let label = ui.selectable_label(
                    selected,
                    RichText::new(form.title()).strong(),
                );
                ui.weak(form.subtitle());
                if label.clicked() && !selected {
                    clicked = Some(form.kind());
                }
            });
        }
    });

    if let Some(mode) = clicked {
        logf!("UI: Tab switch {:?} -> {:?}", current, mode);
        app.select_mode(mode);
    }
}
