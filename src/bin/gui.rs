// src/bin/gui.rs
#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

use eframe::egui;

use seo_audit::config::state::GuiState;
use seo_audit::gui;

fn main() {
    let win = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([win.window_w as f32, win.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
