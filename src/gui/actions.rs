// src/gui/actions.rs
use std::path::Path;
use std::thread;

use eframe::egui;

use crate::audit::run_request;
use crate::export;
use crate::ingest;

use super::app::{App, FinishedRun};
use super::progress::GuiProgress;

/// Validate and, if accepted, hand the active form's request to a worker
/// thread. The worker deposits its outcome in the shared slot and pokes
/// the event loop; the next frame folds it in.
pub fn start_analysis(app: &mut App, ctx: &egui::Context) {
    if !app.try_begin_run() {
        return;
    }

    let request = app.current_form().request(&app.state);
    logf!(
        "Audit: Begin mode={:?} generation={} urls={:?}",
        app.current_mode(),
        app.run_generation,
        request.url_count()
    );

    let service = app.service.clone();
    let status = app.status.clone();
    let finished = app.finished.clone();
    let generation = app.run_generation;
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let result = run_request(service.as_ref(), &request, Some(&mut prog));
        *finished.lock().unwrap() = Some(FinishedRun { generation, result });
        ctx.request_repaint();
    });
}

/// Native file picker for the bulk CSV upload.
pub fn browse_csv(app: &mut App) {
    let mut dialog = rfd::FileDialog::new().add_filter("CSV files", &["csv"]);
    if !app.state.gui.last_browse_dir.is_empty() {
        dialog = dialog.set_directory(&app.state.gui.last_browse_dir);
    }

    let Some(path) = dialog.pick_file() else {
        logd!("Ingest: file dialog dismissed");
        return;
    };

    if let Some(dir) = path.parent() {
        app.state.gui.last_browse_dir = dir.to_string_lossy().into_owned();
    }

    ingest_csv(app, &path);
}

/// Read the picked file into the bulk textarea. Runs on the UI thread;
/// by the time validation can fire, the contents are already in place.
pub fn ingest_csv(app: &mut App, path: &Path) {
    match ingest::read_urls_file(path) {
        Ok(file) => {
            logf!("Ingest: loaded {} ({} bytes)", file.name, file.text.len());
            app.status(format!("Loaded {}", file.name));
            app.state.gui.uploaded_file_name = file.name;
            app.state.gui.bulk_urls = file.text;
        }
        Err(e) => {
            loge!("Ingest: {}", e);
            app.state.gui.error = Some(e.to_string());
        }
    }
}

/// Export button. Applies a hand-edited output path first, then calls
/// the (stub) exporter and surfaces its message in the status line.
pub fn export(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app
            .state
            .options
            .export
            .out_path()
            .to_string_lossy()
            .into_owned();
        app.out_path_dirty = false;
        logf!("Export: output path set to {}", app.out_path_text);
    }

    let msg = export::export_report(&app.state.options.export, app.report.as_ref());
    app.status(msg);
}
