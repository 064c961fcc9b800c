// src/gui/app.rs
use std::error::Error;
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::audit::{
    AuditError, AuditReport, AuditService, AuditSummary, MetricRecord, SimulatedAudit,
};
use crate::config::options::AuditMode;
use crate::config::state::AppState;

use super::components;
use super::forms::{Form, FormEvent};
use super::router;
use super::actions;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "SEO On-Page Audit",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

/// Lifecycle of one audit attempt. Monotonic per run: Idle → Running →
/// Complete. A new trigger restarts at Running; a provider failure drops
/// back to Idle with the error shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Running,
    Complete,
}

/// What a worker thread deposits when its run resolves. The generation
/// token lets the UI discard results of a superseded run instead of
/// letting whichever resolves last win.
#[derive(Debug)]
pub struct FinishedRun {
    pub generation: u64,
    pub result: Result<AuditReport, AuditError>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// The injected results provider (simulated today).
    pub service: Arc<dyn AuditService>,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    pub analysis: AnalysisStatus,

    /// Last completed report; None until the first run finishes.
    pub report: Option<AuditReport>,

    /// Bumped on every accepted trigger; see FinishedRun.
    pub run_generation: u64,
    pub finished: Arc<Mutex<Option<FinishedRun>>>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_service(Arc::new(SimulatedAudit::new()))
    }

    pub fn with_service(service: Arc<dyn AuditService>) -> Self {
        let state = AppState::default();
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: default mode={:?}", state.options.audit.mode);

        Self {
            state,
            service,
            status: Arc::new(Mutex::new(s!("Idle"))),
            analysis: AnalysisStatus::default(),
            report: None,
            run_generation: 0,
            finished: Arc::new(Mutex::new(None)),
            out_path_text,
            out_path_dirty: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_form(&self) -> &'static dyn Form {
        router::all_forms()[self.state.gui.current_form_index]
    }

    #[inline]
    pub fn current_mode(&self) -> AuditMode {
        self.current_form().kind()
    }

    pub fn select_mode(&mut self, mode: AuditMode) {
        self.state.gui.current_form_index = router::index_of(mode);
        self.state.options.audit.mode = mode;
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Summary for the stat cards; defaults until the first run lands.
    pub fn summary(&self) -> AuditSummary {
        self.report.as_ref().map(|r| r.summary).unwrap_or_default()
    }

    pub fn metrics(&self) -> &[MetricRecord] {
        self.report.as_ref().map(|r| r.metrics.as_slice()).unwrap_or(&[])
    }

    /* ---------- run lifecycle ---------- */

    /// Pre-flight for the trigger: clear the error, refuse re-entry,
    /// validate the active form. On success the status flips to Running
    /// and the run generation advances; the caller spawns the worker.
    pub fn try_begin_run(&mut self) -> bool {
        self.state.gui.error = None;

        if self.analysis == AnalysisStatus::Running {
            logd!("Audit: trigger ignored, a run is already active");
            return false;
        }

        if let Err(e) = self.current_form().validate(&self.state) {
            logd!("Audit: validation failed ({:?}): {}", self.current_mode(), e);
            self.state.gui.error = Some(e.to_string());
            return false;
        }

        self.analysis = AnalysisStatus::Running;
        self.run_generation += 1;
        self.status("Analyzing…");
        true
    }

    /// Fold a worker's outcome into view state. Stale generations are
    /// dropped; results are applied wholesale.
    pub fn apply_run_outcome(&mut self, run: FinishedRun) {
        if run.generation != self.run_generation {
            logd!(
                "Audit: discarding stale run (generation {}, current {})",
                run.generation, self.run_generation
            );
            return;
        }

        match run.result {
            Ok(report) => {
                logf!(
                    "Audit: complete, score={} urls={} metrics={}",
                    report.summary.overall_score,
                    report.summary.urls_analyzed,
                    report.metrics.len()
                );
                self.report = Some(report);
                self.analysis = AnalysisStatus::Complete;
                self.status("Audit complete");
            }
            Err(e) => {
                loge!("Audit: failed: {}", e);
                self.state.gui.error = Some(e.to_string());
                self.analysis = AnalysisStatus::Idle;
                self.status("Audit failed");
            }
        }
    }

    fn poll_finished(&mut self) {
        let run = self.finished.lock().unwrap().take();
        if let Some(run) = run {
            self.apply_run_outcome(run);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_finished();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("SEO On-Page Audit");
            ui.weak("Comprehensive analysis of your webpage's SEO elements");
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                components::tabs::draw(ui, self);
                ui.separator();

                let form = self.current_form();
                match form.draw(ui, &mut self.state) {
                    FormEvent::BrowseCsv => actions::browse_csv(self),
                    FormEvent::None => {}
                }

                if self.current_mode() == AuditMode::Bulk {
                    ui.add_space(8.0);
                    components::export_bar::draw(ui, self);
                }

                ui.add_space(8.0);
                components::error_banner::draw(ui, self);
                components::run_bar::draw(ui, self);

                ui.separator();
                components::summary_cards::draw(ui, self);

                if self.analysis == AnalysisStatus::Complete {
                    ui.add_space(8.0);
                    components::metrics_grid::draw(ui, self);
                }

                ui.add_space(8.0);
                components::details::draw(ui, self);
            });
        });
    }
}
