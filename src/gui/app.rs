// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::{self, AppState},
    note::Note,
    runner::RunSummary,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Conjugaison",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last batch
    pub notes: Vec<Note>,
    pub failures: Vec<String>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub job: Option<mpsc::Receiver<RunSummary>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!(
            "Init: tense={}, verbs box={} line(s)",
            state.options.lookup.tense,
            state.gui.verbs_text.lines().count()
        );

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            notes: Vec::new(),
            failures: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            job: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Fold a pending out-path edit back into the export options.
    pub fn commit_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into();
            logf!("Export: Out path set → {}", self.out_path_text);
            self.out_path_dirty = false;
        }
    }

    pub fn save_state(&self) {
        let path = state::default_path();
        match state::save(&path, &self.state) {
            Ok(()) => logd!("State: Saved → {}", path.display()),
            Err(e) => loge!("State: Save failed {}: {}", path.display(), e),
        }
    }

    fn apply_summary(&mut self, summary: RunSummary) {
        let ok = summary.notes.len();
        let failed = summary.failures.len();
        self.failures = summary.failures.iter().map(|e| e.to_string()).collect();
        self.notes = summary.notes;
        self.status(if failed == 0 {
            format!("Ready: {ok} note(s)")
        } else {
            format!("Ready: {ok} note(s), {failed} verb(s) skipped")
        });
    }

    fn poll_job(&mut self, ctx: &egui::Context) {
        let Some(rx) = self.job.as_ref() else { return };
        match rx.try_recv() {
            Ok(summary) => {
                self.job = None;
                self.running = false;
                self.apply_summary(summary);
            }
            Err(mpsc::TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("Fetch: Worker ended without a result");
                self.job = None;
                self.running = false;
                self.status("Fetch aborted");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_job(ctx);

        egui::SidePanel::left("lookup")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                crate::gui::components::lookup_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::notes_table::draw(ui, self);
        });
    }
}
