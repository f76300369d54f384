// src/gui/actions/fetch.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    core::net::HttpFetcher,
    file,
    gui::{app::App, progress::GuiProgress},
    runner::{self, RunSummary},
};

/// Run the verb batch on a worker thread; the UI polls `app.job` for the summary.
pub fn fetch(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Fetch: Clicked while a batch is running");
        return;
    }

    let verbs = file::parse_verbs(&app.state.gui.verbs_text);
    if verbs.is_empty() {
        app.status("No verbs to fetch");
        logd!("Fetch: Clicked, but the verb list is empty");
        return;
    }

    let tense = app.state.options.lookup.tense;
    let pause = app.state.options.lookup.pause();
    logf!("Fetch: Begin verbs={} tense={}", verbs.len(), tense);
    app.save_state();
    app.failures.clear();
    app.status(format!("Fetching 0/{}", verbs.len()));

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx.clone());
        let summary = match HttpFetcher::new() {
            Ok(fetcher) => runner::run_batch(&verbs, tense, &fetcher, pause, Some(&mut prog)),
            Err(e) => {
                loge!("Fetch: Client setup failed: {}", e);
                RunSummary { notes: Vec::new(), failures: vec![e] }
            }
        };
        // receiver gone means the window closed
        let _ = tx.send(summary);
        ctx.request_repaint();
    });

    app.job = Some(rx);
    app.running = true;
}

/// Replace the verb box with the contents of the input file.
pub fn load_verbs(app: &mut App) {
    let path = app.state.options.lookup.input_path.clone();
    match file::load_verbs(&path) {
        Ok(verbs) => {
            app.state.gui.verbs_text = verbs.join("\n");
            app.status(format!("Loaded {} verb(s) from {}", verbs.len(), path.display()));
        }
        Err(e) => {
            loge!("Input: Load failed {}: {}", path.display(), e);
            app.status(format!("Load error: {e}"));
        }
    }
}
