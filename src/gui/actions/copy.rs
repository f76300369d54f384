// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, note};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.notes.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = note::to_export_string(&app.notes);
    logf!("Copy: notes={}", app.notes.len());
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
