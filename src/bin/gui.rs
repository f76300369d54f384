// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use conjugaison::{config::state, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init();

    let path = state::default_path();
    let app_state = state::load(&path);
    let (w, h) = (app_state.gui.window_w as f32, app_state.gui.window_h as f32);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Conjugaison")
            .with_inner_size([w, h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
