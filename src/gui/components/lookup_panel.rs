// src/gui/components/lookup_panel.rs

use std::path::PathBuf;

use eframe::egui::{self, widgets::Spinner};
use crate::{gui::{actions, app::App}, mood::Mood};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Lookup");
    ui.add_space(4.0);

    // --- Mood + tense ---
    {
        let lookup = &mut app.state.options.lookup;

        let prev_mood = lookup.mood();
        let mut mood = prev_mood;
        egui::ComboBox::from_label("Mood")
            .selected_text(mood.menu_name())
            .show_ui(ui, |ui| {
                for m in Mood::ALL {
                    ui.selectable_value(&mut mood, m, m.menu_name());
                }
            });
        if mood != prev_mood {
            lookup.set_mood(mood);
            logf!("UI: Mood → {} (tense {})", mood, lookup.tense.label());
        }

        let prev_tense = lookup.tense;
        let mut tense = prev_tense;
        egui::ComboBox::from_label("Tense")
            .selected_text(tense.label())
            .show_ui(ui, |ui| {
                for t in mood.tenses() {
                    ui.selectable_value(&mut tense, t, t.label());
                }
            });
        if tense != prev_tense {
            lookup.tense = tense;
            logf!("UI: Tense → {}", tense);
        }
    }

    ui.separator();

    // --- Verbs ---
    ui.label("Verbs (one per line):");
    egui::ScrollArea::vertical()
        .id_salt("verbs")
        .max_height(280.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut app.state.gui.verbs_text)
                    .desired_rows(14)
                    .desired_width(f32::INFINITY),
            );
        });

    ui.horizontal(|ui| {
        ui.label("File:");
        let mut text = app.state.options.lookup.input_path.to_string_lossy().into_owned();
        if ui
            .add(egui::TextEdit::singleline(&mut text).desired_width(140.0))
            .changed()
        {
            app.state.options.lookup.input_path = PathBuf::from(text);
        }
        if ui.button("Load").clicked() {
            actions::load_verbs(app);
        }
    });

    ui.separator();

    // --- Fetch ---
    ui.horizontal(|ui| {
        let btn = egui::Button::new(egui::RichText::new("FETCH").strong());
        if ui.add_enabled(!app.running, btn).clicked() {
            actions::fetch(app, ui.ctx());
        }
        if app.running {
            ui.add(Spinner::new());
        }
    });

    if !app.failures.is_empty() {
        ui.add_space(6.0);
        egui::CollapsingHeader::new(format!("Skipped ({})", app.failures.len()))
            .default_open(true)
            .show(ui, |ui| {
                for f in &app.failures {
                    ui.label(egui::RichText::new(f).small());
                }
            });
    }
}
