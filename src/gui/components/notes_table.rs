// src/gui/components/notes_table.rs
//
// Read-only view of the last batch: one row per note.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const PERSONS: [&str; 6] = ["je", "tu", "il (elle)", "nous", "vous", "ils (elles)"];

fn form_header(ix: usize, cols: usize) -> String {
    match PERSONS.get(ix) {
        Some(p) if cols == PERSONS.len() => s!(*p),
        _ => format!("Form {}", ix + 1),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.notes.is_empty() {
        ui.label(RichText::new("No notes yet. Enter verbs and press FETCH.").weak());
        return;
    }

    let forms = app.notes.iter().map(|n| n.forms.len()).max().unwrap_or(0);

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("notes_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .column(Column::initial(110.0).resizable(true).clip(true))
                .column(Column::initial(190.0).resizable(true).clip(true));
            for _ in 0..forms {
                table = table.column(Column::initial(150.0).resizable(true).clip(true).at_least(40.0));
            }

            table
                .header(24.0, |mut header| {
                    header.col(|ui| { ui.strong("Verb"); });
                    header.col(|ui| { ui.strong("Mood / tense"); });
                    for ix in 0..forms {
                        header.col(|ui| { ui.strong(form_header(ix, forms)); });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.notes.len(), |mut row| {
                        let note = &app.notes[row.index()];
                        row.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                            ui.label(note.verb.as_str());
                        });
                        row.col(|ui| { ui.label(note.label.as_str()); });
                        for ix in 0..forms {
                            row.col(|ui| {
                                ui.label(note.forms.get(ix).map(String::as_str).unwrap_or(""));
                            });
                        }
                    });
                });
        });
}

#[cfg(test)]
mod tests {
    use super::form_header;

    #[test]
    fn six_forms_use_person_headers() {
        assert_eq!(form_header(0, 6), "je");
        assert_eq!(form_header(5, 6), "ils (elles)");
        assert_eq!(form_header(1, 4), "Form 2");
    }
}
