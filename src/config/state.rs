// src/config/state.rs
use std::{fs, io, path::{Path, PathBuf}};

use super::consts::{STATE_FILE, STORE_DIR};
use super::options::AppOptions;
use crate::mood::Mood;

#[derive(Clone, Debug, PartialEq)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    /// Verb list text box, one verb per line
    pub verbs_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            verbs_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

pub fn default_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(STATE_FILE)
}

/// Missing or unreadable file → defaults. Unknown keys and bad values are skipped.
pub fn load(path: &Path) -> AppState {
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(_) => AppState::default(),
    }
}

pub fn parse(text: &str) -> AppState {
    let mut state = AppState::default();
    let mut mood = state.options.lookup.mood();
    let mut tense_label: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else { continue };
        let (key, val) = (key.trim(), val.trim());
        match key {
            "mood" => {
                if let Some(m) = Mood::from_label(val) { mood = m; }
            }
            "tense" => tense_label = Some(s!(val)),
            "input" => state.options.lookup.input_path = PathBuf::from(val),
            "output" => state.options.export.set_path(val),
            "pause_ms" => {
                if let Ok(v) = val.parse() { state.options.lookup.pause_ms = v; }
            }
            "window" => {
                if let Some((w, h)) = val.split_once('x') {
                    if let (Ok(w), Ok(h)) = (w.trim().parse(), h.trim().parse()) {
                        state.gui.window_w = w;
                        state.gui.window_h = h;
                    }
                }
            }
            "verbs" => {
                state.gui.verbs_text = val
                    .split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
            }
            _ => {}
        }
    }

    state.options.lookup.set_mood(mood);
    if let Some(t) = tense_label.as_deref().and_then(|l| mood.tense(l)) {
        state.options.lookup.tense = t;
    }
    state
}

pub fn render(state: &AppState) -> String {
    let lookup = &state.options.lookup;
    let verbs = crate::file::parse_verbs(&state.gui.verbs_text).join(",");
    let mut s = s!();
    s.push_str(&format!("mood={}\n", lookup.mood().label()));
    s.push_str(&format!("tense={}\n", lookup.tense.label()));
    s.push_str(&format!("input={}\n", lookup.input_path.display()));
    s.push_str(&format!("output={}\n", state.options.export.out_path().display()));
    s.push_str(&format!("pause_ms={}\n", lookup.pause_ms));
    s.push_str(&format!("window={}x{}\n", state.gui.window_w, state.gui.window_h));
    if !verbs.is_empty() {
        s.push_str(&format!("verbs={}\n", verbs));
    }
    s
}

pub fn save(path: &Path, state: &AppState) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(state))
}
