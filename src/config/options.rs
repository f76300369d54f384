// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::mood::{Mood, Tense};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub lookup: LookupOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupOptions {
    /// Mood + tense to extract (the tense knows its mood).
    pub tense: Tense,
    /// Verb list file for the "load from file" path.
    pub input_path: PathBuf,
    /// Pause between successive fetches.
    pub pause_ms: u64,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            tense: Tense::default(),
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl LookupOptions {
    pub fn mood(&self) -> Mood {
        self.tense.mood()
    }

    /// Switch mood; keeps the tense label if the new mood has it, else its first tense.
    pub fn set_mood(&mut self, mood: Mood) {
        if mood == self.tense.mood() {
            return;
        }
        self.tense = mood
            .tense(self.tense.label())
            .or_else(|| mood.tenses().next())
            .unwrap_or_default();
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUTPUT_FILE) }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Parse GUI/CLI text into a file path. A trailing separator means
    /// "directory": the default file name is appended.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = PathBuf::from(DEFAULT_OUTPUT_FILE);
            return;
        }
        let p = PathBuf::from(s);
        self.out_path = if crate::file::looks_like_dir_hint(&p) {
            p.join(DEFAULT_OUTPUT_FILE)
        } else {
            p
        };
    }
}
