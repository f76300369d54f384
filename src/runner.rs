// src/runner.rs
use std::{thread, time::Duration};

use crate::{
    core::net::Fetcher,
    error::{Error, Result},
    mood::Tense,
    note::Note,
    progress::Progress,
    specs,
};

/// Outcome of a batch. Notes keep input order; failed verbs are skipped.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub notes: Vec<Note>,
    /// `Error::Verb` per failed verb
    pub failures: Vec<Error>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch and extract one verb into a note.
pub fn build_note(fetcher: &dyn Fetcher, verb: &str, tense: Tense) -> Result<Note> {
    let forms = specs::fetch_and_extract(fetcher, verb, tense).map_err(|e| e.for_verb(verb))?;
    Ok(Note::new(verb, tense, forms))
}

/// Process verbs one after the other, sleeping `pause` between fetches.
/// A failing verb is recorded and the batch moves on.
pub fn run_batch(
    verbs: &[String],
    tense: Tense,
    fetcher: &dyn Fetcher,
    pause: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    logf!("Run: Begin {} verb(s), {}", verbs.len(), tense);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(verbs.len());
    }

    let mut summary = RunSummary::default();
    for (i, verb) in verbs.iter().enumerate() {
        // Delay loop to avoid spamming the server with requests
        if i != 0 && !pause.is_zero() {
            thread::sleep(pause);
        }

        match build_note(fetcher, verb, tense) {
            Ok(note) => {
                logd!("Run: OK {} ({} forms)", verb, note.forms.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(verb);
                }
                summary.notes.push(note);
            }
            Err(e) => {
                loge!("Run: {}", e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(verb, &e);
                }
                summary.failures.push(e);
            }
        }
    }

    logf!(
        "Run: Done notes={} failures={}",
        summary.notes.len(),
        summary.failures.len()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}
