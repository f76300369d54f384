// tests/runner_batch.rs
//
// Batch behaviour with an in-memory fetcher: ordering, skipping, pacing.
//
use std::cell::RefCell;
use std::time::{Duration, Instant};

use conjugaison::core::net::Fetcher;
use conjugaison::error::{Error, Result};
use conjugaison::mood::Mood;
use conjugaison::progress::Progress;
use conjugaison::runner::run_batch;

const DONNER: &str = include_str!("fixtures/donner.html");

/// Serves the saved page for every verb except `missing`, and records calls.
struct PageFetcher {
    missing: &'static str,
    calls: RefCell<Vec<(String, Instant)>>,
}

impl PageFetcher {
    fn new(missing: &'static str) -> Self {
        Self { missing, calls: RefCell::new(Vec::new()) }
    }
}

impl Fetcher for PageFetcher {
    fn fetch(&self, verb: &str) -> Result<String> {
        self.calls.borrow_mut().push((verb.to_string(), Instant::now()));
        if verb == self.missing {
            return Err(Error::Status { url: format!("test://{verb}"), status: 404 });
        }
        Ok(DONNER.to_string())
    }
}

#[derive(Default)]
struct Recorder(Vec<String>);

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.0.push(format!("begin {total}"));
    }
    fn item_done(&mut self, verb: &str) {
        self.0.push(format!("done {verb}"));
    }
    fn item_failed(&mut self, verb: &str, _err: &Error) {
        self.0.push(format!("failed {verb}"));
    }
    fn finish(&mut self) {
        self.0.push("finish".into());
    }
}

fn verbs(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn failing_verb_is_skipped_and_batch_continues() {
    let fetcher = PageFetcher::new("kebab");
    let tense = Mood::Indicative.tense("Imparfait").unwrap();
    let mut rec = Recorder::default();

    let summary = run_batch(
        &verbs(&["donner", "kebab", "aimer"]),
        tense,
        &fetcher,
        Duration::ZERO,
        Some(&mut rec),
    );

    let got: Vec<&str> = summary.notes.iter().map(|n| n.verb.as_str()).collect();
    assert_eq!(got, ["donner", "aimer"]);
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].to_string().starts_with("kebab: "));
    assert!(!summary.is_clean());
    assert_eq!(rec.0, ["begin 3", "done donner", "failed kebab", "done aimer", "finish"]);
}

#[test]
fn notes_carry_guid_label_and_forms() {
    let fetcher = PageFetcher::new("");
    let tense = Mood::Subjunctive.tense("Passé").unwrap();
    let summary = run_batch(&verbs(&["donner"]), tense, &fetcher, Duration::ZERO, None);

    assert!(summary.is_clean());
    let note = &summary.notes[0];
    assert_eq!(note.guid, "donner-subjonctif-passé");
    assert_eq!(note.label, "SUBJONCTIF Passé");
    assert_eq!(note.forms.len(), 6);
    assert!(note.to_line().starts_with("\"donner-subjonctif-passé\"; \"donner\"; \"SUBJONCTIF Passé\"; \"que j’aie donné\""));
}

#[test]
fn pause_only_between_fetches() {
    let pause = Duration::from_millis(40);
    let tense = Mood::Indicative.tense("Présent").unwrap();

    let fetcher = PageFetcher::new("");
    let t = Instant::now();
    run_batch(&verbs(&["donner", "donner", "donner"]), tense, &fetcher, pause, None);
    assert!(t.elapsed() >= pause * 2);

    let calls = fetcher.calls.borrow();
    assert_eq!(calls.len(), 3);
    assert!(calls[1].1 - calls[0].1 >= pause);
    assert!(calls[2].1 - calls[1].1 >= pause);

    // nothing to wait for before the first fetch
    let fetcher = PageFetcher::new("");
    let start = Instant::now();
    run_batch(&verbs(&["donner"]), tense, &fetcher, Duration::from_secs(5), None);
    assert!(fetcher.calls.borrow()[0].1 - start < Duration::from_secs(5));
}

#[test]
fn empty_batch_is_clean() {
    let fetcher = PageFetcher::new("");
    let summary = run_batch(&[], Default::default(), &fetcher, Duration::ZERO, None);
    assert!(summary.notes.is_empty() && summary.is_clean());
    assert!(fetcher.calls.borrow().is_empty());
}
