// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, eyre, Result};

use crate::{
    config::consts::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, REQUEST_PAUSE_MS},
    core::net::HttpFetcher,
    error::Error,
    file,
    mood::{Mood, Tense},
    progress::Progress,
    prompt, runner,
};

/// Fetch Bescherelle conjugations and write Anki note lines.
/// Anything not given as a flag is asked interactively.
#[derive(Parser, Debug)]
#[command(name = "cli", version)]
pub struct Args {
    /// Mood: indicatif | conditionnel | subjonctif
    #[arg(short, long)]
    pub mood: Option<Mood>,

    /// Tense label within the mood, e.g. "Imparfait"
    #[arg(short, long)]
    pub tense: Option<String>,

    /// Read verbs from this file (one per line)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Note file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Pause between requests, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Verbs to look up
    pub verbs: Vec<String>,
}

/// Prints each verb as it completes; failures go to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, _total: usize) {
        println!("Les verbes suivants ont été traités.");
    }
    fn item_done(&mut self, verb: &str) {
        println!("{verb}");
    }
    fn item_failed(&mut self, _verb: &str, err: &Error) {
        eprintln!("Error: {err}");
    }
}

fn resolve_tense<R: BufRead, W: Write>(args: &Args, input: &mut R, out: &mut W) -> Result<Tense> {
    let mood = match args.mood {
        Some(m) => m,
        None => prompt::prompt_mood(input, out)?,
    };
    match args.tense.as_deref() {
        Some(label) => mood.tense(label).ok_or_else(|| {
            eyre!(
                "Unknown tense {:?} for {}; expected one of: {}",
                label,
                mood.menu_name(),
                mood.tense_labels().join(", ")
            )
        }),
        None => Ok(prompt::prompt_tense(input, out, mood)?),
    }
}

fn resolve_verbs<R: BufRead, W: Write>(args: &Args, input: &mut R, out: &mut W) -> Result<Vec<String>> {
    if !args.verbs.is_empty() {
        return Ok(args.verbs.clone());
    }
    if let Some(path) = &args.input {
        return Ok(file::load_verbs(path)?);
    }
    if prompt::prompt_load_file(input, out)? {
        Ok(file::load_verbs(&PathBuf::from(DEFAULT_INPUT_FILE))?)
    } else {
        Ok(prompt::prompt_verbs(input, out)?)
    }
}

pub fn run(args: Args) -> Result<()> {
    let (tense, verbs) = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        let tense = resolve_tense(&args, &mut input, &mut out)?;
        let verbs = resolve_verbs(&args, &mut input, &mut out)?;
        (tense, verbs)
    };

    if verbs.is_empty() {
        bail!("No verbs to process");
    }

    let fetcher = HttpFetcher::new()?;
    let pause = std::time::Duration::from_millis(args.pause_ms);
    let summary = runner::run_batch(&verbs, tense, &fetcher, pause, Some(&mut CliProgress));

    if summary.notes.is_empty() {
        bail!("No notes produced ({} verb(s) failed)", summary.failures.len());
    }
    let path = file::write_notes(&args.output, &summary.notes)?;
    println!("Wrote {}", path.display());
    if !summary.is_clean() {
        eprintln!("{} verb(s) skipped", summary.failures.len());
    }
    Ok(())
}
