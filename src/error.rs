// src/error.rs
//! Crate error type.
//!
//! Extraction failures are loud: a selector that cannot find its target
//! returns [`Error::NotFound`] carrying the mood/tense it was asked for, never
//! an empty list. The batch runner wraps per-verb failures in
//! [`Error::Verb`] so the user sees which lookup failed.

use std::fmt;

use thiserror::Error;

/// Which step of the table lookup came up empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Missing {
    ActivePanel,
    Mood,
    Tense,
    Table,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Missing::ActivePanel => "active conjugation panel",
            Missing::Mood => "mood heading",
            Missing::Tense => "tense heading",
            Missing::Table => "conjugation table",
        })
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{missing} not found (mood={mood:?}, tense={tense:?})")]
    NotFound {
        missing: Missing,
        mood: String,
        tense: String,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },

    #[error("bad URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{verb}: {source}")]
    Verb {
        verb: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn not_found(missing: Missing, mood: &str, tense: &str) -> Self {
        Error::NotFound { missing, mood: s!(mood), tense: s!(tense) }
    }

    pub fn for_verb(self, verb: &str) -> Self {
        Error::Verb { verb: s!(verb), source: Box::new(self) }
    }

    /// True when the root cause is a failed table lookup.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Verb { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
