// src/specs/mod.rs
//! # Page "specs"
//!
//! Where the ground truth lives in a conjugation page, and how to read it.
//!
//! ## What lives here
//! - [`layout`]: the markup conventions of the site (panel ids, heading tags,
//!   row part tags) as one swappable value.
//! - [`conjugation`]: the selector. Narrows a parsed page down to the rows of
//!   one (mood, tense) table.
//! - [`phrase`]: the formatter. Turns one row into `j’ai donné`.
//!
//! ## What does **not** live here
//! - Fetching and pacing (`core::net`, `runner`).
//! - Note shaping and files (`note`, `file`).
//! - GUI / CLI concerns.
//!
//! ## Conventions & invariants
//! - Work on the [`DocNode`](crate::core::DocNode) contract only, never on
//!   html5ever types, so tests can feed in their own trees.
//! - Absence is loud: a missing panel, heading or table is an error, never an
//!   empty list.
//! - Rows come back in document order (je, tu, il (elle), nous, vous, ils (elles)).
//!
//! ## Testing notes
//! Specs are testable offline against captured fixtures (see `tests/fixtures`).
pub mod conjugation;
pub mod layout;
pub mod phrase;

pub use conjugation::{extract, fetch_and_extract, select};
pub use layout::{SiteLayout, BESCHERELLE};
pub use phrase::{format_entry, join_parts};
