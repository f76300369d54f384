// src/specs/phrase.rs
//! Rebuild one conjugated phrase from a table row.
//!
//! Rows come split into `pronoun`, optional `auxiliary` (compound tenses) and
//! `verb` elements. Joining them needs one French rule: an elided pronoun
//! (`j’`, `que j’`) glues to the auxiliary with no space.
//!
//! Formatting is lenient: missing parts become empty strings and the output
//! may look odd, but it never fails.

use crate::core::DocNode;
use super::layout::{SiteLayout, BESCHERELLE};

/// U+2019, as printed by the site (`j’ai`).
pub const ELISION: char = '’';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryParts {
    pub pronoun: String,
    pub auxiliary: String,
    pub verb: String,
}

impl EntryParts {
    pub fn read<N: DocNode>(entry: &N, layout: &SiteLayout) -> Self {
        Self {
            pronoun: part_text(entry, layout.pronoun_tag),
            auxiliary: part_text(entry, layout.auxiliary_tag),
            verb: part_text(entry, layout.verb_tag),
        }
    }

    pub fn join(&self) -> String {
        join_parts(&self.pronoun, &self.auxiliary, &self.verb)
    }
}

/// Normalized text of the first descendant with `tag`; empty if absent.
fn part_text<N: DocNode>(entry: &N, tag: &str) -> String {
    entry
        .find(|n| n.tag_name().eq_ignore_ascii_case(tag))
        .map(|n| n.text())
        .unwrap_or_default()
}

/// `pronoun [space] auxiliary space verb`, no space after an elided pronoun.
/// Inputs are used verbatim.
pub fn join_parts(pronoun: &str, auxiliary: &str, verb: &str) -> String {
    let mut out = String::with_capacity(pronoun.len() + auxiliary.len() + verb.len() + 2);
    out.push_str(pronoun);
    if !auxiliary.is_empty() {
        if !pronoun.ends_with(ELISION) {
            out.push(' ');
        }
        out.push_str(auxiliary);
    }
    out.push(' ');
    out.push_str(verb);
    out
}

pub fn format_entry<N: DocNode>(entry: &N) -> String {
    format_entry_with(entry, &BESCHERELLE)
}

pub fn format_entry_with<N: DocNode>(entry: &N, layout: &SiteLayout) -> String {
    EntryParts::read(entry, layout).join()
}
