// src/specs/conjugation.rs
//! Locate the conjugation table for one (mood, tense) pair.
//!
//! Narrowing happens in three steps so a tense label shared by two moods
//! (`Imparfait`, `Présent`, `Passé`) can only resolve under the mood asked for:
//!
//! ```text
//! #panels > div.active                 active panel only
//!   h4.card-title  "INDICATIF"         mood heading
//!   ~ div …                            mood block (until the next h4)
//!       h5.card-title "Imparfait"      tense heading, inside the block
//!       + div                          table; its children are the rows
//! ```
//!
//! Any step that comes up empty is a [`Error::NotFound`]. An empty table is
//! treated the same way.

use std::time::Instant;

use crate::core::{dom::parse_html, net::Fetcher, sanitize::contains_ci, DocNode};
use crate::error::{Error, Missing, Result};
use crate::mood::Tense;

use super::layout::{SiteLayout, BESCHERELLE};
use super::phrase::format_entry_with;

/// How well a heading matched. Lower is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Exact,
    Contains,
    ContainsCi,
}

fn rank(heading: &str, label: &str) -> Option<Rank> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    if heading == label {
        Some(Rank::Exact)
    } else if heading.contains(label) {
        Some(Rank::Contains)
    } else if contains_ci(heading, label) {
        Some(Rank::ContainsCi)
    } else {
        None
    }
}

/// Best matching `<tag class=heading_class>` under `scope`, as (parent, child index).
/// Ties go to the first one in document order.
fn find_heading<N: DocNode>(
    scope: &[N],
    tag: &str,
    layout: &SiteLayout,
    label: &str,
) -> Option<(N, usize)> {
    let mut best: Option<(Rank, N, usize)> = None;

    for top in scope {
        for parent in top.preorder() {
            for (ix, child) in parent.elements().iter().enumerate() {
                if !child.is(tag, Some(layout.heading_class)) {
                    continue;
                }
                let Some(r) = rank(&child.text(), label) else { continue };
                if best.as_ref().is_none_or(|(b, ..)| r < *b) {
                    best = Some((r, parent.clone(), ix));
                }
                if r == Rank::Exact {
                    return best.map(|(_, p, i)| (p, i));
                }
            }
        }
    }
    best.map(|(_, p, i)| (p, i))
}

/// The active child of the panel container.
pub fn active_panel<N: DocNode>(root: &N, layout: &SiteLayout) -> Option<N> {
    let container = root.find(|n| n.attr("id").as_deref() == Some(layout.panels_id))?;
    let mut active = container
        .elements()
        .into_iter()
        .filter(|n| n.is(layout.block_tag, Some(layout.active_class)));
    let first = active.next();
    if active.next().is_some() {
        logw!("Select: more than one active panel; using the first");
    }
    first
}

/// Sibling blocks after the mood heading, up to the next mood heading.
fn mood_block<N: DocNode>(panel: &N, layout: &SiteLayout, mood: &str) -> Option<Vec<N>> {
    let (parent, ix) = find_heading(std::slice::from_ref(panel), layout.mood_heading, layout, mood)?;
    let block = parent
        .elements()
        .into_iter()
        .skip(ix + 1)
        .take_while(|n| !n.is(layout.mood_heading, Some(layout.heading_class)))
        .filter(|n| n.is(layout.block_tag, None))
        .collect();
    Some(block)
}

/// Rows of the (mood, tense) table, in document order.
pub fn select<N: DocNode>(root: &N, mood: &str, tense: &str) -> Result<Vec<N>> {
    select_with(root, &BESCHERELLE, mood, tense)
}

pub fn select_with<N: DocNode>(
    root: &N,
    layout: &SiteLayout,
    mood: &str,
    tense: &str,
) -> Result<Vec<N>> {
    let miss = |missing| Error::not_found(missing, mood, tense);

    let panel = active_panel(root, layout).ok_or_else(|| miss(Missing::ActivePanel))?;
    let block = mood_block(&panel, layout, mood).ok_or_else(|| miss(Missing::Mood))?;
    let (parent, ix) =
        find_heading(&block, layout.tense_heading, layout, tense).ok_or_else(|| miss(Missing::Tense))?;

    let table = parent
        .elements()
        .into_iter()
        .nth(ix + 1)
        .filter(|n| n.is(layout.block_tag, None))
        .ok_or_else(|| miss(Missing::Table))?;

    let rows = table.elements();
    if rows.is_empty() {
        return Err(miss(Missing::Table));
    }
    Ok(rows)
}

/// Selected rows, formatted.
pub fn extract<N: DocNode>(root: &N, mood: &str, tense: &str) -> Result<Vec<String>> {
    extract_with(root, &BESCHERELLE, mood, tense)
}

pub fn extract_with<N: DocNode>(
    root: &N,
    layout: &SiteLayout,
    mood: &str,
    tense: &str,
) -> Result<Vec<String>> {
    let rows = select_with(root, layout, mood, tense)?;
    Ok(rows.iter().map(|r| format_entry_with(r, layout)).collect())
}

/// Fetch one verb's page and extract the forms for `tense`.
pub fn fetch_and_extract(fetcher: &dyn Fetcher, verb: &str, tense: Tense) -> Result<Vec<String>> {
    let html_doc = fetcher.fetch(verb)?;
    let t = Instant::now();
    let doc = parse_html(&html_doc);
    let forms = extract(&doc.root(), tense.mood().label(), tense.label())?;
    logd!("Select: {} {} → {} forms in {:?}", verb, tense, forms.len(), t.elapsed());
    Ok(forms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_prefers_exact_then_case() {
        assert_eq!(rank("Passé", "Passé"), Some(Rank::Exact));
        assert_eq!(rank("Passé simple", "Passé"), Some(Rank::Contains));
        assert_eq!(rank("Indicatif", "INDICATIF"), Some(Rank::ContainsCi));
        assert_eq!(rank("Indicatif", "kebab"), None);
        assert_eq!(rank("Indicatif", "  "), None);
        assert!(Rank::Exact < Rank::Contains && Rank::Contains < Rank::ContainsCi);
    }

    const PAGE: &str = r#"<html><body>
      <div id="nav-tabContent-active-passive">
        <div class="tab-pane">
          <h4 class="card-title">INDICATIF</h4>
          <div><h5 class="card-title">Présent</h5>
               <div><p><personal-pronoun>je</personal-pronoun><verb>suis aimé</verb></p></div></div>
        </div>
        <div class="tab-pane active">
          <h4 class="card-title">INDICATIF</h4>
          <div>
            <h5 class="card-title">Passé simple</h5>
            <div><p><personal-pronoun>j’</personal-pronoun><verb>aimai</verb></p></div>
            <h5 class="card-title">Passé composé</h5>
            <div><p><personal-pronoun>j’</personal-pronoun><auxiliary>ai</auxiliary><verb>aimé</verb></p></div>
          </div>
          <h4 class="card-title">SUBJONCTIF</h4>
          <div>
            <h5 class="card-title">Passé</h5>
            <div><p><personal-pronoun>que j’</personal-pronoun><auxiliary>aie</auxiliary><verb>aimé</verb></p></div>
            <h5 class="card-title">Présent</h5>
            <span>not a table</span>
            <h5 class="card-title">Imparfait</h5>
            <div></div>
          </div>
        </div>
      </div>
    </body></html>"#;

    #[test]
    fn reads_active_panel_only() {
        let doc = parse_html(PAGE);
        let err = extract(&doc.root(), "INDICATIF", "Présent").unwrap_err();
        assert!(matches!(err, Error::NotFound { missing: Missing::Tense, .. }));
    }

    #[test]
    fn shared_tense_label_resolves_under_requested_mood() {
        let doc = parse_html(PAGE);
        let forms = extract(&doc.root(), "SUBJONCTIF", "Passé").unwrap();
        assert_eq!(forms, ["que j’aie aimé"]);
    }

    #[test]
    fn substring_heading_is_tolerated() {
        let doc = parse_html(PAGE);
        let forms = extract(&doc.root(), "INDICATIF", "composé").unwrap();
        assert_eq!(forms, ["j’ai aimé"]);
    }

    #[test]
    fn tense_search_stops_at_next_mood() {
        // no exact "Passé" under INDICATIF: the substring hit there wins over
        // the exact SUBJONCTIF heading further down
        let doc = parse_html(PAGE);
        let forms = extract(&doc.root(), "INDICATIF", "Passé").unwrap();
        assert_eq!(forms, ["j’ aimai"]);
    }

    #[test]
    fn heading_without_table_is_not_found() {
        let doc = parse_html(PAGE);
        let err = select(&doc.root(), "SUBJONCTIF", "Présent").unwrap_err();
        assert!(matches!(err, Error::NotFound { missing: Missing::Table, .. }));
    }

    #[test]
    fn empty_table_is_not_found() {
        let doc = parse_html(PAGE);
        let err = select(&doc.root(), "SUBJONCTIF", "Imparfait").unwrap_err();
        assert!(matches!(err, Error::NotFound { missing: Missing::Table, .. }));
    }

    #[test]
    fn page_without_panels_is_not_found() {
        let doc = parse_html("<html><body><h4 class=card-title>INDICATIF</h4></body></html>");
        let err = select(&doc.root(), "INDICATIF", "Présent").unwrap_err();
        assert!(matches!(err, Error::NotFound { missing: Missing::ActivePanel, .. }));
    }
}
