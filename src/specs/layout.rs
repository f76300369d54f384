// src/specs/layout.rs

/// Markup conventions a conjugation page must follow for the selector to work.
///
/// The page holds several mutually exclusive panels (active / passive voice)
/// under one container; exactly one carries the active class. Inside it, a
/// mood heading is followed by sibling blocks, each holding tense headings
/// that are immediately followed by their table. Table rows are split into
/// pronoun / auxiliary / verb elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteLayout {
    pub panels_id: &'static str,
    pub active_class: &'static str,
    /// Tag of mood blocks, panels and tables
    pub block_tag: &'static str,
    pub heading_class: &'static str,
    pub mood_heading: &'static str,
    pub tense_heading: &'static str,
    pub pronoun_tag: &'static str,
    pub auxiliary_tag: &'static str,
    pub verb_tag: &'static str,
}

/// conjugaison.bescherelle.com
pub const BESCHERELLE: SiteLayout = SiteLayout {
    panels_id: "nav-tabContent-active-passive",
    active_class: "active",
    block_tag: "div",
    heading_class: "card-title",
    mood_heading: "h4",
    tense_heading: "h5",
    pronoun_tag: "personal-pronoun",
    auxiliary_tag: "auxiliary",
    verb_tag: "verb",
};

impl Default for SiteLayout {
    fn default() -> Self {
        BESCHERELLE
    }
}
