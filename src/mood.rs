// src/mood.rs
//! Fixed mood/tense vocabulary.
//!
//! Labels are the strings the conjugation site prints in its card headings,
//! so they double as search keys for the selector. A [`Tense`] always carries
//! its owning [`Mood`]; the same tense label under another mood is a
//! different value.

use std::fmt;
use std::str::FromStr;

const INDICATIVE_TENSES: &[&str] = &[
    "Présent",
    "Imparfait",
    "Passé simple",
    "Futur simple",
    "Passé composé",
    "Plus-que-parfait",
    "Passé antérieur",
    "Futur antérieur",
];
const CONDITIONAL_TENSES: &[&str] = &["Présent", "Passé"];
const SUBJUNCTIVE_TENSES: &[&str] = &["Présent", "Imparfait", "Passé", "Plus-que-parfait"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    Indicative,
    Conditional,
    Subjunctive,
}

impl Mood {
    /// Menu order.
    pub const ALL: [Mood; 3] = [Mood::Indicative, Mood::Conditional, Mood::Subjunctive];

    /// Canonical heading label, e.g. `INDICATIF`.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Indicative => "INDICATIF",
            Mood::Conditional => "CONDITIONNEL",
            Mood::Subjunctive => "SUBJONCTIF",
        }
    }

    /// Capitalized name shown in menus.
    pub fn menu_name(self) -> &'static str {
        match self {
            Mood::Indicative => "Indicatif",
            Mood::Conditional => "Conditionnel",
            Mood::Subjunctive => "Subjonctif",
        }
    }

    pub fn tense_labels(self) -> &'static [&'static str] {
        match self {
            Mood::Indicative => INDICATIVE_TENSES,
            Mood::Conditional => CONDITIONAL_TENSES,
            Mood::Subjunctive => SUBJUNCTIVE_TENSES,
        }
    }

    pub fn tenses(self) -> impl Iterator<Item = Tense> {
        (0..self.tense_labels().len()).map(move |index| Tense { mood: self, index })
    }

    /// Exact label lookup (`Imparfait`), falling back to a case-insensitive match.
    pub fn tense(self, label: &str) -> Option<Tense> {
        let labels = self.tense_labels();
        let label = label.trim();
        labels
            .iter()
            .position(|l| *l == label)
            .or_else(|| {
                let lc = label.to_lowercase();
                labels.iter().position(|l| l.to_lowercase() == lc)
            })
            .map(|index| Tense { mood: self, index })
    }

    /// Accepts the canonical label or the menu name, any case.
    pub fn from_label(s: &str) -> Option<Mood> {
        let s = s.trim();
        Mood::ALL.into_iter().find(|m| {
            m.label().eq_ignore_ascii_case(s) || m.menu_name().eq_ignore_ascii_case(s)
        })
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::from_label(s).ok_or_else(|| {
            let known: Vec<&str> = Mood::ALL.iter().map(|m| m.menu_name()).collect();
            format!("Unknown mood: {} (expected one of {})", s, known.join(", "))
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tense {
    mood: Mood,
    index: usize,
}

impl Tense {
    pub fn mood(self) -> Mood {
        self.mood
    }

    /// Heading label within the mood, e.g. `Imparfait`.
    pub fn label(self) -> &'static str {
        self.mood.tense_labels()[self.index]
    }

    /// Note label: `INDICATIF Imparfait`.
    pub fn display_label(self) -> String {
        format!("{} {}", self.mood.label(), self.label())
    }
}

impl Default for Tense {
    fn default() -> Self {
        Tense { mood: Mood::Indicative, index: 0 }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mood.label(), self.label())
    }
}
