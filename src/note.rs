// src/note.rs
use crate::core::sanitize::quote_field;
use crate::mood::Tense;

/// One flashcard: id, verb, mood/tense label, then the conjugated forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub guid: String,
    pub verb: String,
    pub label: String,
    pub forms: Vec<String>,
}

/// `verb-MOOD-Tense`, lowercased (`donner-indicatif-passé composé`).
pub fn guid(verb: &str, tense: Tense) -> String {
    format!("{}-{}-{}", verb, tense.mood().label(), tense.label()).to_lowercase()
}

impl Note {
    pub fn new(verb: &str, tense: Tense, forms: Vec<String>) -> Self {
        Self {
            guid: guid(verb, tense),
            verb: s!(verb),
            label: tense.display_label(),
            forms,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [self.guid.as_str(), self.verb.as_str(), self.label.as_str()]
            .into_iter()
            .chain(self.forms.iter().map(String::as_str))
    }

    /// `"guid"; "verb"; "LABEL"; "form"; …`
    pub fn to_line(&self) -> String {
        self.fields().map(quote_field).collect::<Vec<_>>().join("; ")
    }
}

/// Note lines, each ending in `\n`.
pub fn to_export_string(notes: &[Note]) -> String {
    let mut out = s!();
    for n in notes {
        out.push_str(&n.to_line());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;

    fn imparfait() -> Tense {
        Mood::Indicative.tense("Imparfait").unwrap()
    }

    #[test]
    fn donner_imparfait_line() {
        let forms = [
            "je donnais",
            "tu donnais",
            "il (elle) donnait",
            "nous donnions",
            "vous donniez",
            "ils (elles) donnaient",
        ]
        .map(String::from)
        .to_vec();
        let note = Note::new("donner", imparfait(), forms);
        assert_eq!(
            note.to_line(),
            "\"donner-indicatif-imparfait\"; \"donner\"; \"INDICATIF Imparfait\"; \
             \"je donnais\"; \"tu donnais\"; \"il (elle) donnait\"; \"nous donnions\"; \
             \"vous donniez\"; \"ils (elles) donnaient\""
        );
    }

    #[test]
    fn guid_lowercases_accents_and_keeps_spaces() {
        let t = Mood::Indicative.tense("Passé composé").unwrap();
        assert_eq!(guid("Être", t), "être-indicatif-passé composé");
    }

    #[test]
    fn export_string_is_one_line_per_note() {
        let a = Note::new("aimer", imparfait(), vec![s!("j’aimais")]);
        let b = Note::new("finir", imparfait(), vec![s!("je finissais")]);
        let out = to_export_string(&[a, b]);
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with("\"je finissais\"\n"));
    }
}
