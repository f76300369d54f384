// src/prompt.rs
//! Interactive console flow: numbered mood/tense menus, file-or-typed verbs.
//!
//! Every prompt loops until it gets a valid answer. Running out of input
//! while an answer is still required is `UnexpectedEof`.

use std::io::{self, BufRead, Write};

use crate::mood::{Mood, Tense};

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = s!();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(Some(s!(trimmed)))
}

fn eof(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, format!("input ended before a {what} was chosen"))
}

/// Numbered pick from `1..=n`.
fn pick<R: BufRead>(input: &mut R, n: usize, what: &str) -> io::Result<usize> {
    loop {
        let line = read_line(input)?.ok_or_else(|| eof(what))?;
        if let Ok(k) = line.trim().parse::<usize>() {
            if (1..=n).contains(&k) {
                return Ok(k - 1);
            }
        }
    }
}

pub fn prompt_mood<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Mood> {
    writeln!(out, "Choisissez un mode.")?;
    for (i, m) in Mood::ALL.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, m.menu_name())?;
    }
    out.flush()?;
    let ix = pick(input, Mood::ALL.len(), "mood")?;
    Ok(Mood::ALL[ix])
}

pub fn prompt_tense<R: BufRead, W: Write>(input: &mut R, out: &mut W, mood: Mood) -> io::Result<Tense> {
    writeln!(out, "Choisissez un temps.")?;
    let tenses: Vec<Tense> = mood.tenses().collect();
    for (i, t) in tenses.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, t.label())?;
    }
    out.flush()?;
    let ix = pick(input, tenses.len(), "tense")?;
    Ok(tenses[ix])
}

/// `y` → load from file, `n` → type verbs. Anything else asks again.
pub fn prompt_load_file<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    writeln!(out, "Voulez-vous charger les verbes à partir d’un fichier ? (y/n)")?;
    out.flush()?;
    loop {
        match read_line(input)?.ok_or_else(|| eof("verb source"))?.trim() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {}
        }
    }
}

/// Verbs until an empty line or end of input.
pub fn prompt_verbs<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Vec<String>> {
    writeln!(out, "Saisissez un ou plusieurs verbes. (Appuyez sur entrée pour continuer)")?;
    out.flush()?;
    let mut verbs = Vec::new();
    while let Some(line) = read_line(input)? {
        let verb = line.trim();
        if verb.is_empty() {
            break;
        }
        verbs.push(s!(verb));
    }
    Ok(verbs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn input(text: &str) -> Cursor<Vec<u8>> {
        Cursor::new(text.as_bytes().to_vec())
    }

    #[test]
    fn mood_menu_maps_numbers_in_order() {
        let mut inp = input("1\r\n2\r\n3");
        let mut out = Vec::new();
        assert_eq!(prompt_mood(&mut inp, &mut out).unwrap(), Mood::Indicative);
        assert_eq!(prompt_mood(&mut inp, &mut out).unwrap(), Mood::Conditional);
        assert_eq!(prompt_mood(&mut inp, &mut out).unwrap(), Mood::Subjunctive);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("Choisissez un mode.\n1 - Indicatif\n2 - Conditionnel\n3 - Subjonctif\n"));
    }

    #[test]
    fn mood_menu_retries_on_bad_input() {
        let mut inp = input("4\r\n\r\nabc\r\n3");
        assert_eq!(prompt_mood(&mut inp, &mut Vec::new()).unwrap(), Mood::Subjunctive);
    }

    #[test]
    fn indicative_tense_menu_has_eight_entries() {
        let mut inp = input("1\r\n2\r\n3\r\n4\r\n5\r\n6\r\n7\r\n8");
        let mut out = Vec::new();
        let got: Vec<&str> = (0..8)
            .map(|_| prompt_tense(&mut inp, &mut out, Mood::Indicative).unwrap().label())
            .collect();
        assert_eq!(
            got,
            [
                "Présent",
                "Imparfait",
                "Passé simple",
                "Futur simple",
                "Passé composé",
                "Plus-que-parfait",
                "Passé antérieur",
                "Futur antérieur",
            ]
        );
    }

    #[test]
    fn tense_menu_is_scoped_to_mood() {
        let mut inp = input("1\r\n2");
        let mut out = Vec::new();
        let a = prompt_tense(&mut inp, &mut out, Mood::Conditional).unwrap();
        let b = prompt_tense(&mut inp, &mut out, Mood::Conditional).unwrap();
        assert_eq!((a.label(), b.label()), ("Présent", "Passé"));
        assert_eq!(a.mood(), Mood::Conditional);

        let mut inp = input("5\r\n\r\n4");
        let t = prompt_tense(&mut inp, &mut Vec::new(), Mood::Subjunctive).unwrap();
        assert_eq!(t.label(), "Plus-que-parfait");
    }

    #[test]
    fn load_file_question_accepts_only_y_or_n() {
        let mut inp = input("y\r\nn\r\na\r\ny\r\n5");
        let mut out = Vec::new();
        assert!(prompt_load_file(&mut inp, &mut out).unwrap());
        assert!(!prompt_load_file(&mut inp, &mut out).unwrap());
        assert!(prompt_load_file(&mut inp, &mut out).unwrap());
    }

    #[test]
    fn verbs_stop_at_empty_line() {
        let mut out = Vec::new();
        let v = prompt_verbs(&mut input("donner\r\nenvoyer\r\navoir"), &mut out).unwrap();
        assert_eq!(v, ["donner", "envoyer", "avoir"]);

        let v = prompt_verbs(&mut input("donner\r\n\r\nenvoyer\r\navoir"), &mut out).unwrap();
        assert_eq!(v, ["donner"]);
    }

    #[test]
    fn eof_before_choice_is_an_error() {
        let err = prompt_mood(&mut input("9\r\n"), &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        let err = prompt_load_file(&mut input(""), &mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
