// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};
use crate::note::Note;

/// One verb per line; blank lines skipped, surrounding whitespace trimmed.
pub fn parse_verbs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Read a UTF-8 verb list (see [`parse_verbs`]).
pub fn load_verbs(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let verbs = parse_verbs(&text);
    logf!("Input: {} verb(s) from {}", verbs.len(), path.display());
    Ok(verbs)
}

/// Create/truncate `path` and write one note line per note.
/// Returns the path written to.
pub fn write_notes(path: &Path, notes: &[Note]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?);
    for note in notes {
        writeln!(out, "{}", note.to_line())?;
    }
    out.flush()?;
    logf!("Export: {} note(s) → {}", notes.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_verbs_skips_blank_lines_and_crlf() {
        let v = parse_verbs("donner\r\n\r\n  envoyer \navoir");
        assert_eq!(v, ["donner", "envoyer", "avoir"]);
    }

    #[test]
    fn dir_hint_needs_trailing_separator() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(looks_like_dir_hint(Path::new("out\\")));
        assert!(!looks_like_dir_hint(Path::new("out/notes.txt")));
    }
}
