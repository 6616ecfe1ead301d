//! Word list loading utilities
//!
//! Dictionaries are plain text files with one word per line.

use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines are ignored; lines that are not a valid word are skipped with a
/// warning. Order is preserved, since it decides tie-breaking between guesses.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_oracle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionaries/wordle-answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content, &path.display().to_string());
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse dictionary text; `source` names it in warnings
#[must_use]
pub fn parse_lines(content: &str, source: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    warn!("{source}:{}: skipping '{trimmed}': {err}", number + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, dropping invalid entries
///
/// # Examples
/// ```
/// use wordle_oracle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_lines_ignores_blanks_and_bad_lines() {
        let text = "crane\n\n  SLATE  \nab1de\nirate\n";
        let words = parse_lines(text, "test");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle-oracle-loader-{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n\nbogus!\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/wordle-oracle/words.txt").is_err());
    }
}
