//! Five-letter words
//!
//! Every dictionary entry, guess and answer is a [`Word`]: lowercase ASCII
//! letters plus a per-letter histogram, so the feedback rule never has to
//! recount letters.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Size of the Latin alphabet the words are drawn from
pub const ALPHABET_LEN: usize = 26;

/// Validated lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
    histogram: [u8; ALPHABET_LEN],
}

/// Why a string is not a [`Word`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected {WORD_LEN} letters, found {0}")]
    Length(usize),
    #[error("only ASCII letters are allowed")]
    NotAscii,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

impl Word {
    /// Parse `text`, folding it to lowercase
    ///
    /// # Errors
    /// `NotAscii` for any non-ASCII input, `Length` when there are not exactly
    /// five bytes, `NotALetter` naming the first digit, space or punctuation.
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::{Word, WordError};
    ///
    /// assert_eq!(Word::new("Crane").unwrap().text(), "crane");
    /// assert_eq!(Word::new("cranes"), Err(WordError::Length(6)));
    /// assert_eq!(Word::new("cr4ne"), Err(WordError::NotALetter('4')));
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text = text.into();
        if !text.is_ascii() {
            return Err(WordError::NotAscii);
        }
        text.make_ascii_lowercase();

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::Length(text.len()))?;
        if let Some(&bad) = letters.iter().find(|b| !b.is_ascii_lowercase()) {
            return Err(WordError::NotALetter(char::from(bad)));
        }

        let mut histogram = [0u8; ALPHABET_LEN];
        for &letter in &letters {
            histogram[letter_slot(letter)] += 1;
        }
        Ok(Self {
            text,
            letters,
            histogram,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The letters as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// # Panics
    /// If `position` is not below [`WORD_LEN`].
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Occurrences of a lowercase letter; zero for anything else
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.histogram[letter_slot(letter)]
        } else {
            0
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    #[inline]
    pub(crate) const fn letter_counts(&self) -> &[u8; ALPHABET_LEN] {
        &self.histogram
    }
}

#[inline]
pub(crate) const fn letter_slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
