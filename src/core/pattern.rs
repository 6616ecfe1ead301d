//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, shown black/gray)
//! - 1 = Present (letter in word, wrong position, shown yellow)
//! - 2 = Match (letter in correct position, shown green)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{ALPHABET_LEN, WORD_LEN, letter_slot};
use super::Word;
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of distinct feedback patterns (3^5)
pub const PATTERN_COUNT: usize = 243;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Match,
}

impl Mark {
    /// Base-3 digit of this mark
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Match => 2,
        }
    }

    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Match),
            _ => None,
        }
    }

    /// Letter used in feedback strings: G, Y or B
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'B',
            Self::Present => 'Y',
            Self::Match => 'G',
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts G/Y/B in either case, `-` or `_` for absent, and the green,
    /// yellow, white and black square emoji.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Match),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

/// Error parsing a feedback string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternParseError {
    #[error("feedback must have exactly {WORD_LEN} symbols, got {0}")]
    WrongLength(usize),
    #[error("'{0}' is not a feedback symbol (use G, Y or B)")]
    InvalidSymbol(char),
}

impl Pattern {
    /// All matches (the guess is the answer)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Checked conversion from a dense code
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < PATTERN_COUNT {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Encode per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks.iter().rev().fold(0, |code, mark| code * 3 + mark.digit()))
    }

    /// Decode into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut value = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(value % 3).unwrap_or(Mark::Absent);
            value /= 3;
        }
        marks
    }

    /// Calculate the pattern shown when `guess` is played against `answer`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and count them as used letters
    /// 2. Second pass: a non-matching letter is present only while the answer
    ///    still holds unused copies of it
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::{Pattern, Word};
    ///
    /// let answer = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let pattern = Pattern::compute(&answer, &guess);
    ///
    /// // C(absent) R(absent) A(match) N(absent) E(match)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.code(), 180);
    /// ```
    #[must_use]
    pub fn compute(answer: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut used = [0u8; ALPHABET_LEN];
        let (answer_chars, guess_chars) = (answer.letters(), guess.letters());

        for (i, mark) in marks.iter_mut().enumerate() {
            if guess_chars[i] == answer_chars[i] {
                *mark = Mark::Match;
                used[letter_slot(guess_chars[i])] += 1;
            }
        }

        let available = answer.letter_counts();
        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Match {
                continue;
            }
            let slot = letter_slot(guess_chars[i]);
            if available[slot] > used[slot] {
                *mark = Mark::Present;
                used[slot] += 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Calculate feedback for raw text
    ///
    /// # Errors
    /// - `LengthMismatch` if the two strings have different lengths
    /// - `InvalidWord` if either is not a valid 5-letter word
    pub fn compute_str(answer: &str, guess: &str) -> Result<Self, SolverError> {
        let (answer_len, guess_len) = (answer.chars().count(), guess.chars().count());
        if answer_len != guess_len {
            return Err(SolverError::LengthMismatch {
                answer: answer_len,
                guess: guess_len,
            });
        }

        let parse = |text: &str| {
            Word::new(text).map_err(|source| SolverError::InvalidWord {
                text: text.to_string(),
                source,
            })
        };
        Ok(Self::compute(&parse(answer)?, &parse(guess)?))
    }

    /// Count the number of matched positions
    #[must_use]
    pub fn count_matches(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Match).count()
    }

    /// Count the number of present-elsewhere positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Match => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.marks().iter().map(|m| m.symbol()).collect();
        f.write_str(&text)
    }
}

impl FromStr for Pattern {
    type Err = PatternParseError;

    /// Parse a pattern from a string like "GYBBG" or "🟩🟨⬜⬜🟩"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LEN {
            return Err(PatternParseError::WrongLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, &symbol) in marks.iter_mut().zip(&symbols) {
            *mark = Mark::from_symbol(symbol).ok_or(PatternParseError::InvalidSymbol(symbol))?;
        }
        Ok(Self::from_marks(marks))
    }
}
