//! Core domain types for Wordle
//!
//! Words, feedback patterns and the ordered dictionaries whose index positions
//! identify words everywhere else in the crate.

mod dictionary;
mod pattern;
mod word;

pub use dictionary::{Dictionary, DictionaryKind, WordLists};
pub use pattern::{Mark, PATTERN_COUNT, Pattern, PatternParseError};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError};
