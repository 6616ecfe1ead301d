//! Small word lists shared by unit tests

use crate::core::WordLists;
use crate::wordlists::loader::words_from_slice;

pub const GUESSES: &[&str] = &[
    "about", "caret", "crane", "crate", "erase", "floor", "grate", "irate", "knoll", "other",
    "plate", "raise", "react", "roate", "robot", "slate", "speed", "stare", "stoop", "there",
    "trace", "where", "aaaaa",
];

pub const ANSWERS: &[&str] = &[
    "caret", "crate", "floor", "grate", "irate", "other", "plate", "react", "robot", "slate",
    "stare", "there", "trace", "where",
];

/// Guess and answer lists with answers a strict subset of guesses
pub fn lists() -> WordLists {
    WordLists::new(words_from_slice(GUESSES), words_from_slice(ANSWERS))
        .expect("fixture lists are non-empty")
}

/// The three-word dictionary used for duplicate-letter end-to-end checks
pub fn tiny() -> WordLists {
    WordLists::single(words_from_slice(&["abcde", "edcba", "aaaaa"]))
        .expect("fixture list is non-empty")
}
