//! Ordered word dictionaries
//!
//! A dictionary's index positions are the canonical identities used by the
//! feedback table, candidate sets and decision trees. Each dictionary carries a
//! fingerprint of its content so cached artifacts can be tied to it.

use super::Word;
use super::word::WORD_LEN;
use crate::error::SolverError;
use log::warn;
use rustc_hash::{FxHashMap, FxHasher};
use std::fmt;
use std::hash::Hasher;

/// Which of the two word lists a dictionary plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryKind {
    Guess,
    Answer,
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Guess => "guess",
            Self::Answer => "answer",
        })
    }
}

/// An ordered, immutable, duplicate-free list of words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    positions: FxHashMap<[u8; WORD_LEN], usize>,
    fingerprint: u64,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of repeated words
    ///
    /// # Errors
    /// Returns `EmptyDictionary` when no words are given.
    pub fn new(kind: DictionaryKind, words: impl IntoIterator<Item = Word>) -> Result<Self, SolverError> {
        let mut unique = Vec::new();
        let mut positions = FxHashMap::default();
        let mut duplicates = 0usize;

        for word in words {
            if positions.contains_key(word.letters()) {
                duplicates += 1;
                continue;
            }
            positions.insert(*word.letters(), unique.len());
            unique.push(word);
        }

        if unique.is_empty() {
            return Err(SolverError::EmptyDictionary(kind));
        }
        if duplicates > 0 {
            warn!("dropped {duplicates} repeated words from the {kind} dictionary");
        }

        let fingerprint = fingerprint(&unique);
        Ok(Self {
            words: unique,
            positions,
            fingerprint,
        })
    }

    /// Append words that are not already present
    fn extended(mut self, extra: Vec<Word>) -> Self {
        for word in extra {
            if !self.positions.contains_key(word.letters()) {
                self.positions.insert(*word.letters(), self.words.len());
                self.words.push(word);
            }
        }
        self.fingerprint = fingerprint(&self.words);
        self
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty dictionaries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at an index
    ///
    /// # Panics
    /// Panics if the index is out of range
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.positions.get(word.letters()).copied()
    }

    /// Look a word up by text, case-insensitively
    #[must_use]
    pub fn find(&self, text: &str) -> Option<usize> {
        Word::new(text).ok().and_then(|word| self.index_of(&word))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Content identity: equal for dictionaries holding the same words in the same order
    #[inline]
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn fingerprint(words: &[Word]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_usize(words.len());
    for word in words {
        hasher.write(word.letters());
    }
    hasher.finish()
}

/// The guess and answer dictionaries of one game variant
///
/// Every answer is guaranteed to be guessable: answers missing from the guess
/// list are appended to it.
#[derive(Debug, Clone)]
pub struct WordLists {
    guesses: Dictionary,
    answers: Dictionary,
    answer_guess: Vec<usize>,
}

impl WordLists {
    /// Pair a guess list with an answer list
    ///
    /// # Errors
    /// Returns `EmptyDictionary` if either list is empty.
    pub fn new(guesses: Vec<Word>, answers: Vec<Word>) -> Result<Self, SolverError> {
        let guesses = Dictionary::new(DictionaryKind::Guess, guesses)?;
        let answers = Dictionary::new(DictionaryKind::Answer, answers)?;

        let missing: Vec<Word> = answers
            .iter()
            .filter(|word| guesses.index_of(word).is_none())
            .cloned()
            .collect();
        let guesses = if missing.is_empty() {
            guesses
        } else {
            warn!(
                "{} answers are not in the guess dictionary; appending them",
                missing.len()
            );
            guesses.extended(missing)
        };

        let answer_guess = answers
            .iter()
            .map(|word| guesses.index_of(word).ok_or_else(|| SolverError::UnknownWord(word.text().to_string())))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            guesses,
            answers,
            answer_guess,
        })
    }

    /// Use one list for both guesses and answers
    ///
    /// # Errors
    /// Returns `EmptyDictionary` if the list is empty.
    pub fn single(words: Vec<Word>) -> Result<Self, SolverError> {
        Self::new(words.clone(), words)
    }

    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &Dictionary {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn answers(&self) -> &Dictionary {
        &self.answers
    }

    /// Guess-dictionary index of an answer
    ///
    /// # Panics
    /// Panics if the answer index is out of range
    #[inline]
    #[must_use]
    pub fn guess_index_of_answer(&self, answer: usize) -> usize {
        self.answer_guess[answer]
    }

    /// Answer-dictionary index of a guess, if the guess can be the answer
    #[must_use]
    pub fn answer_index_of_guess(&self, guess: usize) -> Option<usize> {
        self.answers.index_of(self.guesses.word(guess))
    }
}
