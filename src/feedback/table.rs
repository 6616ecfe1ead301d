//! Precomputed guess × answer feedback table
//!
//! Every (guess, answer) pair is evaluated once up front so that scoring and
//! filtering become array lookups. Rows are indexed by guess, columns by answer.

use crate::core::{Dictionary, Pattern};
use crate::error::SolverError;
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Dense |guesses| × |answers| matrix of feedback codes
///
/// The table remembers the fingerprints of the dictionaries it was built from;
/// [`FeedbackTable::validate`] rejects it for any other pair. Serialized, the
/// codes form one hex string, two digits per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTable {
    guess_fingerprint: u64,
    answer_fingerprint: u64,
    guess_count: usize,
    answer_count: usize,
    #[serde(with = "hex_codes")]
    codes: Vec<u8>,
}

impl FeedbackTable {
    /// Compute feedback for every guess against every answer
    ///
    /// Rows are filled in parallel. Cost is O(|G| × |A|) feedback computations.
    #[must_use]
    pub fn build(guesses: &Dictionary, answers: &Dictionary) -> Self {
        let start = Instant::now();
        let answer_count = answers.len();
        let mut codes = vec![0u8; guesses.len() * answer_count];

        codes
            .par_chunks_mut(answer_count.max(1))
            .zip(guesses.words().par_iter())
            .for_each(|(row, guess)| {
                for (slot, answer) in row.iter_mut().zip(answers.words()) {
                    *slot = Pattern::compute(answer, guess).code();
                }
            });

        info!(
            "built feedback table {}x{} ({} entries) in {:.2?}",
            guesses.len(),
            answer_count,
            codes.len(),
            start.elapsed()
        );

        Self {
            guess_fingerprint: guesses.fingerprint(),
            answer_fingerprint: answers.fingerprint(),
            guess_count: guesses.len(),
            answer_count,
            codes,
        }
    }

    /// Feedback shown for guess `guess` when the answer is `answer`
    ///
    /// # Panics
    /// Panics if either index is out of range
    #[inline]
    #[must_use]
    pub fn get(&self, guess: usize, answer: usize) -> Pattern {
        assert!(answer < self.answer_count, "answer index out of range");
        Pattern::new(self.codes[guess * self.answer_count + answer])
    }

    /// All feedback codes of one guess, indexed by answer
    ///
    /// # Panics
    /// Panics if the guess index is out of range
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[u8] {
        let start = guess * self.answer_count;
        &self.codes[start..start + self.answer_count]
    }

    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[inline]
    #[must_use]
    pub const fn answer_count(&self) -> usize {
        self.answer_count
    }

    /// Check that this table belongs to the given dictionaries
    ///
    /// # Errors
    /// Returns `StaleCache` when the dimensions or content fingerprints differ,
    /// or when the stored matrix is truncated.
    pub fn validate(&self, guesses: &Dictionary, answers: &Dictionary) -> Result<(), SolverError> {
        let stale = |reason: String| {
            Err(SolverError::StaleCache {
                artifact: "feedback table",
                reason,
            })
        };

        if self.guess_count != guesses.len() || self.answer_count != answers.len() {
            return stale(format!(
                "table is {}x{}, dictionaries are {}x{}",
                self.guess_count,
                self.answer_count,
                guesses.len(),
                answers.len()
            ));
        }
        if self.guess_fingerprint != guesses.fingerprint()
            || self.answer_fingerprint != answers.fingerprint()
        {
            return stale("dictionary contents changed".to_string());
        }
        if self.codes.len() != self.guess_count * self.answer_count {
            return stale(format!(
                "expected {} entries, found {}",
                self.guess_count * self.answer_count,
                self.codes.len()
            ));
        }
        if self.codes.iter().any(|&code| Pattern::from_code(code).is_none()) {
            return stale("table holds out-of-range feedback codes".to_string());
        }
        Ok(())
    }
}

/// Byte codes as a lowercase hex string
mod hex_codes {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    pub fn serialize<S: Serializer>(codes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let mut text = String::with_capacity(codes.len() * 2);
        for &code in codes {
            text.push(char::from(DIGITS[usize::from(code >> 4)]));
            text.push(char::from(DIGITS[usize::from(code & 0x0f)]));
        }
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.len() % 2 != 0 {
            return Err(D::Error::custom("odd number of hex digits"));
        }
        text.as_bytes()
            .chunks_exact(2)
            .map(|pair| -> Result<u8, D::Error> { Ok((nibble(pair[0])? << 4) | nibble(pair[1])?) })
            .collect()
    }

    fn nibble<E: Error>(digit: u8) -> Result<u8, E> {
        match digit {
            b'0'..=b'9' => Ok(digit - b'0'),
            b'a'..=b'f' => Ok(digit - b'a' + 10),
            _ => Err(E::custom(format!("'{}' is not a hex digit", char::from(digit)))),
        }
    }
}
