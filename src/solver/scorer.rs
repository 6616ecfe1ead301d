//! Guess scoring against a candidate set
//!
//! Each guess partitions the candidates by the feedback it would produce; the
//! objective turns the bucket sizes into a score. Scans over the guess
//! dictionary run in parallel and reduce on `(rank, index)`, so ties always go
//! to the earliest word in dictionary order.

use super::cancel::Cancellation;
use super::candidates::CandidateSet;
use super::objective::{BucketCounts, Objective, shannon_entropy};
use crate::core::PATTERN_COUNT;
use crate::error::SolverError;
use crate::feedback::FeedbackTable;
use rayon::prelude::*;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Largest bucket that does not end the game
    pub worst_case: usize,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Number of distinct feedback patterns
    pub buckets: usize,
}

/// Scores guesses using a precomputed feedback table
#[derive(Debug, Clone, Copy)]
pub struct GuessScorer<'a> {
    table: &'a FeedbackTable,
}

impl<'a> GuessScorer<'a> {
    #[must_use]
    pub const fn new(table: &'a FeedbackTable) -> Self {
        Self { table }
    }

    /// Bucket sizes of `candidates` under `guess`
    #[must_use]
    pub fn bucket_counts(&self, candidates: &CandidateSet, guess: usize) -> BucketCounts {
        let row = self.table.row(guess);
        let mut counts = [0u32; PATTERN_COUNT];
        for answer in candidates.iter() {
            counts[usize::from(row[answer])] += 1;
        }
        counts
    }

    /// Score one guess; lower is better
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::WordLists;
    /// use wordle_oracle::feedback::FeedbackTable;
    /// use wordle_oracle::solver::{CandidateSet, GuessScorer, Objective};
    /// use wordle_oracle::wordlists::loader::words_from_slice;
    ///
    /// let lists = WordLists::single(words_from_slice(&["crane", "slate"])).unwrap();
    /// let table = FeedbackTable::build(lists.guesses(), lists.answers());
    /// let scorer = GuessScorer::new(&table);
    ///
    /// // Guessing one of two candidates either wins or leaves the other one
    /// let both = CandidateSet::full(2);
    /// assert_eq!(scorer.score(&both, 0, Objective::Expected), 0.5);
    /// ```
    #[must_use]
    pub fn score(&self, candidates: &CandidateSet, guess: usize, objective: Objective) -> f64 {
        objective.score(&self.bucket_counts(candidates, guess))
    }

    /// All reported metrics for one guess
    #[must_use]
    pub fn metrics(&self, candidates: &CandidateSet, guess: usize) -> GuessMetrics {
        let counts = self.bucket_counts(candidates, guess);
        GuessMetrics {
            worst_case: Objective::WorstCase.rank(&counts) as usize,
            expected_remaining: Objective::Expected.score(&counts),
            entropy: shannon_entropy(&counts),
            buckets: counts.iter().filter(|&&n| n > 0).count(),
        }
    }

    /// Best guess over the whole guess dictionary
    ///
    /// Returns `None` only for an empty dictionary.
    #[must_use]
    pub fn select_best(&self, candidates: &CandidateSet, objective: Objective) -> Option<usize> {
        (0..self.table.guess_count())
            .into_par_iter()
            .map(|guess| (objective.rank(&self.bucket_counts(candidates, guess)), guess))
            .min()
            .map(|(_, guess)| guess)
    }

    /// Like [`Self::select_best`], but gives up when `cancel` fires
    ///
    /// # Errors
    /// Returns `Cancelled` if the scan was stopped before it finished.
    pub fn select_best_within(
        &self,
        candidates: &CandidateSet,
        objective: Objective,
        cancel: &Cancellation,
    ) -> Result<Option<usize>, SolverError> {
        let best = (0..self.table.guess_count())
            .into_par_iter()
            .map(|guess| {
                (!cancel.is_cancelled())
                    .then(|| (objective.rank(&self.bucket_counts(candidates, guess)), guess))
            })
            .while_some()
            .min();

        if cancel.is_cancelled() {
            return Err(SolverError::Cancelled);
        }
        Ok(best.map(|(_, guess)| guess))
    }

    /// The `limit` best guesses with their scores, best first
    #[must_use]
    pub fn top_guesses(
        &self,
        candidates: &CandidateSet,
        objective: Objective,
        limit: usize,
    ) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(u64, usize)> = (0..self.table.guess_count())
            .into_par_iter()
            .map(|guess| (objective.rank(&self.bucket_counts(candidates, guess)), guess))
            .collect();
        ranked.par_sort_unstable();
        ranked
            .into_iter()
            .take(limit)
            .map(|(_, guess)| (guess, self.score(candidates, guess, objective)))
            .collect()
    }
}
