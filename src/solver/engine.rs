//! Main Wordle solver interface

use super::cancel::Cancellation;
use super::candidates::CandidateSet;
use super::config::{Opening, SolverConfig};
use super::scorer::GuessScorer;
use super::session::GameSession;
use crate::core::{DictionaryKind, Word, WordLists};
use crate::error::SolverError;
use crate::feedback::FeedbackTable;
use log::{debug, info};

/// Main Wordle solver
///
/// A read-only bundle of word lists, their feedback table and the selection
/// settings. [`Solver::choose_guess`] is the one decision function shared by
/// live sessions and the decision-tree builder, so both always agree.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    lists: &'a WordLists,
    table: &'a FeedbackTable,
    scorer: GuessScorer<'a>,
    config: SolverConfig,
    opening: Option<usize>,
}

impl<'a> Solver<'a> {
    /// Create a solver over `lists` using a table built from them
    ///
    /// # Errors
    /// Returns `StaleCache` if the table was built from other dictionaries, and
    /// `UnknownWord` if the configured opening word is not guessable.
    pub fn new(
        lists: &'a WordLists,
        table: &'a FeedbackTable,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        table.validate(lists.guesses(), lists.answers())?;

        let opening = match &config.opening {
            Opening::Disabled => None,
            Opening::Default => {
                let word = config.objective.default_opening();
                let index = lists.guesses().find(word);
                if index.is_none() {
                    info!("opening word '{word}' is not in the guess dictionary; scanning instead");
                }
                index
            }
            Opening::Word(word) => Some(
                lists
                    .guesses()
                    .find(word)
                    .ok_or_else(|| SolverError::UnknownWord(word.clone()))?,
            ),
        };

        Ok(Self {
            lists,
            table,
            scorer: GuessScorer::new(table),
            config,
            opening,
        })
    }

    /// Pick the guess for `candidates` on turn `turn` (0 for a fresh game)
    ///
    /// Returns a guess-dictionary index.
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` when nothing is left to guess.
    pub fn choose_guess(&self, candidates: &CandidateSet, turn: usize) -> Result<usize, SolverError> {
        if let Some(guess) = self.shortcut(candidates, turn)? {
            return Ok(guess);
        }
        let guess = self
            .scorer
            .select_best(candidates, self.config.objective)
            .ok_or(SolverError::EmptyDictionary(DictionaryKind::Guess))?;
        debug!(
            "turn {turn}: {} candidates, chose '{}'",
            candidates.len(),
            self.guess_word(guess)
        );
        Ok(guess)
    }

    /// Like [`Self::choose_guess`], but stops scanning when `cancel` fires
    ///
    /// # Errors
    /// Returns `Cancelled` if the scan was stopped, or `EmptyCandidateSet`.
    pub fn choose_guess_within(
        &self,
        candidates: &CandidateSet,
        turn: usize,
        cancel: &Cancellation,
    ) -> Result<usize, SolverError> {
        if let Some(guess) = self.shortcut(candidates, turn)? {
            return Ok(guess);
        }
        self.scorer
            .select_best_within(candidates, self.config.objective, cancel)?
            .ok_or(SolverError::EmptyDictionary(DictionaryKind::Guess))
    }

    /// Decisions that need no scan
    fn shortcut(&self, candidates: &CandidateSet, turn: usize) -> Result<Option<usize>, SolverError> {
        let first = candidates.first().ok_or(SolverError::EmptyCandidateSet)?;
        let forced = candidates.len() == 1 || (candidates.len() == 2 && self.config.small_set_shortcut);
        if forced {
            return Ok(Some(self.lists.guess_index_of_answer(first)));
        }
        if turn == 0 {
            return Ok(self.opening);
        }
        Ok(None)
    }

    /// Start a new game
    #[must_use]
    pub fn session(&self) -> GameSession<'_> {
        GameSession::new(self)
    }

    /// Every answer, as a candidate set
    #[must_use]
    pub fn all_candidates(&self) -> CandidateSet {
        CandidateSet::full(self.lists.answers().len())
    }

    /// Guess-dictionary word at `index`
    ///
    /// # Panics
    /// Panics if the index is out of range
    #[must_use]
    pub fn guess_word(&self, index: usize) -> &'a Word {
        self.lists.guesses().word(index)
    }

    #[must_use]
    pub const fn lists(&self) -> &'a WordLists {
        self.lists
    }

    #[must_use]
    pub const fn table(&self) -> &'a FeedbackTable {
        self.table
    }

    #[must_use]
    pub const fn scorer(&self) -> GuessScorer<'a> {
        self.scorer
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Resolved opening guess, if the first turn skips the scan
    #[must_use]
    pub const fn opening(&self) -> Option<usize> {
        self.opening
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::fixtures;
    use crate::solver::Objective;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn rejects_table_from_other_lists() {
        let lists = fixtures::lists();
        let other = fixtures::tiny();
        let table = FeedbackTable::build(other.guesses(), other.answers());

        let result = Solver::new(&lists, &table, SolverConfig::default());
        assert!(matches!(result, Err(SolverError::StaleCache { .. })));
    }

    #[test]
    fn default_opening_is_used_on_turn_zero() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let all = CandidateSet::full(lists.answers().len());

        for (objective, word) in [(Objective::WorstCase, "raise"), (Objective::Expected, "roate")] {
            let solver = Solver::new(&lists, &table, SolverConfig::new(objective)).unwrap();
            let guess = solver.choose_guess(&all, 0).unwrap();
            assert_eq!(solver.guess_word(guess).text(), word);
        }
    }

    #[test]
    fn disabled_opening_scans() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let all = CandidateSet::full(lists.answers().len());
        let config = SolverConfig::default().with_opening(Opening::Disabled);
        let solver = Solver::new(&lists, &table, config).unwrap();

        assert_eq!(solver.opening(), None);
        assert_eq!(
            Some(solver.choose_guess(&all, 0).unwrap()),
            solver.scorer().select_best(&all, Objective::Expected)
        );
    }

    #[test]
    fn missing_default_opening_falls_back_to_scan() {
        let lists = fixtures::tiny();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        assert_eq!(solver.opening(), None);
    }

    #[test]
    fn unknown_opening_word_is_rejected() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let config = SolverConfig::default().with_opening(Opening::Word("zzzzz".into()));

        let result = Solver::new(&lists, &table, config);
        assert_eq!(result.unwrap_err(), SolverError::UnknownWord("zzzzz".into()));
    }

    #[test]
    fn forced_and_small_set_shortcuts() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        let plate = lists.answers().find("plate").unwrap();
        let where_ = lists.answers().find("where").unwrap();

        let single = CandidateSet::from_indices(vec![where_]);
        assert_eq!(solver.guess_word(solver.choose_guess(&single, 3).unwrap()).text(), "where");

        let pair = CandidateSet::from_indices(vec![where_, plate]);
        assert_eq!(solver.guess_word(solver.choose_guess(&pair, 3).unwrap()).text(), "plate");
    }

    #[test]
    fn empty_candidates_are_an_error() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        let empty = CandidateSet::from_indices(Vec::new());
        assert_eq!(solver.choose_guess(&empty, 1), Err(SolverError::EmptyCandidateSet));
    }

    #[test]
    fn guess_depends_only_on_history() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let all = solver.all_candidates();

        let guess = lists.guesses().find("slate").unwrap();
        let answer = lists.answers().find("grate").unwrap();
        let next = all.filter(&table, guess, table.get(guess, answer));

        let first = solver.choose_guess(&next, 1).unwrap();
        for _ in 0..5 {
            assert_eq!(solver.clone().choose_guess(&next, 1).unwrap(), first);
        }
    }

    #[test]
    fn cancelled_choice_reports_cancellation() {
        let lists = WordLists::single(words_from_slice(fixtures::GUESSES)).unwrap();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let all = solver.all_candidates();

        let token = Cancellation::new();
        token.cancel();
        assert_eq!(solver.choose_guess_within(&all, 1, &token), Err(SolverError::Cancelled));

        // Forced decisions never scan
        let single = CandidateSet::from_indices(vec![0]);
        assert_eq!(solver.choose_guess_within(&single, 1, &token), Ok(0));
        assert!(Pattern::compute(solver.guess_word(0), solver.guess_word(0)).is_perfect());
    }
}
