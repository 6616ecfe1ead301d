//! One game played with the solver's advice

use super::candidates::CandidateSet;
use super::cancel::Cancellation;
use super::engine::Solver;
use crate::core::{Pattern, Word};
use crate::error::SolverError;
use std::fmt;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No feedback yet
    Fresh,
    InProgress,
    /// A guess came back all-Match
    Solved,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fresh => "fresh",
            Self::InProgress => "in progress",
            Self::Solved => "solved",
        })
    }
}

/// A guess together with the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Guess-dictionary index
    pub guess: usize,
    pub pattern: Pattern,
}

/// Guess/feedback history, the candidates it leaves, and the pending guess
///
/// Every failed call leaves the session exactly as it was.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    solver: &'a Solver<'a>,
    candidates: CandidateSet,
    /// Candidate sets before each recorded turn, for undo
    previous: Vec<CandidateSet>,
    history: Vec<Turn>,
    pending: Option<usize>,
    solved: bool,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(solver: &'a Solver<'a>) -> Self {
        Self {
            solver,
            candidates: solver.all_candidates(),
            previous: Vec::new(),
            history: Vec::new(),
            pending: None,
            solved: false,
        }
    }

    /// The solver's guess for the current position
    ///
    /// Asking again before any feedback returns the same guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::{Pattern, WordLists};
    /// use wordle_oracle::feedback::FeedbackTable;
    /// use wordle_oracle::solver::{SessionState, Solver, SolverConfig};
    /// use wordle_oracle::wordlists::loader::words_from_slice;
    ///
    /// let lists = WordLists::single(words_from_slice(&["abcde", "edcba", "aaaaa"])).unwrap();
    /// let table = FeedbackTable::build(lists.guesses(), lists.answers());
    /// let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
    ///
    /// let mut session = solver.session();
    /// let guess = session.request_guess().unwrap().clone();
    /// let answer = lists.answers().word(0);
    /// session.apply_feedback(Pattern::compute(answer, &guess)).unwrap();
    /// assert_ne!(session.state(), SessionState::Fresh);
    /// ```
    ///
    /// # Errors
    /// Returns `AlreadySolved` once the game is over.
    pub fn request_guess(&mut self) -> Result<&'a Word, SolverError> {
        self.request_with(|solver, candidates, turn| solver.choose_guess(candidates, turn))
    }

    /// Like [`Self::request_guess`], but gives up when `cancel` fires
    ///
    /// # Errors
    /// Returns `Cancelled` if the guess scan was stopped, or `AlreadySolved`.
    pub fn request_guess_within(&mut self, cancel: &Cancellation) -> Result<&'a Word, SolverError> {
        self.request_with(|solver, candidates, turn| solver.choose_guess_within(candidates, turn, cancel))
    }

    fn request_with(
        &mut self,
        choose: impl FnOnce(&Solver<'a>, &CandidateSet, usize) -> Result<usize, SolverError>,
    ) -> Result<&'a Word, SolverError> {
        if self.solved {
            return Err(SolverError::AlreadySolved);
        }
        let guess = match self.pending {
            Some(guess) => guess,
            None => choose(self.solver, &self.candidates, self.history.len())?,
        };
        self.pending = Some(guess);
        Ok(self.solver.guess_word(guess))
    }

    /// Record feedback for the guess last requested
    ///
    /// # Errors
    /// `NoPendingGuess` without a requested guess, `AlreadySolved` after the
    /// game ended, and `InvalidFeedback` when no candidate is consistent with
    /// the pattern.
    pub fn apply_feedback(&mut self, pattern: Pattern) -> Result<SessionState, SolverError> {
        if self.solved {
            return Err(SolverError::AlreadySolved);
        }
        let guess = self.pending.ok_or(SolverError::NoPendingGuess)?;
        self.record(guess, pattern)
    }

    /// Record feedback for a guess the player chose themselves
    ///
    /// # Errors
    /// `UnknownWord` for a word outside the guess dictionary, otherwise as
    /// [`Self::apply_feedback`].
    pub fn apply_feedback_for(&mut self, word: &Word, pattern: Pattern) -> Result<SessionState, SolverError> {
        if self.solved {
            return Err(SolverError::AlreadySolved);
        }
        let guess = self
            .solver
            .lists()
            .guesses()
            .index_of(word)
            .ok_or_else(|| SolverError::UnknownWord(word.text().to_string()))?;
        self.record(guess, pattern)
    }

    fn record(&mut self, guess: usize, pattern: Pattern) -> Result<SessionState, SolverError> {
        let next = self.candidates.filter(self.solver.table(), guess, pattern);
        if next.is_empty() {
            return Err(SolverError::InvalidFeedback {
                guess: self.solver.guess_word(guess).text().to_string(),
                pattern,
            });
        }

        self.previous.push(std::mem::replace(&mut self.candidates, next));
        self.history.push(Turn { guess, pattern });
        self.pending = None;
        self.solved = pattern.is_perfect();
        Ok(self.state())
    }

    /// Take back the last recorded turn
    pub fn undo(&mut self) -> Option<Turn> {
        let turn = self.history.pop()?;
        if let Some(candidates) = self.previous.pop() {
            self.candidates = candidates;
        }
        self.pending = None;
        self.solved = false;
        Some(turn)
    }

    /// Start over with every answer possible
    pub fn reset(&mut self) {
        self.candidates = self.solver.all_candidates();
        self.previous.clear();
        self.history.clear();
        self.pending = None;
        self.solved = false;
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.solved {
            SessionState::Solved
        } else if self.history.is_empty() {
            SessionState::Fresh
        } else {
            SessionState::InProgress
        }
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Words still possible as the answer
    pub fn remaining_words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let answers = self.solver.lists().answers();
        self.candidates.iter().map(move |index| answers.word(index))
    }

    /// Guess awaiting feedback
    #[must_use]
    pub fn pending_guess(&self) -> Option<&'a Word> {
        self.pending.map(|guess| self.solver.guess_word(guess))
    }

    /// Exactly one answer is left, so the next guess wins
    #[must_use]
    pub fn is_certain(&self) -> bool {
        !self.solved && self.candidates.len() == 1
    }

    #[must_use]
    pub const fn solver(&self) -> &'a Solver<'a> {
        self.solver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordLists;
    use crate::feedback::FeedbackTable;
    use crate::fixtures;
    use crate::solver::{Objective, SolverConfig};

    /// Play against a known answer; returns the guesses made
    fn play(session: &mut GameSession<'_>, answer: &Word) -> Vec<String> {
        let mut guesses = Vec::new();
        while session.state() != SessionState::Solved {
            let guess = session.request_guess().unwrap();
            guesses.push(guess.text().to_string());
            session.apply_feedback(Pattern::compute(answer, guess)).unwrap();
            assert!(guesses.len() <= 10, "session did not converge");
        }
        guesses
    }

    fn setup(lists: &WordLists) -> FeedbackTable {
        FeedbackTable::build(lists.guesses(), lists.answers())
    }

    #[test]
    fn tiny_dictionary_solves_abcde_quickly() {
        let lists = fixtures::tiny();
        let table = setup(&lists);
        for objective in [Objective::WorstCase, Objective::Expected] {
            let solver = Solver::new(&lists, &table, SolverConfig::new(objective)).unwrap();
            let mut session = solver.session();

            let answer = lists.answers().word(lists.answers().find("abcde").unwrap());
            let guesses = play(&mut session, answer);
            assert!(guesses.len() <= 3);
            assert_eq!(guesses.last().map(String::as_str), Some("abcde"));
        }
    }

    #[test]
    fn every_answer_is_solved() {
        let lists = fixtures::lists();
        let table = setup(&lists);
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        for answer in lists.answers() {
            let mut session = solver.session();
            let guesses = play(&mut session, answer);
            assert_eq!(guesses.last().map(String::as_str), Some(answer.text()));
        }
    }

    #[test]
    fn scripted_sessions_are_deterministic() {
        let lists = fixtures::lists();
        let table = setup(&lists);
        let solver = Solver::new(&lists, &table, SolverConfig::new(Objective::WorstCase)).unwrap();
        let answer = lists.answers().word(lists.answers().find("other").unwrap());

        let first = play(&mut solver.session(), answer);
        for _ in 0..3 {
            assert_eq!(play(&mut solver.session(), answer), first);
        }
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let lists = fixtures::lists();
        let table = setup(&lists);
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let answer = lists.answers().word(lists.answers().find("floor").unwrap());
        let mut session = solver.session();

        let mut previous = session.candidates().clone();
        while session.state() != SessionState::Solved {
            let guess = session.request_guess().unwrap();
            session.apply_feedback(Pattern::compute(answer, guess)).unwrap();
            let current = session.candidates();
            assert!(current.iter().all(|index| previous.contains(index)));
            assert!(session.remaining_words().any(|word| word == answer));
            previous = current.clone();
        }
    }

    #[test]
    fn repeated_requests_return_the_same_guess() {
        let lists = fixtures::lists();
        let table = setup(&lists);
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let mut session = solver.session();

        let first = session.request_guess().unwrap();
        assert_eq!(session.request_guess().unwrap(), first);
        assert_eq!(session.pending_guess(), Some(first));
        assert_eq!(session.state(), SessionState::Fresh);
    }

    #[test]
    fn invalid_feedback_leaves_state_unchanged() {
        let lists = fixtures::lists();
        let table = setup(&lists);
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let mut session = solver.session();

        // "roate" is not an answer, so all-Match is impossible
        let guess = session.request_guess().unwrap();
        assert_eq!(guess.text(), "roate");
        let before = session.candidates().clone();

        let error = session.apply_feedback(Pattern::PERFECT).unwrap_err();
        assert_eq!(
            error,
            SolverError::InvalidFeedback {
                guess: "roate".into(),
                pattern: Pattern::PERFECT,
            }
        );
        assert_eq!(session.candidates(), &before);
        assert!(session.history().is_empty());
        assert_eq!(session.pending_guess(), Some(guess));
    }

    #[test]
    fn feedback_without_guess_is_rejected() {
        let lists = fixtures::lists();
        let table = setup(&lists);
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let mut session = solver.session();

        assert_eq!(
            session.apply_feedback(Pattern::new(0)),
            Err(SolverError::NoPendingGuess)
        );
    }

    #[test]
    fn solved_game_rejects_further_requests() {
        let lists = fixtures::tiny();
        let table = setup(&lists);
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let mut session = solver.session();

        let answer = lists.answers().word(0);
        play(&mut session, answer);
        assert_eq!(session.state(), SessionState::Solved);
        assert_eq!(session.request_guess(), Err(SolverError::AlreadySolved));
        assert_eq!(session.apply_feedback(Pattern::PERFECT), Err(SolverError::AlreadySolved));

        session.reset();
        assert_eq!(session.state(), SessionState::Fresh);
        assert_eq!(session.candidates().len(), lists.answers().len());
    }

    #[test]
    fn manual_guesses_and_undo() {
        let lists = fixtures::lists();
        let table = setup(&lists);
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let mut session = solver.session();
        let answer = lists.answers().word(lists.answers().find("crate").unwrap());

        let manual = Word::new("crane").unwrap();
        let state = session
            .apply_feedback_for(&manual, Pattern::compute(answer, &manual))
            .unwrap();
        assert_eq!(state, SessionState::InProgress);
        let after_one = session.candidates().clone();

        let guess = session.request_guess().unwrap();
        session.apply_feedback(Pattern::compute(answer, guess)).unwrap();

        let undone = session.undo().unwrap();
        assert_eq!(solver.guess_word(undone.guess), guess);
        assert_eq!(session.candidates(), &after_one);
        assert_eq!(session.history().len(), 1);

        session.undo();
        assert_eq!(session.state(), SessionState::Fresh);
        assert_eq!(session.undo(), None);

        let unknown = Word::new("zzzzz").unwrap();
        assert_eq!(
            session.apply_feedback_for(&unknown, Pattern::new(0)),
            Err(SolverError::UnknownWord("zzzzz".into()))
        );
    }

    #[test]
    fn certainty_means_a_single_candidate() {
        let lists = fixtures::lists();
        let table = setup(&lists);

        for config in [
            SolverConfig::new(Objective::WorstCase),
            SolverConfig::default().with_small_set_shortcut(false),
        ] {
            let solver = Solver::new(&lists, &table, config).unwrap();
            for answer in lists.answers() {
                let mut session = solver.session();
                while session.state() != SessionState::Solved {
                    let certain = session.is_certain();
                    assert_eq!(certain, session.candidates().len() == 1);

                    let guess = session.request_guess().unwrap();
                    let pattern = Pattern::compute(answer, guess);
                    if certain {
                        assert!(pattern.is_perfect());
                    } else {
                        assert!(session.remaining_words().any(|word| word != guess));
                    }
                    session.apply_feedback(pattern).unwrap();
                }
                assert!(!session.is_certain());
            }
        }
    }
}
