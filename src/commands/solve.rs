//! Word solving command
//!
//! Replays the solver against a known answer and records every turn.

use super::parse_word;
use crate::core::Pattern;
use crate::error::SolverError;
use crate::solver::{GuessMetrics, SessionState, Solver};
use crate::tree::MAX_GUESSES;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Score of the guess under the solver's objective
    pub score: f64,
    pub metrics: GuessMetrics,
}

/// Solve a specific word with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 ASCII letters)
/// - The target is not in the answer dictionary
pub fn solve_word(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, SolverError> {
    let target = parse_word(&config.target)?;
    let answer = solver
        .lists()
        .answers()
        .index_of(&target)
        .ok_or_else(|| SolverError::NotAnAnswer(target.text().to_string()))?;

    let scorer = solver.scorer();
    let objective = solver.config().objective;
    let mut session = solver.session();
    let mut guesses = Vec::new();

    while guesses.len() < config.max_guesses {
        let candidates_before = session.candidates().len();
        let guess = session.request_guess()?;
        let guess_index = solver
            .lists()
            .guesses()
            .index_of(guess)
            .ok_or_else(|| SolverError::UnknownWord(guess.text().to_string()))?;

        let score = scorer.score(session.candidates(), guess_index, objective);
        let metrics = scorer.metrics(session.candidates(), guess_index);
        let pattern = solver.table().get(guess_index, answer);
        let state = session.apply_feedback(pattern)?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
            score,
            metrics,
        });

        if state == SessionState::Solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackTable;
    use crate::fixtures;
    use crate::solver::SolverConfig;

    #[test]
    fn solve_word_succeeds() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        let result = solve_word(SolveConfig::new("plate".to_string()), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.first().map(|s| s.word.as_str()), Some("roate"));
        assert_eq!(result.guesses.last().map(|s| s.word.as_str()), Some("plate"));
        assert!(result.guesses.last().unwrap().pattern.is_perfect());
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        let result = solve_word(SolveConfig::new("TRACE".to_string()), &solver).unwrap();
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(result.guesses[0].candidates_before, lists.answers().len());
    }

    #[test]
    fn solve_rejects_bad_targets() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        assert!(matches!(
            solve_word(SolveConfig::new("toolong".to_string()), &solver),
            Err(SolverError::InvalidWord { .. })
        ));
        assert!(matches!(
            solve_word(SolveConfig::new("roate".to_string()), &solver),
            Err(SolverError::NotAnAnswer(word)) if word == "roate"
        ));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        let mut config = SolveConfig::new("where".to_string());
        config.max_guesses = 1;
        let result = solve_word(config, &solver).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
    }
}
