//! Word analysis command
//!
//! Scores one word as an opening guess against the full answer set.

use super::parse_word;
use crate::core::Pattern;
use crate::error::SolverError;
use crate::solver::{GuessMetrics, Objective, Solver};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub total_candidates: usize,
    pub worst_case: f64,
    pub expected: f64,
    pub metrics: GuessMetrics,
    /// The word itself could be the answer
    pub is_answer: bool,
    /// Largest feedback buckets, biggest first
    pub largest_buckets: Vec<(Pattern, usize)>,
    /// Best opening guesses under the solver's objective
    pub best: Vec<(String, f64)>,
}

/// Analyze a guess against every answer
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 ASCII letters)
/// - The word is not in the guess dictionary
pub fn analyze_word(word: &str, solver: &Solver<'_>, top: usize) -> Result<AnalysisResult, SolverError> {
    let parsed = parse_word(word)?;
    let lists = solver.lists();
    let guess = lists
        .guesses()
        .index_of(&parsed)
        .ok_or_else(|| SolverError::UnknownWord(parsed.text().to_string()))?;

    let scorer = solver.scorer();
    let candidates = solver.all_candidates();

    let mut largest_buckets: Vec<(Pattern, usize)> = candidates
        .partition(solver.table(), guess)
        .into_iter()
        .map(|(pattern, bucket)| (pattern, bucket.len()))
        .collect();
    largest_buckets.sort_by_key(|&(pattern, size)| (std::cmp::Reverse(size), pattern));
    largest_buckets.truncate(5);

    let best = scorer
        .top_guesses(&candidates, solver.config().objective, top)
        .into_iter()
        .map(|(index, score)| (lists.guesses().word(index).text().to_string(), score))
        .collect();

    Ok(AnalysisResult {
        word: parsed.text().to_string(),
        total_candidates: candidates.len(),
        worst_case: scorer.score(&candidates, guess, Objective::WorstCase),
        expected: scorer.score(&candidates, guess, Objective::Expected),
        metrics: scorer.metrics(&candidates, guess),
        is_answer: lists.answers().index_of(&parsed).is_some(),
        largest_buckets,
        best,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackTable;
    use crate::fixtures;
    use crate::solver::SolverConfig;

    #[test]
    fn analyze_valid_word() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        let result = analyze_word("Slate", &solver, 3).unwrap();

        assert_eq!(result.word, "slate");
        assert_eq!(result.total_candidates, lists.answers().len());
        assert!(result.is_answer);
        assert!(result.expected <= result.worst_case);
        assert!(result.metrics.entropy > 0.0);
        assert_eq!(result.best.len(), 3);
        assert!(result.largest_buckets.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(result.largest_buckets[0].1 as f64, result.worst_case.max(1.0));
    }

    #[test]
    fn analyze_unknown_word() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        assert_eq!(
            analyze_word("zzzzz", &solver, 3).err(),
            Some(SolverError::UnknownWord("zzzzz".into()))
        );
        assert!(analyze_word("abc", &solver, 3).is_err());
    }
}
