//! Benchmark command
//!
//! Plays live sessions, without a decision tree, against a seeded random
//! sample of answers.

use crate::core::Pattern;
use crate::error::SolverError;
use crate::solver::{SessionState, Solver};
use crate::tree::{MAX_GUESSES, TreeStats};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub stats: TreeStats,
    /// Answers that needed more than the allowed number of guesses
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Sample `count` answers with `seed` and solve each from scratch
///
/// # Errors
/// Propagates solver failures; with consistent lists and table there are none.
pub fn run_benchmark(solver: &Solver<'_>, count: usize, seed: u64) -> Result<BenchmarkResult, SolverError> {
    let answers = solver.lists().answers();
    let mut rng = StdRng::seed_from_u64(seed);
    let sample = index::sample(&mut rng, answers.len(), count.min(answers.len()));

    let start = Instant::now();
    let mut counts = Vec::with_capacity(sample.len());
    let mut failures = Vec::new();

    for answer in sample {
        let target = answers.word(answer);
        let mut session = solver.session();
        let mut guesses = 0;
        loop {
            let guess = session.request_guess()?;
            guesses += 1;
            if session.apply_feedback(Pattern::compute(target, guess))? == SessionState::Solved {
                break;
            }
        }
        if guesses > MAX_GUESSES {
            failures.push(target.text().to_string());
        }
        counts.push(guesses);
    }

    let duration = start.elapsed();
    let words_per_second = if duration.is_zero() {
        0.0
    } else {
        counts.len() as f64 / duration.as_secs_f64()
    };

    Ok(BenchmarkResult {
        stats: TreeStats::from_counts(counts),
        failures,
        duration,
        words_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::feedback::FeedbackTable;
    use crate::solver::SolverConfig;

    #[test]
    fn benchmark_runs() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        let result = run_benchmark(&solver, 10, 42).unwrap();

        assert_eq!(result.stats.answers(), 10);
        assert!(result.stats.mean() >= 1.0);
        assert!(result.stats.max() <= MAX_GUESSES);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn benchmark_sample_is_capped_and_seeded() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();

        let all = run_benchmark(&solver, 1000, 1).unwrap();
        assert_eq!(all.stats.answers(), lists.answers().len());

        let a = run_benchmark(&solver, 5, 9).unwrap();
        let b = run_benchmark(&solver, 5, 9).unwrap();
        assert_eq!(a.stats, b.stats);
    }
}
