//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod solve;
pub mod test_all;
pub mod tree;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use interactive::{Advisor, PlaySummary, run_interactive};
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
pub use tree::{TreeSummary, build_tree};

use crate::core::Word;
use crate::error::SolverError;

/// Parse user-supplied text as a word
fn parse_word(text: &str) -> Result<Word, SolverError> {
    Word::new(text).map_err(|source| SolverError::InvalidWord {
        text: text.to_string(),
        source,
    })
}
