//! Decision tree command
//!
//! Builds (or loads) the solver's decision tree and summarizes it.

use crate::cache::{CacheStore, load_or_build_tree};
use crate::error::SolverError;
use crate::solver::Solver;
use crate::tree::{DecisionTree, TreeStats};
use std::time::{Duration, Instant};

/// Summary of a decision tree
pub struct TreeSummary {
    pub nodes: usize,
    pub opening: String,
    pub stats: TreeStats,
    pub duration: Duration,
}

impl TreeSummary {
    #[must_use]
    pub fn new(tree: &DecisionTree, solver: &Solver<'_>, duration: Duration) -> Self {
        Self {
            nodes: tree.len(),
            opening: solver.guess_word(tree.root().guess()).text().to_string(),
            stats: TreeStats::from_tree(tree),
            duration,
        }
    }
}

/// Load the tree from `store` when possible, otherwise build and store it
///
/// With no store the tree is always built.
///
/// # Errors
/// Propagates failures of the tree build.
pub fn build_tree<S: CacheStore>(
    store: Option<&S>,
    solver: &Solver<'_>,
) -> Result<(DecisionTree, TreeSummary), SolverError> {
    let start = Instant::now();
    let tree = match store {
        Some(store) => load_or_build_tree(store, solver)?,
        None => DecisionTree::build(solver)?,
    };
    let summary = TreeSummary::new(&tree, solver, start.elapsed());
    Ok((tree, summary))
}
