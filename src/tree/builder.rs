//! Decision tree construction
//!
//! The builder plays the solver against every answer at once: at each node it
//! asks for the guess, partitions the candidates by feedback and recurses on
//! every bucket that does not end the game. Sibling subtrees are independent,
//! so each is built in parallel into its own small arena and then spliced into
//! the parent's with its indices shifted.

use super::arena::{DecisionTree, NodeId, TreeHeader, TreeNode};
use super::stats::{MAX_GUESSES, TreeStats};
use crate::error::SolverError;
use crate::solver::{CandidateSet, Solver};
use log::{info, warn};
use rayon::prelude::*;
use std::time::Instant;

impl DecisionTree {
    /// Build the solver's full strategy
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::WordLists;
    /// use wordle_oracle::feedback::FeedbackTable;
    /// use wordle_oracle::solver::{Solver, SolverConfig};
    /// use wordle_oracle::tree::DecisionTree;
    /// use wordle_oracle::wordlists::loader::words_from_slice;
    ///
    /// let lists = WordLists::single(words_from_slice(&["abcde", "edcba", "aaaaa"])).unwrap();
    /// let table = FeedbackTable::build(lists.guesses(), lists.answers());
    /// let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
    ///
    /// let tree = DecisionTree::build(&solver).unwrap();
    /// assert_eq!(tree.path_for(&table, 2).unwrap().len(), 2);
    /// ```
    ///
    /// # Errors
    /// Propagates solver failures; with consistent lists and table there are none.
    pub fn build(solver: &Solver<'_>) -> Result<Self, SolverError> {
        let start = Instant::now();
        let nodes = build_shard(solver, solver.all_candidates(), 0)?;
        let tree = Self {
            header: TreeHeader::new(solver.lists(), solver.config().clone()),
            nodes,
        };

        let stats = TreeStats::from_tree(&tree);
        info!(
            "built decision tree with {} nodes in {:.2?} (mean {:.3} guesses, max {})",
            tree.len(),
            start.elapsed(),
            stats.mean(),
            stats.max()
        );
        if stats.max() > MAX_GUESSES {
            warn!(
                "{} answers need more than {MAX_GUESSES} guesses",
                stats.exceeding(MAX_GUESSES)
            );
        }
        Ok(tree)
    }
}

/// Subtree for `candidates` at `turn`, rooted at index 0
fn build_shard(solver: &Solver<'_>, candidates: CandidateSet, turn: usize) -> Result<Vec<TreeNode>, SolverError> {
    let guess = solver.choose_guess(&candidates, turn)?;
    let buckets = candidates.partition(solver.table(), guess);
    let can_win = buckets.iter().any(|(pattern, _)| pattern.is_perfect());

    let shards = buckets
        .into_par_iter()
        .filter(|(pattern, _)| !pattern.is_perfect())
        .map(|(pattern, bucket)| build_shard(solver, bucket, turn + 1).map(|shard| (pattern.code(), shard)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut root = TreeNode {
        guess: index(guess),
        can_win,
        children: Vec::with_capacity(shards.len()),
    };
    let mut rest = Vec::new();
    for (code, shard) in shards {
        let offset = index(1 + rest.len());
        root.children.push((code, offset));
        rest.extend(shard.into_iter().map(|node| node.shifted(offset)));
    }

    let mut nodes = Vec::with_capacity(1 + rest.len());
    nodes.push(root);
    nodes.append(&mut rest);
    Ok(nodes)
}

const fn index(value: usize) -> NodeId {
    value as NodeId
}
