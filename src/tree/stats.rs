//! Guess-count statistics of a decision tree

use super::arena::{DecisionTree, NodeId};
use std::collections::BTreeMap;

/// Guesses allowed in a standard game
pub const MAX_GUESSES: usize = 6;

/// How many guesses the tree needs across all answers
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    /// Guesses needed → number of answers
    distribution: BTreeMap<usize, usize>,
    answers: usize,
}

impl TreeStats {
    /// Every answer is won at the unique node where its own word is guessed,
    /// one guess deeper than the node's depth.
    #[must_use]
    pub fn from_tree(tree: &DecisionTree) -> Self {
        let mut distribution = BTreeMap::new();
        let mut stack: Vec<(NodeId, usize)> = vec![(DecisionTree::ROOT, 1)];
        while let Some((id, guesses)) = stack.pop() {
            let Some(node) = tree.node(id) else { continue };
            if node.can_win() {
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            stack.extend(node.children().map(|(_, child)| (child, guesses + 1)));
        }
        Self::from_distribution(distribution)
    }

    /// Stats from observed guess counts
    #[must_use]
    pub fn from_counts(counts: impl IntoIterator<Item = usize>) -> Self {
        let mut distribution = BTreeMap::new();
        for count in counts {
            *distribution.entry(count).or_insert(0) += 1;
        }
        Self::from_distribution(distribution)
    }

    fn from_distribution(distribution: BTreeMap<usize, usize>) -> Self {
        let answers = distribution.values().sum();
        Self {
            distribution,
            answers,
        }
    }

    #[must_use]
    pub const fn distribution(&self) -> &BTreeMap<usize, usize> {
        &self.distribution
    }

    /// Number of answers covered
    #[must_use]
    pub const fn answers(&self) -> usize {
        self.answers
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.answers == 0 {
            return 0.0;
        }
        let total: usize = self.distribution.iter().map(|(&g, &n)| g * n).sum();
        total as f64 / self.answers as f64
    }

    #[must_use]
    pub fn min(&self) -> usize {
        self.distribution.keys().next().copied().unwrap_or(0)
    }

    /// Depth of the deepest win
    #[must_use]
    pub fn max(&self) -> usize {
        self.distribution.keys().next_back().copied().unwrap_or(0)
    }

    /// Answers needing more than `limit` guesses
    #[must_use]
    pub fn exceeding(&self, limit: usize) -> usize {
        self.distribution.range(limit + 1..).map(|(_, &n)| n).sum()
    }

    /// 25th, 50th and 75th percentiles
    ///
    /// Uses the exclusive method: cut points interpolate between the sorted
    /// counts at positions i·(n+1)/4.
    #[must_use]
    pub fn quartiles(&self) -> [f64; 3] {
        let sorted: Vec<usize> = self
            .distribution
            .iter()
            .flat_map(|(&g, &n)| std::iter::repeat_n(g, n))
            .collect();

        match sorted.len() {
            0 => [0.0; 3],
            1 => [sorted[0] as f64; 3],
            len => {
                let m = len + 1;
                [1, 2, 3].map(|i| {
                    let j = (i * m / 4).clamp(1, len - 1);
                    let delta = (i * m) as f64 - (j * 4) as f64;
                    (sorted[j - 1] as f64 * (4.0 - delta) + sorted[j] as f64 * delta) / 4.0
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackTable;
    use crate::fixtures;
    use crate::solver::{Solver, SolverConfig};

    #[test]
    fn counts_every_answer_once() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let tree = DecisionTree::build(&solver).unwrap();

        let stats = TreeStats::from_tree(&tree);
        assert_eq!(stats.answers(), lists.answers().len());

        let replayed = TreeStats::from_counts(
            (0..lists.answers().len()).map(|answer| tree.path_for(&table, answer).unwrap().len()),
        );
        assert_eq!(stats, replayed);
        assert!(stats.min() >= 1);
        assert!(stats.max() <= MAX_GUESSES);
    }

    #[test]
    fn summary_numbers() {
        let stats = TreeStats::from_counts([2, 3, 3, 4, 4, 4, 5]);
        assert_eq!(stats.answers(), 7);
        assert!((stats.mean() - 25.0 / 7.0).abs() < 1e-12);
        assert_eq!(stats.min(), 2);
        assert_eq!(stats.max(), 5);
        assert_eq!(stats.exceeding(4), 1);
        assert_eq!(stats.quartiles(), [3.0, 4.0, 4.0]);
    }

    #[test]
    fn quartiles_interpolate() {
        // Positions 1.25, 2.5 and 3.75 of [1, 2, 3, 4]
        let stats = TreeStats::from_counts([1, 2, 3, 4]);
        assert_eq!(stats.quartiles(), [1.25, 2.5, 3.75]);
    }

    #[test]
    fn empty_and_single() {
        let empty = TreeStats::from_counts(std::iter::empty());
        assert_eq!(empty.quartiles(), [0.0; 3]);
        assert!(empty.mean().abs() < f64::EPSILON);

        let single = TreeStats::from_counts([3]);
        assert_eq!(single.quartiles(), [3.0; 3]);
    }
}
