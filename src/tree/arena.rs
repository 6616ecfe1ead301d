//! Flat storage for a precomputed decision tree
//!
//! Nodes live in one `Vec` and refer to their children by index. The root is
//! node 0; a node without children means its guess is certainly the answer.

use crate::core::{Pattern, WordLists};
use crate::error::SolverError;
use crate::feedback::FeedbackTable;
use crate::solver::SolverConfig;
use serde::{Deserialize, Serialize};

/// Index of a node in [`DecisionTree`]
pub type NodeId = u32;

const ARTIFACT: &str = "decision tree";

/// One solver decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub(crate) guess: u32,
    /// The guess is one of the candidates at this node
    pub(crate) can_win: bool,
    /// `(pattern code, child)`, ascending by code, all-Match excluded
    pub(crate) children: Vec<(u8, NodeId)>,
}

impl TreeNode {
    /// Guess-dictionary index of the word to play
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> usize {
        self.guess as usize
    }

    #[inline]
    #[must_use]
    pub const fn can_win(&self) -> bool {
        self.can_win
    }

    /// Certain victory: no feedback other than all-Match is possible
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn child(&self, pattern: Pattern) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&pattern.code(), |&(code, _)| code)
            .ok()
            .map(|slot| self.children[slot].1)
    }

    /// Feedback patterns that continue the game, with their subtrees
    pub fn children(&self) -> impl Iterator<Item = (Pattern, NodeId)> + '_ {
        self.children
            .iter()
            .map(|&(code, child)| (Pattern::new(code), child))
    }

    /// Same node inside an arena where its subtree starts at `offset`
    pub(crate) fn shifted(mut self, offset: NodeId) -> Self {
        for (_, child) in &mut self.children {
            *child += offset;
        }
        self
    }
}

/// Identity of the inputs a tree was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeHeader {
    pub guess_fingerprint: u64,
    pub answer_fingerprint: u64,
    pub guess_count: usize,
    pub answer_count: usize,
    pub config: SolverConfig,
}

impl TreeHeader {
    #[must_use]
    pub fn new(lists: &WordLists, config: SolverConfig) -> Self {
        Self {
            guess_fingerprint: lists.guesses().fingerprint(),
            answer_fingerprint: lists.answers().fingerprint(),
            guess_count: lists.guesses().len(),
            answer_count: lists.answers().len(),
            config,
        }
    }
}

/// Result of following a feedback history from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStep {
    pub node: NodeId,
    /// Guess-dictionary index to play next
    pub guess: usize,
    /// The guess is certainly the answer
    pub is_leaf: bool,
}

/// The solver's complete strategy over every answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub(crate) header: TreeHeader,
    pub(crate) nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub const ROOT: NodeId = 0;

    #[must_use]
    pub const fn header(&self) -> &TreeHeader {
        &self.header
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id as usize)
    }

    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.nodes[Self::ROOT as usize]
    }

    /// Number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a built tree
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        (0..).zip(self.nodes.iter())
    }

    /// Follow `history`, one pattern per turn, from the root
    ///
    /// # Errors
    /// Returns `UnknownHistory` for the first pattern with no matching branch;
    /// an all-Match pattern never continues the walk.
    pub fn lookup(&self, history: &[Pattern]) -> Result<TreeStep, SolverError> {
        let mut id = Self::ROOT;
        for (turn, &pattern) in history.iter().enumerate() {
            id = self
                .node(id)
                .and_then(|node| node.child(pattern))
                .ok_or(SolverError::UnknownHistory { turn, pattern })?;
        }

        let node = self
            .node(id)
            .ok_or(SolverError::UnknownHistory {
                turn: history.len(),
                pattern: Pattern::PERFECT,
            })?;
        Ok(TreeStep {
            node: id,
            guess: node.guess(),
            is_leaf: node.is_leaf(),
        })
    }

    /// Replay the strategy against a known answer
    ///
    /// Returns every `(guess, feedback)` pair up to and including the winning
    /// guess.
    ///
    /// # Errors
    /// Returns `UnknownHistory` if the answer leaves the tree, which only
    /// happens for an answer the tree was not built for.
    pub fn path_for(&self, table: &FeedbackTable, answer: usize) -> Result<Vec<(usize, Pattern)>, SolverError> {
        let mut path = Vec::new();
        let mut id = Self::ROOT;
        loop {
            let node = self.node(id).ok_or(SolverError::UnknownHistory {
                turn: path.len(),
                pattern: Pattern::PERFECT,
            })?;
            let pattern = table.get(node.guess(), answer);
            path.push((node.guess(), pattern));
            if pattern.is_perfect() {
                return Ok(path);
            }
            id = node.child(pattern).ok_or(SolverError::UnknownHistory {
                turn: path.len() - 1,
                pattern,
            })?;
        }
    }

    /// Check the tree belongs to `lists` and `config` and is well formed
    ///
    /// # Errors
    /// Returns `StaleCache` describing the first mismatch.
    pub fn validate(&self, lists: &WordLists, config: &SolverConfig) -> Result<(), SolverError> {
        self.validate_lists(lists)?;
        if &self.header.config != config {
            return Err(stale("built with different solver settings".to_string()));
        }
        Ok(())
    }

    /// Like [`Self::validate`], ignoring the solver settings
    ///
    /// # Errors
    /// Returns `StaleCache` describing the first mismatch.
    pub fn validate_lists(&self, lists: &WordLists) -> Result<(), SolverError> {
        let expected = TreeHeader::new(lists, self.header.config.clone());
        if self.header != expected {
            return Err(stale("built from different dictionaries".to_string()));
        }
        if self.nodes.is_empty() {
            return Err(stale("no nodes".to_string()));
        }

        let node_count = self.nodes.len();
        for (id, node) in self.nodes() {
            if node.guess() >= self.header.guess_count {
                return Err(stale(format!("node {id} guesses out of range")));
            }
            let ordered = node.children.windows(2).all(|w| w[0].0 < w[1].0);
            let in_range = node.children.iter().all(|&(code, child)| {
                Pattern::from_code(code).is_some_and(|p| !p.is_perfect())
                    && child > id
                    && (child as usize) < node_count
            });
            if !ordered || !in_range {
                return Err(stale(format!("node {id} has malformed children")));
            }
        }
        Ok(())
    }
}

fn stale(reason: String) -> SolverError {
    SolverError::StaleCache {
        artifact: ARTIFACT,
        reason,
    }
}
