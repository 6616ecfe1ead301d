//! Precomputed decision trees
//!
//! A [`DecisionTree`] records the guess the solver makes after every feedback
//! history that can occur, so a game becomes one child lookup per turn.

mod arena;
mod builder;
mod cursor;
mod stats;

pub use arena::{DecisionTree, NodeId, TreeHeader, TreeNode, TreeStep};
pub use cursor::TreeCursor;
pub use stats::{MAX_GUESSES, TreeStats};
