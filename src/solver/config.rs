//! Solver settings
//!
//! The settings fully determine which guess the solver picks for a given
//! history, so they are part of the identity of a cached decision tree.

use super::objective::Objective;
use serde::{Deserialize, Serialize};

/// First-turn behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opening {
    /// The objective's precomputed opening word, when the guess dictionary has it
    #[default]
    Default,
    /// Always scan the whole guess dictionary, even on the first turn
    Disabled,
    /// A fixed word that must be in the guess dictionary
    Word(String),
}

/// Everything that influences guess selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolverConfig {
    pub objective: Objective,
    /// With exactly two candidates left, guess the first of them
    pub small_set_shortcut: bool,
    pub opening: Opening,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(Objective::default())
    }
}

impl SolverConfig {
    #[must_use]
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            small_set_shortcut: true,
            opening: Opening::Default,
        }
    }

    #[must_use]
    pub const fn with_small_set_shortcut(mut self, enabled: bool) -> Self {
        self.small_set_shortcut = enabled;
        self
    }

    #[must_use]
    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.opening = opening;
        self
    }
}
