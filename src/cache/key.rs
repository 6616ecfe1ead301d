//! Identity of persisted artifacts

use crate::core::WordLists;
use crate::solver::SolverConfig;
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Names one artifact built from specific inputs
///
/// Keys embed both dictionary fingerprints (and the solver settings, for
/// trees), so changed inputs simply miss the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    stem: String,
}

impl CacheKey {
    #[must_use]
    pub fn feedback_table(lists: &WordLists) -> Self {
        Self {
            stem: format!(
                "feedback-{:016x}-{:016x}",
                lists.guesses().fingerprint(),
                lists.answers().fingerprint()
            ),
        }
    }

    #[must_use]
    pub fn decision_tree(lists: &WordLists, config: &SolverConfig) -> Self {
        let mut hasher = FxHasher::default();
        config.hash(&mut hasher);
        Self {
            stem: format!(
                "tree-{}-{:016x}-{:016x}-{:016x}",
                config.objective.name(),
                lists.guesses().fingerprint(),
                lists.answers().fingerprint(),
                hasher.finish()
            ),
        }
    }

    /// File-system safe name, without extension
    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stem)
    }
}
