//! Load-or-build entry points
//!
//! A missing, unreadable or stale entry is never fatal: the artifact is
//! rebuilt from the inputs and stored again. Failing to store only costs the
//! next run a rebuild.

use super::key::CacheKey;
use super::store::CacheStore;
use crate::core::WordLists;
use crate::error::SolverError;
use crate::feedback::FeedbackTable;
use crate::solver::Solver;
use crate::tree::DecisionTree;
use log::{info, warn};

/// Feedback table for `lists`, from `store` when a valid copy exists
pub fn load_or_build_table<S: CacheStore>(store: &S, lists: &WordLists) -> FeedbackTable {
    let key = CacheKey::feedback_table(lists);
    if let Some(table) = cached(store, &key, |table: &FeedbackTable| {
        table.validate(lists.guesses(), lists.answers())
    }) {
        return table;
    }

    let table = FeedbackTable::build(lists.guesses(), lists.answers());
    persist(store, &key, &table);
    table
}

/// Decision tree for `solver`, from `store` when a valid copy exists
///
/// # Errors
/// Propagates failures of the tree build itself.
pub fn load_or_build_tree<S: CacheStore>(store: &S, solver: &Solver<'_>) -> Result<DecisionTree, SolverError> {
    let key = CacheKey::decision_tree(solver.lists(), solver.config());
    if let Some(tree) = cached(store, &key, |tree: &DecisionTree| {
        tree.validate(solver.lists(), solver.config())
    }) {
        return Ok(tree);
    }

    let tree = DecisionTree::build(solver)?;
    persist(store, &key, &tree);
    Ok(tree)
}

fn cached<S, T>(store: &S, key: &CacheKey, validate: impl FnOnce(&T) -> Result<(), SolverError>) -> Option<T>
where
    S: CacheStore,
    T: serde::de::DeserializeOwned,
{
    match store.load::<T>(key) {
        Ok(Some(value)) => match validate(&value) {
            Ok(()) => {
                info!("loaded {key} from cache");
                Some(value)
            }
            Err(err) => {
                warn!("{err}; rebuilding");
                None
            }
        },
        Ok(None) => {
            info!("{key} not cached; building");
            None
        }
        Err(err) => {
            warn!("cannot load {key}: {err}; rebuilding");
            None
        }
    }
}

fn persist<S: CacheStore, T: serde::Serialize>(store: &S, key: &CacheKey, value: &T) {
    if let Err(err) = store.store(key, value) {
        warn!("cannot store {key}: {err}");
    }
}
