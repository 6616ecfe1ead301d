//! Word lists for Wordle solving
//!
//! Loads the guess and answer dictionaries from text files.

pub mod loader;

use crate::core::WordLists;
use crate::error::SolverError;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure to load a pair of dictionaries
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Invalid(#[from] SolverError),
}

/// Load a guess list and an optional answer list
///
/// Without an answer list every guess can be the answer.
///
/// # Errors
/// Returns `Read` for unreadable files and `Invalid` for empty dictionaries.
pub fn load_lists(guesses: &Path, answers: Option<&Path>) -> Result<WordLists, LoadError> {
    let read = |path: &Path| {
        loader::load_from_file(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })
    };

    let guess_words = read(guesses)?;
    let lists = match answers {
        Some(path) => WordLists::new(guess_words, read(path)?)?,
        None => WordLists::single(guess_words)?,
    };
    Ok(lists)
}
