//! Error types shared by the solver core and the cache collaborator

use crate::core::{DictionaryKind, Pattern, WordError};
use thiserror::Error;

/// Errors surfaced by the feedback, scoring, session and tree layers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Answer and guess have a different number of letters
    #[error("answer and guess differ in length ({answer} vs {guess} letters)")]
    LengthMismatch { answer: usize, guess: usize },

    /// Text that cannot be turned into a [`crate::core::Word`]
    #[error("invalid word '{text}': {source}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },

    /// A well-formed word that the guess dictionary does not contain
    #[error("'{0}' is not in the guess dictionary")]
    UnknownWord(String),

    /// A well-formed word that can never be the answer
    #[error("'{0}' is not in the answer dictionary")]
    NotAnAnswer(String),

    /// Feedback that no remaining candidate can produce for the guess made.
    /// The game state is left untouched.
    #[error("feedback {pattern} is impossible for guess '{guess}'")]
    InvalidFeedback { guess: String, pattern: Pattern },

    /// A feedback history that leaves the decision tree
    #[error("feedback {pattern} at turn {turn} matches no remaining answer")]
    UnknownHistory { turn: usize, pattern: Pattern },

    /// Filtering produced no candidates; an invalid feedback slipped through
    #[error("no candidates remain")]
    EmptyCandidateSet,

    /// Configuration error reported before any game starts
    #[error("the {0} dictionary is empty")]
    EmptyDictionary(DictionaryKind),

    /// A persisted artifact built from other dictionaries or settings
    #[error("cached {artifact} is stale: {reason}")]
    StaleCache {
        artifact: &'static str,
        reason: String,
    },

    /// Feedback arrived before a guess was requested
    #[error("no guess is pending; request a guess first")]
    NoPendingGuess,

    /// The game already ended with a correct guess
    #[error("the game is already solved")]
    AlreadySolved,

    /// A bounded guess scan was cancelled or ran past its deadline
    #[error("guess search cancelled")]
    Cancelled,
}

/// Errors from the persistence collaborator
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache entry is unreadable: {0}")]
    Format(#[from] serde_json::Error),
}
