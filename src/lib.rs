//! Wordle Oracle
//!
//! A Wordle solver built around an exhaustively precomputed feedback table, a
//! worst-case / expected-size guess optimizer and an optional decision tree that
//! turns every turn of a game into an O(depth) lookup.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_oracle::core::{Pattern, Word};
//!
//! let answer = Word::new("stoop").unwrap();
//! let guess = Word::new("knoll").unwrap();
//!
//! // Only one O of the guess is matched; the other is not reported present.
//! let pattern = Pattern::compute(&answer, &guess);
//! assert_eq!(pattern.to_string(), "BBGBB");
//! ```

// Core domain types
pub mod core;

// Errors
pub mod error;

// Precomputed guess x answer feedback
pub mod feedback;

// Guess scoring, sessions
pub mod solver;

// Decision tree precomputation and lookup
pub mod tree;

// Persistence collaborator
pub mod cache;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{CacheError, SolverError};
