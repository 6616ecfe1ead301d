//! Guess selection and game sessions
//!
//! The [`Solver`] bundles word lists, their feedback table and a
//! [`SolverConfig`]; [`GameSession`] plays one game with its advice.

mod cancel;
mod candidates;
mod config;
mod engine;
mod objective;
mod scorer;
mod session;

pub use cancel::Cancellation;
pub use candidates::CandidateSet;
pub use config::{Opening, SolverConfig};
pub use engine::Solver;
pub use objective::{BucketCounts, Objective, shannon_entropy};
pub use scorer::{GuessMetrics, GuessScorer};
pub use session::{GameSession, SessionState, Turn};
