//! Exhaustively precomputed feedback

mod table;

pub use table::FeedbackTable;
