//! Persistence of precomputed artifacts
//!
//! Feedback tables and decision trees are stored as JSON under keys that
//! encode the inputs they were built from. Stores are passed in explicitly;
//! nothing is cached globally.

mod key;
mod load;
mod store;

pub use key::CacheKey;
pub use load::{load_or_build_table, load_or_build_tree};
pub use store::{CacheStore, FileStore, MemoryStore};
