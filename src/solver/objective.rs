//! Guess objectives over a feedback partition
//!
//! A guess splits the candidates into buckets, one per feedback pattern. The
//! bucket of the all-match pattern holds at most the guess itself and ends the
//! game, so it counts as zero remaining candidates.

use crate::core::{PATTERN_COUNT, Pattern};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bucket sizes indexed by pattern code
pub type BucketCounts = [u32; PATTERN_COUNT];

/// Scoring criterion used to rank guesses; lower is better for both
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    /// Minimize the largest bucket (minimax)
    WorstCase,
    /// Minimize the expected bucket size under a uniform prior
    ///
    /// Computed as Σ n_k²/N over every bucket except the all-match one, which
    /// leaves nothing to solve. Counting that bucket as well, as a plain
    /// Σ n_k²/N does, would score a guess among two candidates at 1.0 instead
    /// of 0.5 and would slightly favor guesses that cannot win.
    #[default]
    Expected,
}

impl Objective {
    /// Constant opening word used instead of a full first-turn scan
    ///
    /// These are the best first guesses for the official Wordle lists.
    #[must_use]
    pub const fn default_opening(self) -> &'static str {
        match self {
            Self::WorstCase => "raise",
            Self::Expected => "roate",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WorstCase => "worst-case",
            Self::Expected => "expected",
        }
    }

    /// Exact integer ranking key: max n_k, or Σ n_k²
    ///
    /// For a fixed candidate set the Σ n_k² form orders guesses exactly as
    /// Σ n_k²/N does, without floating-point ties.
    #[must_use]
    pub fn rank(self, counts: &BucketCounts) -> u64 {
        let open = open_buckets(counts);
        match self {
            Self::WorstCase => open.max().unwrap_or(0),
            Self::Expected => open.map(|n| n * n).sum(),
        }
    }

    /// Score in candidate units: largest bucket, or expected remaining candidates
    #[must_use]
    pub fn score(self, counts: &BucketCounts) -> f64 {
        let rank = self.rank(counts) as f64;
        match self {
            Self::WorstCase => rank,
            Self::Expected => {
                let total: u32 = counts.iter().sum();
                if total == 0 { 0.0 } else { rank / f64::from(total) }
            }
        }
    }
}

/// Sizes of every bucket that does not end the game
fn open_buckets(counts: &BucketCounts) -> impl Iterator<Item = u64> + '_ {
    counts
        .iter()
        .enumerate()
        .filter(|&(code, _)| code != usize::from(Pattern::PERFECT.code()))
        .map(|(_, &n)| u64::from(n))
}

/// Shannon entropy of a partition in bits
///
/// H = -Σ p * log₂(p), taken over all buckets including the all-match one.
#[must_use]
pub fn shannon_entropy(counts: &BucketCounts) -> f64 {
    let total = f64::from(counts.iter().sum::<u32>());
    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "worst-case" | "worst" | "minimax" => Ok(Self::WorstCase),
            "expected" | "average" | "mean" => Ok(Self::Expected),
            other => Err(format!(
                "unknown objective '{other}' (use worst-case or expected)"
            )),
        }
    }
}
