//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};
use colored::Colorize;

/// A guess with each letter colored by its feedback, like the game shows it
#[must_use]
pub fn colored_guess(word: &str, pattern: Pattern) -> String {
    word.to_uppercase()
        .chars()
        .zip(pattern.marks())
        .map(|(letter, mark)| {
            let cell = format!(" {letter} ");
            match mark {
                Mark::Match => cell.black().on_green().to_string(),
                Mark::Present => cell.black().on_yellow().to_string(),
                Mark::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: the ratio is clamped to [0, 1]
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar against the largest possible split
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = (crate::core::PATTERN_COUNT as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full_and_overflowing() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 3), "░░░");
    }

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        colored::control::set_override(false);
        let pattern: Pattern = "GYBBB".parse().unwrap();
        assert_eq!(colored_guess("crane", pattern), " C  R  A  N  E ");
    }
}
