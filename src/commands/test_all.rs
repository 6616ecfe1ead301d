//! Test all answers - comprehensive solver evaluation
//!
//! Replays the decision tree against every answer and gathers statistics.

use crate::core::WordLists;
use crate::error::SolverError;
use crate::feedback::FeedbackTable;
use crate::tree::{DecisionTree, MAX_GUESSES, TreeStats};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub stats: TreeStats,
    /// Hardest answers with their guess counts, most guesses first
    pub worst_words: Vec<(String, usize)>,
    pub first_guess: String,
    pub total_time: Duration,
}

/// Run every answer (or the first `limit`) through the tree
///
/// # Errors
/// Returns `UnknownHistory` if the tree does not cover an answer, which means
/// it was built for other dictionaries.
pub fn run_test_all(
    tree: &DecisionTree,
    table: &FeedbackTable,
    lists: &WordLists,
    limit: Option<usize>,
) -> Result<TestAllStatistics, SolverError> {
    let total = limit.map_or(lists.answers().len(), |n| n.min(lists.answers().len()));

    println!("🎯 Testing {total} words...");

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut counts = Vec::with_capacity(total);
    let mut results = Vec::with_capacity(total);

    for answer in 0..total {
        let guesses = tree.path_for(table, answer)?.len();
        counts.push(guesses);
        results.push((lists.answers().word(answer).text().to_string(), guesses));

        if answer % 50 == 0 {
            let avg = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            pb.set_message(format!("Avg: {avg:.3}"));
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete!");

    let mut worst_words: Vec<(String, usize)> = results
        .into_iter()
        .filter(|&(_, guesses)| guesses >= 5)
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    Ok(TestAllStatistics {
        stats: TreeStats::from_counts(counts),
        worst_words,
        first_guess: lists.guesses().word(tree.root().guess()).text().to_string(),
        total_time: start.elapsed(),
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let answers = stats.stats.answers();
    let failed = stats.stats.exceeding(MAX_GUESSES);

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {answers}");
    println!("  First guess:         {}", stats.first_guess.to_uppercase().bright_white().bold());
    println!(
        "  Within {MAX_GUESSES} guesses:    {} {}",
        answers - failed,
        format!("({:.1}%)", percent(answers - failed, answers)).green()
    );
    if failed > 0 {
        println!(
            "  Over {MAX_GUESSES} guesses:      {} {}",
            failed,
            format!("({:.1}%)", percent(failed, answers)).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.stats.mean()).bright_yellow().bold()
    );
    println!("  Total time:          {:.2}s", stats.total_time.as_secs_f64());

    crate::output::print_distribution(&stats.stats);

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5+ guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::solver::{Solver, SolverConfig};

    #[test]
    fn covers_every_answer() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let tree = DecisionTree::build(&solver).unwrap();

        let result = run_test_all(&tree, &table, &lists, None).unwrap();
        assert_eq!(result.stats, TreeStats::from_tree(&tree));
        assert_eq!(result.first_guess, "roate");
        assert!(result.worst_words.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn limit_caps_the_run() {
        let lists = fixtures::lists();
        let table = FeedbackTable::build(lists.guesses(), lists.answers());
        let solver = Solver::new(&lists, &table, SolverConfig::default()).unwrap();
        let tree = DecisionTree::build(&solver).unwrap();

        let result = run_test_all(&tree, &table, &lists, Some(4)).unwrap();
        assert_eq!(result.stats.answers(), 4);
        let everything = run_test_all(&tree, &table, &lists, Some(1000)).unwrap();
        assert_eq!(everything.stats.answers(), lists.answers().len());
    }
}
