//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, TreeSummary};
use crate::tree::{MAX_GUESSES, TreeStats};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.3}", step.score);
            println!("  Worst case: {} candidates", step.metrics.worst_case);
            println!("  Expected:   {:.2} candidates", step.metrics.expected_remaining);
            println!("  Entropy:    {:.3} bits", step.metrics.entropy);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Worst case:  {} candidates remain",
        format!("{:.0}", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:    {} candidates remain",
        format!("{:.3}", result.expected).bright_yellow()
    );
    println!(
        "   Entropy:     [{}] {:.3} bits",
        entropy_bar(result.metrics.entropy, 30).green(),
        result.metrics.entropy
    );
    println!("   Patterns:    {}", result.metrics.buckets);
    println!(
        "   Can win:     {}",
        if result.is_answer { "yes" } else { "no" }
    );

    println!("\n🧩 {}", "Largest buckets:".bright_cyan().bold());
    for (pattern, size) in &result.largest_buckets {
        println!("   {} {pattern}  {size:5}", pattern.to_emoji());
    }

    if !result.best.is_empty() {
        println!("\n🏆 {}", "Best openings:".bright_cyan().bold());
        for (rank, (word, score)) in result.best.iter().enumerate() {
            println!("   {:2}. {} {score:.3}", rank + 1, word.to_uppercase());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    print_summary_lines(&result.stats);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    print_distribution(&result.stats);

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            format!("Over {MAX_GUESSES} guesses:").red().bold(),
            result.failures.join(", ").to_uppercase()
        );
    }
}

/// Print a decision tree summary
pub fn print_tree_summary(summary: &TreeSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DECISION TREE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🌳 Nodes:            {}", summary.nodes);
    println!(
        "   Opening:          {}",
        summary.opening.to_uppercase().bright_white().bold()
    );
    println!("   Ready in:         {:.2}s", summary.duration.as_secs_f64());
    print_summary_lines(&summary.stats);
    print_distribution(&summary.stats);
}

fn print_summary_lines(stats: &TreeStats) {
    let [q1, median, q3] = stats.quartiles();
    println!("   Answers:          {}", stats.answers());
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.mean()).bright_yellow().bold()
    );
    println!("   Best case:        {}", stats.min().to_string().green());
    println!("   Worst case:       {}", stats.max().to_string().yellow());
    println!("   Quartiles:        {q1} / {median} / {q3}");
}

/// Print the guess-count histogram
pub fn print_distribution(stats: &TreeStats) {
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let answers = stats.answers().max(1);
    let max_count = stats.distribution().values().copied().max().unwrap_or(1);

    for (&guesses, &count) in stats.distribution() {
        let pct = count as f64 / answers as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        let label = if guesses > MAX_GUESSES {
            guesses.to_string().red().to_string()
        } else {
            guesses.to_string()
        };
        println!("  {label} guesses: {bar} {count:4} ({pct:5.1}%)");
    }
}
