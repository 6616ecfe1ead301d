//! Wordle Oracle - CLI
//!
//! Interactive assistant, replays and statistics for a Wordle solver driven by
//! a precomputed feedback table and decision tree.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_oracle::{
    cache::{FileStore, load_or_build_table},
    commands::{
        SolveConfig, analyze_word, build_tree, print_test_all_statistics, run_benchmark,
        run_interactive, run_test_all, solve_word,
    },
    core::WordLists,
    feedback::FeedbackTable,
    output::{print_analysis_result, print_benchmark_result, print_solve_result, print_tree_summary},
    solver::{Objective, Opening, Solver, SolverConfig},
    tree::TreeCursor,
    wordlists::load_lists,
};

#[derive(Parser)]
#[command(
    name = "wordle_oracle",
    about = "Wordle solver with worst-case and expected-size guess selection and a precomputed decision tree",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess dictionary, one word per line
    #[arg(short, long, global = true, default_value = "dictionaries/wordle-allowed.txt")]
    guesses: PathBuf,

    /// Answer dictionary (default: every guess can be the answer)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Objective: expected (default) or worst-case
    #[arg(short, long, global = true, default_value = "expected")]
    objective: Objective,

    /// Directory for cached feedback tables and decision trees
    #[arg(long, global = true, default_value = "cache")]
    cache_dir: PathBuf,

    /// Neither read nor write the cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// Scan all guesses even when only two candidates remain
    #[arg(long, global = true)]
    no_small_set_shortcut: bool,

    /// Fixed first guess instead of the objective's default opening
    #[arg(long, global = true, conflicts_with = "no_opening")]
    opening: Option<String>,

    /// Scan all guesses on the first turn too
    #[arg(long, global = true)]
    no_opening: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Play {
        /// Compute each guess live instead of walking the decision tree
        #[arg(long)]
        live: bool,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores for every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a word as a first guess
    Analyze {
        /// Word to analyze
        word: String,

        /// How many of the best openings to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Build (or load) the decision tree and print its statistics
    BuildTree,

    /// Run every answer through the decision tree
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Solve a random sample of answers live
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for the sample
        #[arg(short, long, default_value = "2022")]
        seed: u64,
    },
}

/// Where cached artifacts live
struct CacheConfig {
    dir: PathBuf,
    enabled: bool,
}

impl CacheConfig {
    fn store(&self) -> Option<FileStore> {
        self.enabled.then(|| FileStore::new(&self.dir))
    }
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        let opening = match (&self.opening, self.no_opening) {
            (_, true) => Opening::Disabled,
            (Some(word), false) => Opening::Word(word.clone()),
            (None, false) => Opening::Default,
        };
        SolverConfig::new(self.objective)
            .with_small_set_shortcut(!self.no_small_set_shortcut)
            .with_opening(opening)
    }

    fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            dir: self.cache_dir.clone(),
            enabled: !self.no_cache,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lists = load_lists(&cli.guesses, cli.answers.as_deref()).context("cannot load dictionaries")?;
    let cache = cli.cache_config();
    let store = cache.store();

    let table = match &store {
        Some(store) => load_or_build_table(store, &lists),
        None => FeedbackTable::build(lists.guesses(), lists.answers()),
    };
    let solver = Solver::new(&lists, &table, cli.solver_config())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { live: false });

    match command {
        Commands::Play { live } => run_play_command(&solver, &lists, store.as_ref(), live),
        Commands::Solve { word, verbose } => {
            let result = solve_word(SolveConfig::new(word), &solver)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&word, &solver, top)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::BuildTree => {
            let (_, summary) = build_tree(store.as_ref(), &solver)?;
            print_tree_summary(&summary);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Decision Tree Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} possible answers", lists.answers().len());
            println!("Objective: {}\n", solver.config().objective);

            let (tree, _) = build_tree(store.as_ref(), &solver)?;
            let stats = run_test_all(&tree, &table, &lists, limit)?;
            print_test_all_statistics(&stats);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words (seed {seed})...");
            let result = run_benchmark(&solver, count, seed)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    solver: &Solver<'_>,
    lists: &WordLists,
    store: Option<&FileStore>,
    live: bool,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if live {
        let mut session = solver.session();
        run_interactive(&mut session, stdin.lock(), &mut stdout)?;
    } else {
        let (tree, _) = build_tree(store, solver)?;
        let mut cursor = TreeCursor::new(&tree, lists)?;
        run_interactive(&mut cursor, stdin.lock(), &mut stdout)?;
    }
    Ok(())
}
