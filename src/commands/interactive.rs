//! Interactive assistant
//!
//! Suggests a guess, reads the feedback the game showed, and repeats. Input is
//! validated here before it reaches the solver, so a typo never costs a turn.

use crate::core::{Pattern, Word};
use crate::error::SolverError;
use crate::solver::{GameSession, SessionState};
use crate::tree::TreeCursor;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Source of guesses during an interactive game
pub trait Advisor {
    /// The word to play now
    ///
    /// # Errors
    /// Fails once the game is solved.
    fn suggestion(&mut self) -> Result<Word, SolverError>;

    /// Record the feedback for the suggested word
    ///
    /// # Errors
    /// Fails for impossible feedback, leaving the game unchanged.
    fn record(&mut self, pattern: Pattern) -> Result<SessionState, SolverError>;

    /// Take back the last turn; false if there is none
    fn undo(&mut self) -> bool;

    fn reset(&mut self);

    /// Turns recorded so far
    fn turn(&self) -> usize;

    /// Answers still possible, when the advisor tracks them
    fn remaining(&self) -> Option<Vec<String>>;

    /// The suggested word is certainly the answer
    fn is_certain(&self) -> bool;
}

impl Advisor for GameSession<'_> {
    fn suggestion(&mut self) -> Result<Word, SolverError> {
        self.request_guess().cloned()
    }

    fn record(&mut self, pattern: Pattern) -> Result<SessionState, SolverError> {
        self.apply_feedback(pattern)
    }

    fn undo(&mut self) -> bool {
        GameSession::undo(self).is_some()
    }

    fn reset(&mut self) {
        GameSession::reset(self);
    }

    fn turn(&self) -> usize {
        self.history().len()
    }

    fn remaining(&self) -> Option<Vec<String>> {
        Some(self.remaining_words().map(|word| word.text().to_string()).collect())
    }

    fn is_certain(&self) -> bool {
        GameSession::is_certain(self)
    }
}

impl Advisor for TreeCursor<'_> {
    fn suggestion(&mut self) -> Result<Word, SolverError> {
        self.guess().cloned()
    }

    fn record(&mut self, pattern: Pattern) -> Result<SessionState, SolverError> {
        self.apply_feedback(pattern)
    }

    fn undo(&mut self) -> bool {
        TreeCursor::undo(self)
    }

    fn reset(&mut self) {
        TreeCursor::reset(self);
    }

    fn turn(&self) -> usize {
        self.history().count()
    }

    fn remaining(&self) -> Option<Vec<String>> {
        None
    }

    fn is_certain(&self) -> bool {
        TreeCursor::is_certain(self)
    }
}

/// What happened during an interactive run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub games_solved: usize,
}

/// Line-level commands besides feedback
enum Input {
    Quit,
    New,
    Undo,
    Feedback(Pattern),
}

/// Run the interactive loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<A, R, W>(advisor: &mut A, mut input: R, out: &mut W) -> io::Result<PlaySummary>
where
    A: Advisor,
    R: BufRead,
    W: Write,
{
    let mut summary = PlaySummary::default();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Wordle Oracle - Interactive                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  - G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - B/b/-/⬜ for gray (not in word)")?;
    writeln!(out, "  - or 'win' if the guess was right")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game, 'undo' to take back a turn\n")?;

    loop {
        let guess = match advisor.suggestion() {
            Ok(guess) => guess,
            Err(err) => {
                writeln!(out, "❌ {err}; starting over\n")?;
                advisor.reset();
                continue;
            }
        };

        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "Turn {}: suggested guess {}",
            advisor.turn() + 1,
            guess.text().to_uppercase().bright_white().bold()
        )?;
        if advisor.is_certain() {
            writeln!(out, "{}", "✨ This guess is certain to be the answer".bright_green())?;
        } else if let Some(remaining) = advisor.remaining().filter(|words| words.len() <= 10) {
            writeln!(out, "Remaining candidates:")?;
            for word in remaining {
                writeln!(out, "  • {}", word.to_uppercase())?;
            }
        }

        let command = loop {
            let Some(line) = prompt(&mut input, out, "Feedback (G/Y/B, 'win', or command)")? else {
                return Ok(summary);
            };
            match parse_input(&line) {
                Ok(command) => break command,
                Err(message) => writeln!(out, "❌ {message}\n")?,
            }
        };

        match command {
            Input::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(summary);
            }
            Input::New => {
                advisor.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Input::Undo => {
                if advisor.undo() {
                    writeln!(out, "✓ Undone! Back to turn {}\n", advisor.turn() + 1)?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            Input::Feedback(pattern) => match advisor.record(pattern) {
                Ok(SessionState::Solved) => {
                    summary.games_solved += 1;
                    let turns = advisor.turn();
                    writeln!(
                        out,
                        "\n{} Solved in {} {}",
                        "🎉".bright_green(),
                        turns.to_string().bright_cyan().bold(),
                        if turns == 1 { "guess" } else { "guesses" }
                    )?;

                    let again = prompt(&mut input, out, "Play again? (yes/no)")?;
                    if !matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                        writeln!(out, "\n👋 Thanks for playing!\n")?;
                        return Ok(summary);
                    }
                    advisor.reset();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                Ok(_) => writeln!(out, "{}\n", pattern.to_emoji())?,
                Err(err) => {
                    writeln!(out, "❌ {err}")?;
                    writeln!(out, "Check the feedback, or type 'undo' or 'new'.\n")?;
                }
            },
        }
    }
}

fn parse_input(line: &str) -> Result<Input, String> {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Input::Quit),
        "new" | "n" => Ok(Input::New),
        "undo" | "u" => Ok(Input::Undo),
        "win" | "correct" | "solved" => Ok(Input::Feedback(Pattern::PERFECT)),
        _ => line
            .parse::<Pattern>()
            .map(Input::Feedback)
            .map_err(|err| err.to_string()),
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<Option<String>> {
    write!(out, "{message}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
