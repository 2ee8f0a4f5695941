use std::io::{self, BufRead, Write};

use colored::Colorize;
use ff_core::PuzzleKind;
use ff_game::puzzle::instructions;
use ff_game::{Audio, Line, Presenter, PuzzleOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Narration has no sound in the terminal; clips are only traced.
#[derive(Debug, Default)]
pub struct QuietAudio;

impl Audio for QuietAudio {
    fn speak(&mut self, text: &str, audio_key: Option<&str>) {
        tracing::trace!(audio_key, chars = text.chars().count(), "narration");
    }

    fn is_speaking(&self) -> bool {
        false
    }

    fn stop(&mut self) {}
}

/// Prints dialogue and letters, and runs puzzles as text games read from
/// `input`. The play loop reads its commands through the same input.
pub struct TerminalPresenter<I> {
    input: I,
    pub(super) rng: StdRng,
}

impl<I: BufRead> TerminalPresenter<I> {
    /// A presenter reading from `input`, shuffling puzzles with `seed`.
    pub fn new(input: I, seed: u64) -> Self {
        Self {
            input,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Print `prompt` and read one trimmed line. `None` at the end of input.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        if let Err(e) = io::stdout().flush() {
            tracing::warn!(error = %e, "cannot flush stdout");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "cannot read input");
                None
            }
        }
    }

    /// Read an answer inside a puzzle. `None` when the player closes it.
    pub(super) fn ask(&mut self, prompt: &str) -> Option<String> {
        let answer = self.read_line(prompt)?;
        match answer.to_lowercase().as_str() {
            "close" | "quit" | "q" => None,
            _ => Some(answer),
        }
    }
}

impl<I: BufRead> Presenter for TerminalPresenter<I> {
    fn show_line(&mut self, line: &Line) {
        if line.speaker.is_empty() {
            println!("  {}", line.text.italic().dimmed());
        } else {
            println!("  {} {}", format!("{}:", line.speaker).bold().magenta(), line.text);
        }
    }

    fn show_letter(&mut self, text: &str) {
        println!();
        println!("  {}", "✉️  A letter!".bold());
        println!("  ┌────────────────────────────");
        for row in text.lines() {
            println!("  │ {row}");
        }
        println!("  └────────────────────────────");
        println!();
    }

    fn open_puzzle(&mut self, kind: PuzzleKind) -> PuzzleOutcome {
        println!();
        println!("  {} {}", "Puzzle!".bold().cyan(), instructions(kind));
        println!("  {}", "(type 'close' to stop)".dimmed());

        let solved = match kind {
            PuzzleKind::Connections => self.connections(),
            PuzzleKind::Memory => self.memory(),
            PuzzleKind::Pattern => self.pattern(),
            PuzzleKind::Sorting => self.sorting(),
        };
        match solved {
            Some(()) => {
                println!("  {}", "Puzzle solved! 🎉".green().bold());
                PuzzleOutcome::Solved
            }
            None => {
                println!("  {}", "Maybe later!".yellow());
                PuzzleOutcome::Abandoned
            }
        }
    }
}
