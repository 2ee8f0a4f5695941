//! Puzzle gates and the content of each puzzle.
//!
//! The game decides *whether* a puzzle runs; the front end runs it through
//! [`Presenter::open_puzzle`](crate::ports::Presenter::open_puzzle), using the
//! content below. A puzzle kind solved once stays solved for good.

use ff_core::PuzzleKind;

use crate::context::GameContext;
use crate::ports::PuzzleOutcome;

/// Run the puzzle gate `kind`. Returns true when the player may go on.
///
/// An already solved kind passes at once without replaying.
pub fn run_gate(ctx: &mut GameContext<'_>, kind: PuzzleKind) -> bool {
    if ctx.state.is_puzzle_solved(kind) {
        tracing::debug!(puzzle = %kind, "puzzle already solved");
        return true;
    }
    match ctx.presenter.open_puzzle(kind) {
        PuzzleOutcome::Solved => {
            ctx.state.mark_puzzle_solved(kind);
            ctx.save();
            tracing::info!(puzzle = %kind, "puzzle solved");
            true
        }
        PuzzleOutcome::Abandoned => {
            tracing::debug!(puzzle = %kind, "puzzle closed unsolved");
            false
        }
    }
}

/// A named group of four in the connections puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionGroup {
    /// What the members share.
    pub label: &'static str,
    /// Emoji and name of each member.
    pub members: [(&'static str, &'static str); 4],
}

/// Find the two groups of four.
pub static CONNECTIONS: [ConnectionGroup; 2] = [
    ConnectionGroup {
        label: "Can Fly",
        members: [("🐦", "Bird"), ("🦋", "Bug"), ("🐝", "Bee"), ("🦆", "Duck")],
    },
    ConnectionGroup {
        label: "Can Swim",
        members: [("🐟", "Fish"), ("🐸", "Frog"), ("🐢", "Turtle"), ("🐙", "Octopus")],
    },
];

/// Card faces of the memory puzzle. Each appears twice.
pub static MEMORY_FACES: [&str; 6] = ["🌸", "🍄", "🌈", "🦋", "⭐", "🌙"];

/// One round of the pattern puzzle: what comes next?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRound {
    /// The sequence shown, with the blank last.
    pub sequence: &'static [&'static str],
    /// The choices offered.
    pub options: &'static [&'static str],
    /// The right choice.
    pub answer: &'static str,
}

/// The pattern rounds, played in order.
pub static PATTERN_ROUNDS: [PatternRound; 3] = [
    PatternRound {
        sequence: &["🔴", "🔵", "🔴", "🔵", "🔴"],
        options: &["🔴", "🔵", "🟢"],
        answer: "🔵",
    },
    PatternRound {
        sequence: &["⭐", "🌙", "⭐", "🌙", "⭐"],
        options: &["⭐", "🌙", "☀️"],
        answer: "🌙",
    },
    PatternRound {
        sequence: &["🟣", "🟣", "🟡", "🟣", "🟣"],
        options: &["🟣", "🟡", "🟢"],
        answer: "🟡",
    },
];

/// A berry in the sorting puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Berry {
    /// Goes in the red basket.
    Red,
    /// Goes in the blue basket.
    Blue,
}

impl Berry {
    /// Emoji for the berry.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Red => "🍓",
            Self::Blue => "🫐",
        }
    }
}

/// The berries to sort, before shuffling.
pub static SORTING_BERRIES: [Berry; 8] = [
    Berry::Red,
    Berry::Red,
    Berry::Red,
    Berry::Red,
    Berry::Blue,
    Berry::Blue,
    Berry::Blue,
    Berry::Blue,
];

/// One-line instruction shown when a puzzle opens.
pub fn instructions(kind: PuzzleKind) -> &'static str {
    match kind {
        PuzzleKind::Connections => "Find the friends that go together! 🔗",
        PuzzleKind::Memory => "Find the pairs! 🃏",
        PuzzleKind::Pattern => "What comes next? 🤔",
        PuzzleKind::Sorting => "Put the berries in the right basket! 🧺",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;

    #[test]
    fn solving_marks_and_saves() {
        let mut h = Harness::new();
        h.presenter.puzzles.push_back(PuzzleOutcome::Solved);
        assert!(run_gate(&mut h.ctx(), PuzzleKind::Memory));
        assert!(h.state.is_puzzle_solved(PuzzleKind::Memory));
        assert!(h.saved_state().is_puzzle_solved(PuzzleKind::Memory));
    }

    #[test]
    fn abandoning_blocks_and_leaves_it_unsolved() {
        let mut h = Harness::new();
        h.presenter.puzzles.push_back(PuzzleOutcome::Abandoned);
        assert!(!run_gate(&mut h.ctx(), PuzzleKind::Pattern));
        assert!(!h.state.is_puzzle_solved(PuzzleKind::Pattern));
    }

    #[test]
    fn solved_kind_is_not_replayed() {
        let mut h = Harness::new();
        h.state.mark_puzzle_solved(PuzzleKind::Sorting);
        assert!(run_gate(&mut h.ctx(), PuzzleKind::Sorting));
        assert!(h.presenter.opened.is_empty());
    }

    #[test]
    fn content_shapes() {
        assert!(CONNECTIONS.iter().all(|g| g.members.len() == 4));
        for round in &PATTERN_ROUNDS {
            assert!(round.options.contains(&round.answer));
        }
        let red = SORTING_BERRIES.iter().filter(|b| **b == Berry::Red).count();
        assert_eq!(red, 4);
    }
}
