//! The four puzzles as typed games. Each returns `None` when closed.

use std::io::BufRead;

use colored::Colorize;
use ff_game::puzzle::{Berry, CONNECTIONS, MEMORY_FACES, PATTERN_ROUNDS, SORTING_BERRIES};
use rand::Rng;
use rand::seq::SliceRandom;

use super::TerminalPresenter;

/// A connections card: emoji, name, and the index of its group.
pub(super) type Card = (&'static str, &'static str, usize);

/// Every connections card, shuffled.
pub(super) fn deal_connections(rng: &mut impl Rng) -> Vec<Card> {
    let mut cards: Vec<Card> = CONNECTIONS
        .iter()
        .enumerate()
        .flat_map(|(group, def)| {
            def.members
                .iter()
                .map(move |(emoji, name)| (*emoji, *name, group))
        })
        .collect();
    cards.shuffle(rng);
    cards
}

/// Every memory face twice, shuffled.
pub(super) fn deal_memory(rng: &mut impl Rng) -> Vec<&'static str> {
    let mut cards: Vec<&str> = MEMORY_FACES.iter().chain(MEMORY_FACES.iter()).copied().collect();
    cards.shuffle(rng);
    cards
}

/// The berries to sort, shuffled.
pub(super) fn deal_berries(rng: &mut impl Rng) -> Vec<Berry> {
    let mut berries = SORTING_BERRIES.to_vec();
    berries.shuffle(rng);
    berries
}

/// Distinct 1-based picks out of `count`, as 0-based indices.
pub(super) fn parse_picks(input: &str, count: usize) -> Option<Vec<usize>> {
    let mut picks = Vec::new();
    for word in input.split(|c: char| c.is_whitespace() || c == ',') {
        if word.is_empty() {
            continue;
        }
        let n: usize = word.parse().ok()?;
        if n == 0 || n > count {
            return None;
        }
        if !picks.contains(&(n - 1)) {
            picks.push(n - 1);
        }
    }
    Some(picks)
}

impl<I: BufRead> TerminalPresenter<I> {
    pub(super) fn connections(&mut self) -> Option<()> {
        let cards = deal_connections(&mut self.rng);
        for (i, (emoji, name, _)) in cards.iter().enumerate() {
            println!("  {:>2}. {emoji} {name}", i + 1);
        }

        let Some((last, groups)) = CONNECTIONS.split_last() else {
            return Some(());
        };
        for (index, group) in groups.iter().enumerate() {
            let wanted: Vec<usize> = (0..cards.len()).filter(|&i| cards[i].2 == index).collect();
            loop {
                let prompt = format!("  Which four {}? ", group.label.to_lowercase());
                let answer = self.ask(&prompt)?;
                let picks = parse_picks(&answer, cards.len()).map(|mut picks| {
                    picks.sort_unstable();
                    picks
                });
                if picks.as_ref() == Some(&wanted) {
                    println!("  ✨ {}!", group.label);
                    break;
                }
                println!("  {}", "Not quite. Try again!".yellow());
            }
        }
        println!("  ✨ And the rest {}!", last.label.to_lowercase());
        Some(())
    }

    pub(super) fn memory(&mut self) -> Option<()> {
        let cards = deal_memory(&mut self.rng);
        let mut found = vec![false; cards.len()];
        let mut tries = 0;

        while found.iter().any(|f| !f) {
            let board: Vec<String> = cards
                .iter()
                .zip(&found)
                .enumerate()
                .map(|(i, (face, open))| format!("{}:{}", i + 1, if *open { *face } else { "❓" }))
                .collect();
            println!("  {}", board.join(" "));

            let answer = self.ask("  Pick two cards: ")?;
            let (a, b) = match parse_picks(&answer, cards.len()).as_deref() {
                Some(&[a, b]) if !found[a] && !found[b] => (a, b),
                _ => {
                    println!("  Pick two hidden cards, like: 1 2");
                    continue;
                }
            };
            tries += 1;
            println!("  {} {}", cards[a], cards[b]);
            if cards[a] == cards[b] {
                found[a] = true;
                found[b] = true;
                println!("  A pair! ✨");
            } else {
                println!("  {}", "Not a pair. Try again!".yellow());
            }
        }
        println!("  All pairs found in {tries} tries!");
        Some(())
    }

    pub(super) fn pattern(&mut self) -> Option<()> {
        for round in &PATTERN_ROUNDS {
            println!("  {} ❓", round.sequence.join(" "));
            let options: Vec<String> = round
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| format!("{}. {option}", i + 1))
                .collect();
            println!("  {}", options.join("   "));
            loop {
                let answer = self.ask("  Which comes next? ")?;
                let chosen = match answer.parse::<usize>() {
                    Ok(n) => n.checked_sub(1).and_then(|i| round.options.get(i)).copied(),
                    Err(_) => round.options.iter().find(|o| **o == answer).copied(),
                };
                if chosen == Some(round.answer) {
                    println!("  Yes! ✨");
                    break;
                }
                println!("  {}", "Not quite. Try again!".yellow());
            }
        }
        Some(())
    }

    pub(super) fn sorting(&mut self) -> Option<()> {
        let berries = deal_berries(&mut self.rng);
        for berry in berries {
            loop {
                let prompt = format!("  {} goes in the red or blue basket? (r/b) ", berry.emoji());
                let answer = self.ask(&prompt)?;
                let basket = match answer.to_lowercase().as_str() {
                    "r" | "red" => Some(Berry::Red),
                    "b" | "blue" => Some(Berry::Blue),
                    _ => None,
                };
                if basket == Some(berry) {
                    println!("  Into the basket! 🧺");
                    break;
                }
                println!("  {}", "Oops, the other basket!".yellow());
            }
        }
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_core::PuzzleKind;
    use ff_game::{Presenter, PuzzleOutcome};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    const SEED: u64 = 42;

    fn presenter(input: String) -> TerminalPresenter<Cursor<Vec<u8>>> {
        TerminalPresenter::new(Cursor::new(input.into_bytes()), SEED)
    }

    fn numbers(indices: impl IntoIterator<Item = usize>) -> String {
        indices
            .into_iter()
            .map(|i| (i + 1).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn picks_are_one_based_and_distinct() {
        assert_eq!(parse_picks("1 3,4", 8), Some(vec![0, 2, 3]));
        assert_eq!(parse_picks("2 2", 8), Some(vec![1]));
        assert_eq!(parse_picks("0", 8), None);
        assert_eq!(parse_picks("9", 8), None);
        assert_eq!(parse_picks("bird", 8), None);
    }

    #[test]
    fn connections_solved_after_a_wrong_guess() {
        let cards = deal_connections(&mut StdRng::seed_from_u64(SEED));
        let flyers = numbers((0..cards.len()).filter(|&i| cards[i].2 == 0));
        let swimmers = numbers((0..cards.len()).filter(|&i| cards[i].2 == 1));

        let mut p = presenter(format!("{swimmers}\n{flyers}\n"));
        assert_eq!(p.open_puzzle(PuzzleKind::Connections), PuzzleOutcome::Solved);
    }

    #[test]
    fn memory_solved_pair_by_pair() {
        let cards = deal_memory(&mut StdRng::seed_from_u64(SEED));
        let mut input = String::from("1 1\n");
        for face in MEMORY_FACES {
            let pair: Vec<usize> = (0..cards.len()).filter(|&i| cards[i] == face).collect();
            input.push_str(&numbers(pair));
            input.push('\n');
        }

        let mut p = presenter(input);
        assert_eq!(p.open_puzzle(PuzzleKind::Memory), PuzzleOutcome::Solved);
    }

    #[test]
    fn pattern_accepts_numbers_or_emoji() {
        let mut p = presenter("1\n2\n🌙\n2\n".to_string());
        assert_eq!(p.open_puzzle(PuzzleKind::Pattern), PuzzleOutcome::Solved);
    }

    #[test]
    fn sorting_every_berry() {
        let berries = deal_berries(&mut StdRng::seed_from_u64(SEED));
        let input: String = berries
            .iter()
            .map(|berry| match berry {
                Berry::Red => "red\n",
                Berry::Blue => "b\n",
            })
            .collect();

        let mut p = presenter(input);
        assert_eq!(p.open_puzzle(PuzzleKind::Sorting), PuzzleOutcome::Solved);
    }

    #[test]
    fn closing_mid_way() {
        let mut p = presenter("2\nclose\n".to_string());
        assert_eq!(p.open_puzzle(PuzzleKind::Pattern), PuzzleOutcome::Abandoned);
    }
}
