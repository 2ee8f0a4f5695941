use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of a quest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum QuestId {
    /// Find the bunny's carrot.
    LostCarrot,
    /// Recover the unicorn's horn gem.
    HornGem,
    /// Bring the bird three twigs.
    BuildNest,
    /// Find the frog prince's crown.
    FrogCrown,
    /// Take the fox cub home.
    FoxHome,
    /// Reunite the baby deer with its mother.
    FindMom,
}

/// The fixed global order in which quests are delivered by mail.
pub const QUEST_ORDER: [QuestId; 6] = [
    QuestId::LostCarrot,
    QuestId::HornGem,
    QuestId::BuildNest,
    QuestId::FrogCrown,
    QuestId::FoxHome,
    QuestId::FindMom,
];

impl QuestId {
    /// The stable string id used in save records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LostCarrot => "lost-carrot",
            Self::HornGem => "horn-gem",
            Self::BuildNest => "build-nest",
            Self::FrogCrown => "frog-crown",
            Self::FoxHome => "fox-home",
            Self::FindMom => "find-mom",
        }
    }

    /// Position in [`QUEST_ORDER`].
    pub fn order_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for QuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QUEST_ORDER
            .into_iter()
            .find(|q| q.as_str() == s.trim())
            .ok_or_else(|| CoreError::UnknownQuest(s.to_string()))
    }
}

/// Progression state of a single quest. Strictly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestState {
    /// The letter has not been read yet.
    #[default]
    NotStarted,
    /// The letter was read and the quest is underway.
    Active,
    /// The quest is done for good.
    Complete,
}

impl QuestState {
    /// The single state this one may move to, if any.
    pub fn successor(self) -> Option<QuestState> {
        match self {
            Self::NotStarted => Some(Self::Active),
            Self::Active => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// Whether a quest in this state still needs the player.
    pub fn is_open(self) -> bool {
        matches!(self, Self::NotStarted | Self::Active)
    }

    /// The stable string id used in save records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "notStarted",
            Self::Active => "active",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for QuestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mini-puzzle type that can gate a quest. Solved once, then skipped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleKind {
    /// Sort things into two groups.
    Connections,
    /// Match pairs of cards.
    Memory,
    /// Continue a repeating pattern.
    Pattern,
    /// Order things by size.
    Sorting,
}

impl PuzzleKind {
    /// Lowercase id.
    pub fn name(self) -> &'static str {
        match self {
            Self::Connections => "connections",
            Self::Memory => "memory",
            Self::Pattern => "pattern",
            Self::Sorting => "sorting",
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
