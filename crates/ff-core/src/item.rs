use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of inventory slots. Fixed for the whole game.
pub const INVENTORY_SLOTS: usize = 4;

/// A kind of item that can sit in an inventory slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// The bunny's carrot.
    Carrot,
    /// The unicorn's horn gem.
    Gem,
    /// A twig for the bird's nest.
    Twig,
    /// The frog prince's crown.
    Crown,
    /// A cake.
    Cake,
}

impl ItemKind {
    /// All item kinds.
    pub const ALL: [ItemKind; 5] = [
        Self::Carrot,
        Self::Gem,
        Self::Twig,
        Self::Crown,
        Self::Cake,
    ];

    /// Lowercase id.
    pub fn name(self) -> &'static str {
        match self {
            Self::Carrot => "carrot",
            Self::Gem => "gem",
            Self::Twig => "twig",
            Self::Crown => "crown",
            Self::Cake => "cake",
        }
    }

    /// Emoji shown in inventory slots and pickup lines.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Carrot => "🥕",
            Self::Gem => "💎",
            Self::Twig => "🌿",
            Self::Crown => "👑",
            Self::Cake => "🎂",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| CoreError::UnknownItem(s.to_string()))
    }
}

/// Fixed-length ordered inventory. Empty slots are `None`.
///
/// Serialized as a plain array of item ids and nulls. A stored array of the
/// wrong length is padded or truncated on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Option<ItemKind>>", into = "Vec<Option<ItemKind>>")]
pub struct Inventory {
    slots: [Option<ItemKind>; INVENTORY_SLOTS],
}

impl Inventory {
    /// An empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw slots, in order.
    pub fn slots(&self) -> &[Option<ItemKind>; INVENTORY_SLOTS] {
        &self.slots
    }

    /// Whether any slot holds `kind`.
    pub fn contains(&self, kind: ItemKind) -> bool {
        self.slots.contains(&Some(kind))
    }

    /// How many slots hold `kind`.
    pub fn count(&self, kind: ItemKind) -> usize {
        self.slots.iter().filter(|s| **s == Some(kind)).count()
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Put `kind` in the first empty slot. Returns the slot index, or `None`
    /// (leaving the inventory untouched) when full.
    pub fn add(&mut self, kind: ItemKind) -> Option<usize> {
        let idx = self.slots.iter().position(Option::is_none)?;
        self.slots[idx] = Some(kind);
        Some(idx)
    }

    /// Clear the first slot holding `kind`. Returns true if one was found.
    pub fn remove_one(&mut self, kind: ItemKind) -> bool {
        match self.slots.iter().position(|s| *s == Some(kind)) {
            Some(idx) => {
                self.slots[idx] = None;
                true
            }
            None => false,
        }
    }

    /// Occupied slots as `(index, kind)` pairs.
    pub fn items(&self) -> impl Iterator<Item = (usize, ItemKind)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|k| (i, k)))
    }
}

impl From<Vec<Option<ItemKind>>> for Inventory {
    fn from(stored: Vec<Option<ItemKind>>) -> Self {
        let mut slots = [None; INVENTORY_SLOTS];
        for (slot, item) in slots.iter_mut().zip(stored) {
            *slot = item;
        }
        Self { slots }
    }
}

impl From<Inventory> for Vec<Option<ItemKind>> {
    fn from(inv: Inventory) -> Self {
        inv.slots.to_vec()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<&str> = self
            .slots
            .iter()
            .map(|s| s.map(ItemKind::emoji).unwrap_or("·"))
            .collect();
        write!(f, "[{}]", cells.join(" "))
    }
}
