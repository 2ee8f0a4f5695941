//! Core types for Fairy Fun: areas, items, quests, and the persisted game state.
//!
//! This crate defines the data model every other crate works on. It knows
//! nothing about rendering or dialogue: the area graph is static data, the
//! [`GameState`] record is a plain serializable value, and [`SaveStore`]
//! moves that record in and out of a key-value backend.

/// Static area graph: area ids, directions, connections, entry points.
pub mod area;
/// Error types used throughout the crate.
pub mod error;
/// Item kinds and the fixed-size inventory.
pub mod item;
/// Quest and puzzle identifiers and quest progression states.
pub mod quest;
/// The single mutable game-state record.
pub mod state;
/// Key-value persistence of the game state.
pub mod store;

/// Re-export area graph types.
pub use area::{AreaId, AreaNode, Arrival, Direction, GroundPoint, GroundType};
/// Re-export error types.
pub use error::{CoreError, CoreResult, StoreError, StoreResult};
/// Re-export item types.
pub use item::{INVENTORY_SLOTS, Inventory, ItemKind};
/// Re-export quest identifiers.
pub use quest::{PuzzleKind, QUEST_ORDER, QuestId, QuestState};
/// Re-export the game state record.
pub use state::{DayState, GameState};
/// Re-export persistence types.
pub use store::{FileStore, KeyValueStore, MemoryStore, SAVE_KEY, SaveStore};
