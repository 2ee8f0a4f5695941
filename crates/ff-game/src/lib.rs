//! Game coordination for Fairy Fun.
//!
//! Ties the persisted [`ff_core::GameState`] to everything that happens while
//! playing: the quest engine, NPC visibility and escorts, building areas and
//! moving between them, the house interactions, puzzle gates, and player
//! movement. Rendering, audio, and overlays are reached only through the
//! narrow traits in [`ports`], so the whole game can be driven headless.

/// Area building, navigation, and the edge watcher.
pub mod area;
/// Tunable game parameters.
pub mod config;
/// Mutable context handed to every subsystem.
pub mod context;
/// Dialogue lines and their playback.
pub mod dialogue;
/// Error types for the game crate.
pub mod error;
/// Interactions with objects in and around Lisa's house.
pub mod house;
/// NPC definitions, visibility, escorts, and the dragon helper.
pub mod npc;
/// Player movement and deferred interactions.
pub mod player;
/// Traits for the renderer, audio, and presentation collaborators.
pub mod ports;
/// Puzzle gates and puzzle content.
pub mod puzzle;
/// Quest definitions and the quest engine.
pub mod quest;
/// Fuzzy lookup of tappable things by name.
pub mod resolver;
/// The top-level game session.
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

/// Re-exports of [`area::Scene`] and [`area::SpawnedItem`].
pub use area::{Scene, SpawnedItem};
/// Re-exports of [`config::GameConfig`] and [`config::ItemRespawn`].
pub use config::{GameConfig, ItemRespawn};
/// Re-exports of [`context::GameContext`] and [`context::Persist`].
pub use context::{GameContext, Persist};
/// Re-export of [`dialogue::Line`].
pub use dialogue::Line;
/// Re-exports of [`error::GameError`] and [`error::GameResult`].
pub use error::{GameError, GameResult};
/// Re-exports of [`npc::Escort`] and [`npc::NpcId`].
pub use npc::{Escort, NpcId};
/// Re-export of [`player::Player`].
pub use player::Player;
/// Re-exports of the collaborator traits and their data types.
pub use ports::{
    Audio, NavAffordance, Placement, Presenter, Primitive, PuzzleOutcome, Renderer, ScreenPoint,
    Shape, Target,
};
/// Re-export of [`session::GameSession`].
pub use session::GameSession;
