use ff_core::{GameState, KeyValueStore, SaveStore};
use ff_daynight::DayNightCycle;

use crate::area::Scene;
use crate::config::GameConfig;
use crate::dialogue::{self, Line};
use crate::npc::Escort;
use crate::player::Player;
use crate::ports::{Audio, Presenter, Renderer};

/// Somewhere the game record is written after every mutation.
pub trait Persist {
    /// Write `state` out. Failures are logged, never surfaced.
    fn persist(&mut self, state: &mut GameState);
}

impl<S: KeyValueStore> Persist for SaveStore<S> {
    fn persist(&mut self, state: &mut GameState) {
        if let Err(e) = self.save(state) {
            tracing::warn!(error = %e, "failed to save game");
        }
    }
}

/// Mutable context passed to each subsystem while handling an event.
pub struct GameContext<'a> {
    /// The game record.
    pub state: &'a mut GameState,
    /// Where the record is saved.
    pub store: &'a mut dyn Persist,
    /// Game parameters.
    pub config: &'a GameConfig,
    /// The day/night cycle.
    pub cycle: &'a mut DayNightCycle,
    /// What is placed in the current area.
    pub scene: &'a mut Scene,
    /// Who follows the player.
    pub escort: &'a mut Escort,
    /// The player character.
    pub player: &'a mut Player,
    /// Renderer collaborator.
    pub renderer: &'a mut dyn Renderer,
    /// Audio collaborator.
    pub audio: &'a mut dyn Audio,
    /// Overlay collaborator.
    pub presenter: &'a mut dyn Presenter,
}

impl GameContext<'_> {
    /// Persist the game record.
    pub fn save(&mut self) {
        self.store.persist(self.state);
    }

    /// Play dialogue lines in order.
    pub fn say(&mut self, lines: &[Line]) {
        dialogue::play(self.audio, self.presenter, lines);
    }

    /// Play one line.
    pub fn say_one(&mut self, line: Line) {
        self.say(std::slice::from_ref(&line));
    }
}
