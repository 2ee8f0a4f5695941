//! Recording doubles of the collaborator ports, and a harness that builds a
//! [`GameContext`] over a fresh game.

use std::collections::{BTreeMap, VecDeque};

use ff_core::{GameState, GroundPoint, MemoryStore, PuzzleKind, SaveStore};
use ff_daynight::{DayNightCycle, Lighting};

use crate::area::Scene;
use crate::config::GameConfig;
use crate::context::GameContext;
use crate::dialogue::Line;
use crate::npc::{Escort, NpcId};
use crate::player::Player;
use crate::ports::{
    Audio, NavAffordance, Placement, Presenter, PuzzleOutcome, Renderer, ScreenPoint, Target,
};

#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub cleared: usize,
    pub ground: Option<(f32, u32)>,
    pub placed: Vec<Placement>,
    pub removed: Vec<Target>,
    pub indicators: BTreeMap<NpcId, bool>,
    pub player_at: Option<GroundPoint>,
    pub npc_at: BTreeMap<NpcId, GroundPoint>,
    pub lighting: Option<Lighting>,
    pub shown: Vec<(String, Vec<NavAffordance>)>,
    pub fades: Vec<bool>,
    pub hit: Option<Target>,
    pub ground_point: Option<GroundPoint>,
}

impl Renderer for RecordingRenderer {
    fn clear_area(&mut self) {
        self.cleared += 1;
        self.placed.clear();
    }

    fn set_ground(&mut self, size: f32, color: u32) {
        self.ground = Some((size, color));
    }

    fn place(&mut self, placement: Placement) {
        self.placed.push(placement);
    }

    fn remove(&mut self, target: &Target) {
        self.removed.push(target.clone());
    }

    fn set_indicator(&mut self, npc: NpcId, visible: bool) {
        self.indicators.insert(npc, visible);
    }

    fn set_player_position(&mut self, at: GroundPoint) {
        self.player_at = Some(at);
    }

    fn set_npc_position(&mut self, npc: NpcId, at: GroundPoint) {
        self.npc_at.insert(npc, at);
    }

    fn set_lighting(&mut self, lighting: Lighting) {
        self.lighting = Some(lighting);
    }

    fn show_area(&mut self, name: &str, navigation: &[NavAffordance]) {
        self.shown.push((name.to_string(), navigation.to_vec()));
    }

    fn set_fade(&mut self, covered: bool) {
        self.fades.push(covered);
    }

    fn hit_test(&self, _point: ScreenPoint) -> Option<Target> {
        self.hit.clone()
    }

    fn ground_at(&self, _point: ScreenPoint) -> Option<GroundPoint> {
        self.ground_point
    }
}

/// Speaks until stopped.
#[derive(Debug, Default)]
pub(crate) struct RecordingAudio {
    pub spoken: Vec<(String, Option<String>)>,
    pub stops: usize,
    speaking: bool,
}

impl Audio for RecordingAudio {
    fn speak(&mut self, text: &str, audio_key: Option<&str>) {
        self.spoken
            .push((text.to_string(), audio_key.map(str::to_string)));
        self.speaking = true;
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }

    fn stop(&mut self) {
        self.speaking = false;
        self.stops += 1;
    }
}

/// Records what is shown; puzzles end with queued outcomes, solved when
/// the queue is empty.
#[derive(Debug, Default)]
pub(crate) struct ScriptedPresenter {
    pub lines: Vec<Line>,
    pub letters: Vec<String>,
    pub puzzles: VecDeque<PuzzleOutcome>,
    pub opened: Vec<PuzzleKind>,
}

impl ScriptedPresenter {
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_ref()).collect()
    }
}

impl Presenter for ScriptedPresenter {
    fn show_line(&mut self, line: &Line) {
        self.lines.push(line.clone());
    }

    fn show_letter(&mut self, text: &str) {
        self.letters.push(text.to_string());
    }

    fn open_puzzle(&mut self, kind: PuzzleKind) -> PuzzleOutcome {
        self.opened.push(kind);
        self.puzzles.pop_front().unwrap_or(PuzzleOutcome::Solved)
    }
}

/// Every subsystem over a fresh game and an in-memory store.
pub(crate) struct Harness {
    pub state: GameState,
    pub store: SaveStore<MemoryStore>,
    pub config: GameConfig,
    pub cycle: DayNightCycle,
    pub scene: Scene,
    pub escort: Escort,
    pub player: Player,
    pub renderer: RecordingRenderer,
    pub audio: RecordingAudio,
    pub presenter: ScriptedPresenter,
}

impl Harness {
    /// A fresh game with no fades and an instant day/night cycle.
    pub fn new() -> Self {
        Self::with_config(GameConfig::instant())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let state = GameState::new();
        let cycle = DayNightCycle::new(config.cycle.clone(), state.day_state);
        Self {
            state,
            store: SaveStore::new(MemoryStore::new()),
            config,
            cycle,
            scene: Scene::new(),
            escort: Escort::new(),
            player: Player::default(),
            renderer: RecordingRenderer::default(),
            audio: RecordingAudio::default(),
            presenter: ScriptedPresenter::default(),
        }
    }

    pub fn ctx(&mut self) -> GameContext<'_> {
        GameContext {
            state: &mut self.state,
            store: &mut self.store,
            config: &self.config,
            cycle: &mut self.cycle,
            scene: &mut self.scene,
            escort: &mut self.escort,
            player: &mut self.player,
            renderer: &mut self.renderer,
            audio: &mut self.audio,
            presenter: &mut self.presenter,
        }
    }

    /// What the store holds right now.
    pub fn saved_state(&self) -> GameState {
        self.store
            .try_load()
            .expect("stored record is readable")
            .expect("something was saved")
    }
}
