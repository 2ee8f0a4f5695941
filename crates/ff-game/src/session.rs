use ff_core::{DayState, Direction, GameState, GroundPoint, KeyValueStore, SaveStore};
use ff_daynight::{CycleEvent, DayNightCycle};

use crate::area::{self, Scene, build_area, check_edges, tick_transition};
use crate::config::GameConfig;
use crate::context::GameContext;
use crate::dialogue::{GOOD_MORNING, INTRO, WAKE_UP};
use crate::error::{GameError, GameResult};
use crate::house;
use crate::npc::{Escort, NpcId, follow_step};
use crate::player::Player;
use crate::ports::{Audio, Presenter, Renderer, ScreenPoint, Target};
use crate::quest::{handle_npc_interaction, pickup};
use crate::resolver::resolve_target;

/// A running game.
///
/// Owns the game record, its store, and every subsystem, and hands them to
/// the handlers through a [`GameContext`]. The front end feeds it taps and
/// elapsed time.
pub struct GameSession<S, R, A, P> {
    state: GameState,
    store: SaveStore<S>,
    config: GameConfig,
    cycle: DayNightCycle,
    scene: Scene,
    escort: Escort,
    player: Player,
    renderer: R,
    audio: A,
    presenter: P,
}

impl<S, R, A, P> GameSession<S, R, A, P>
where
    S: KeyValueStore,
    R: Renderer,
    A: Audio,
    P: Presenter,
{
    /// Load the saved game, or a new one, without showing anything yet.
    pub fn new(store: SaveStore<S>, renderer: R, audio: A, presenter: P, config: GameConfig) -> Self {
        let state = store.load();
        let cycle = DayNightCycle::new(config.cycle.clone(), state.day_state);
        let player = Player::new(state.current_area.node().entry_point(None));
        Self {
            state,
            store,
            config,
            cycle,
            scene: Scene::new(),
            escort: Escort::new(),
            player,
            renderer,
            audio,
            presenter,
        }
    }

    fn ctx(&mut self) -> GameContext<'_> {
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

    /// Boot: show the saved time of day at once, build the saved area, and
    /// greet a new player. A morning boot hands over to day after a while.
    pub fn start(&mut self) -> GameResult<()> {
        let day = self.state.day_state;
        self.cycle.apply_immediately(day);
        self.renderer.set_lighting(self.cycle.lighting());

        let area = self.state.current_area;
        let mut ctx = self.ctx();
        build_area(&mut ctx, area, None)?;

        if ctx.state.is_new_game {
            ctx.say(&WAKE_UP);
            ctx.state.is_new_game = false;
            ctx.save();
        }
        if day == DayState::Morning {
            ctx.cycle.schedule_day();
        }
        tracing::info!(%area, %day, "game started");
        Ok(())
    }

    /// Let `dt` seconds pass.
    ///
    /// Moves the player and fires a pending interaction on arrival, moves
    /// followers, watches the edges, runs area fades, and advances the
    /// day/night cycle.
    pub fn update(&mut self, dt: f32) -> GameResult<()> {
        let mut ctx = self.ctx();

        let reached = ctx.player.update(dt, ctx.config);
        ctx.renderer.set_player_position(ctx.player.position());
        if let Some(target) = reached {
            interact(&mut ctx, target)?;
        }

        move_followers(&mut ctx, dt);
        check_edges(&mut ctx);
        tick_transition(&mut ctx, dt)?;

        for event in ctx.cycle.advance(dt, ctx.state) {
            if let CycleEvent::Entered(state) = event {
                ctx.save();
                if state == DayState::Morning {
                    ctx.say(&GOOD_MORNING);
                }
            }
        }
        ctx.renderer.set_lighting(ctx.cycle.lighting());
        Ok(())
    }

    /// Keep updating in `step` second slices until the player stands still
    /// and no area transition is pending, for at most `limit` seconds.
    /// Returns the time spent.
    pub fn settle(&mut self, step: f32, limit: f32) -> GameResult<f32> {
        let mut elapsed = 0.0;
        while elapsed < limit && (self.player.is_moving() || self.scene.is_transitioning()) {
            self.update(step)?;
            elapsed += step;
        }
        Ok(elapsed)
    }

    /// Handle a tap on the screen: on something interactive the player walks
    /// over to use it, on the ground the player walks there.
    pub fn tap(&mut self, point: ScreenPoint) -> GameResult<()> {
        if self.scene.is_transitioning() {
            return Ok(());
        }
        if let Some(target) = self.renderer.hit_test(point) {
            return self.tap_target(target);
        }
        if let Some(at) = self.renderer.ground_at(point) {
            self.player.walk_to(at);
        }
        Ok(())
    }

    /// Walk over to `target` and use it on arrival.
    pub fn tap_target(&mut self, target: Target) -> GameResult<()> {
        let Some(at) = self.scene.position_of(&target) else {
            return Err(GameError::TargetNotHere(target));
        };
        self.player.approach(target, at);
        Ok(())
    }

    /// Use `target` right away, wherever the player stands.
    pub fn interact_with(&mut self, target: Target) -> GameResult<()> {
        if !self.scene.contains(&target) {
            return Err(GameError::TargetNotHere(target));
        }
        let mut ctx = self.ctx();
        interact(&mut ctx, target)
    }

    /// Walk to a ground point.
    pub fn walk_to(&mut self, at: GroundPoint) {
        self.player.walk_to(at);
    }

    /// Leave the area through `dir`. Returns false when nothing lies that way
    /// or a transition is already running.
    pub fn navigate(&mut self, dir: Direction) -> bool {
        let mut ctx = self.ctx();
        area::navigate(&mut ctx, dir)
    }

    /// Find a tap target in the current area by name.
    pub fn resolve_target(&self, name: &str) -> GameResult<Target> {
        resolve_target(&self.scene, name).ok_or_else(|| GameError::UnknownTarget(name.to_string()))
    }

    /// The story shown before the game starts.
    pub fn intro_lines(&self) -> &'static [&'static str] {
        &INTRO
    }

    /// The game record.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The game parameters.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current area's contents.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The player character.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Who follows the player.
    pub fn escort(&self) -> &Escort {
        &self.escort
    }

    /// The day/night cycle.
    pub fn cycle(&self) -> &DayNightCycle {
        &self.cycle
    }

    /// The save store.
    pub fn store(&self) -> &SaveStore<S> {
        &self.store
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The audio service.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presenter, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

/// Route a fired interaction to the handler for its kind of target.
fn interact(ctx: &mut GameContext<'_>, target: Target) -> GameResult<()> {
    tracing::debug!(%target, "interaction");
    match target {
        Target::Npc(npc) => handle_npc_interaction(ctx, npc),
        Target::Item(key) => {
            pickup(ctx, &key);
            Ok(())
        }
        Target::Prop(name) => house::handle_prop(ctx, name).map(|_| ()),
    }
}

fn move_followers(ctx: &mut GameContext<'_>, dt: f32) {
    let player = ctx.player.position();
    let followers: Vec<NpcId> = ctx.escort.following().collect();
    for npc in followers {
        let Some(from) = ctx.scene.npc_position(npc) else {
            continue;
        };
        if let Some(to) = follow_step(from, player, dt, ctx.config) {
            ctx.scene.move_npc(npc, to);
            ctx.renderer.set_npc_position(npc, to);
        }
    }
}
