use ff_core::GroundPoint;

use crate::config::GameConfig;
use crate::ports::Target;

/// Lisa's position, walk target, and pending interaction.
#[derive(Debug, Clone, Default)]
pub struct Player {
    position: GroundPoint,
    destination: Option<GroundPoint>,
    intent: Option<(Target, GroundPoint)>,
}

impl Player {
    /// A player standing at `position`.
    pub fn new(position: GroundPoint) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Where the player stands.
    pub fn position(&self) -> GroundPoint {
        self.position
    }

    /// Where the player is walking to.
    pub fn destination(&self) -> Option<GroundPoint> {
        self.destination
    }

    /// The interaction that fires on arrival.
    pub fn intent(&self) -> Option<&Target> {
        self.intent.as_ref().map(|(target, _)| target)
    }

    /// Whether the player is walking.
    pub fn is_moving(&self) -> bool {
        self.destination.is_some()
    }

    /// Jump to `at`, dropping any walk and intent.
    pub fn teleport(&mut self, at: GroundPoint) {
        self.position = at;
        self.destination = None;
        self.intent = None;
    }

    /// Walk to a ground point. Replaces any pending interaction.
    pub fn walk_to(&mut self, at: GroundPoint) {
        self.destination = Some(at);
        self.intent = None;
    }

    /// Walk towards `target` standing at `at` and interact once close enough.
    pub fn approach(&mut self, target: Target, at: GroundPoint) {
        self.destination = Some(at);
        self.intent = Some((target, at));
    }

    /// Move for `dt` seconds.
    ///
    /// Returns the pending interaction once the player is within the
    /// interaction radius of it; movement stops at that point.
    pub fn update(&mut self, dt: f32, config: &GameConfig) -> Option<Target> {
        if let Some(target) = self.reached_intent(config) {
            return Some(target);
        }

        let destination = self.destination?;
        self.position = self
            .position
            .step_towards(destination, config.player_speed * dt);
        if self.position.distance_to(destination) <= config.arrive_epsilon {
            self.position = destination;
            self.destination = None;
        }
        self.reached_intent(config)
    }

    fn reached_intent(&mut self, config: &GameConfig) -> Option<Target> {
        let within = self
            .intent
            .as_ref()
            .is_some_and(|(_, at)| self.position.distance_to(*at) <= config.interact_radius);
        if !within {
            return None;
        }
        self.destination = None;
        self.intent.take().map(|(target, _)| target)
    }
}
