use ff_daynight::CycleConfig;

/// What happens to a picked-up quest item when its area is built again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemRespawn {
    /// A picked-up item never reappears.
    #[default]
    UntilCollected,
    /// Every item of an active quest is placed again on each area build.
    Always,
}

/// Tunable game parameters. Distances are ground units, times are seconds.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Player walking speed, units per second.
    pub player_speed: f32,
    /// Distance at which a walk target counts as reached.
    pub arrive_epsilon: f32,
    /// Distance at which a deferred interaction fires.
    pub interact_radius: f32,
    /// Distance from the centre along an axis that triggers an edge transition.
    pub edge_threshold: f32,
    /// Distance an escorted NPC keeps behind the player.
    pub follow_gap: f32,
    /// Escorted NPC speed, units per second.
    pub follow_speed: f32,
    /// Length of the fade that covers an area transition.
    pub fade_secs: f32,
    /// Respawn policy for picked-up quest items.
    pub item_respawn: ItemRespawn,
    /// Whether a quest may start while another is active.
    pub allow_concurrent_quests: bool,
    /// Day/night timings.
    pub cycle: CycleConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            arrive_epsilon: 0.15,
            interact_radius: 1.5,
            edge_threshold: 8.5,
            follow_gap: 1.5,
            follow_speed: 3.0,
            fade_secs: 0.3,
            item_respawn: ItemRespawn::default(),
            allow_concurrent_quests: false,
            cycle: CycleConfig::default(),
        }
    }
}

impl GameConfig {
    /// Set the player walking speed.
    pub fn with_player_speed(mut self, speed: f32) -> Self {
        self.player_speed = speed;
        self
    }

    /// Set the interaction radius.
    pub fn with_interact_radius(mut self, radius: f32) -> Self {
        self.interact_radius = radius;
        self
    }

    /// Set the edge transition threshold.
    pub fn with_edge_threshold(mut self, threshold: f32) -> Self {
        self.edge_threshold = threshold;
        self
    }

    /// Set the area fade length.
    pub fn with_fade_secs(mut self, secs: f32) -> Self {
        self.fade_secs = secs.max(0.0);
        self
    }

    /// Set the item respawn policy.
    pub fn with_item_respawn(mut self, policy: ItemRespawn) -> Self {
        self.item_respawn = policy;
        self
    }

    /// Allow or forbid concurrent active quests.
    pub fn with_concurrent_quests(mut self, allow: bool) -> Self {
        self.allow_concurrent_quests = allow;
        self
    }

    /// Set the day/night timings.
    pub fn with_cycle(mut self, cycle: CycleConfig) -> Self {
        self.cycle = cycle;
        self
    }

    /// A config with no fades and an instant day/night cycle, for driving
    /// the game step by step.
    pub fn instant() -> Self {
        Self::default()
            .with_fade_secs(0.0)
            .with_cycle(CycleConfig::instant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = GameConfig::default();
        assert!((config.player_speed - 5.0).abs() < f32::EPSILON);
        assert!((config.interact_radius - 1.5).abs() < f32::EPSILON);
        assert!((config.edge_threshold - 8.5).abs() < f32::EPSILON);
        assert_eq!(config.item_respawn, ItemRespawn::UntilCollected);
        assert!(!config.allow_concurrent_quests);
        assert_eq!(config.cycle.quests_per_day, 2);
    }

    #[test]
    fn builder_chain() {
        let config = GameConfig::default()
            .with_player_speed(8.0)
            .with_item_respawn(ItemRespawn::Always)
            .with_concurrent_quests(true);
        assert!((config.player_speed - 8.0).abs() < f32::EPSILON);
        assert_eq!(config.item_respawn, ItemRespawn::Always);
        assert!(config.allow_concurrent_quests);
    }

    #[test]
    fn instant_has_no_waits() {
        let config = GameConfig::instant();
        assert_eq!(config.fade_secs, 0.0);
        assert_eq!(config.cycle.transition_secs, 0.0);
    }
}
