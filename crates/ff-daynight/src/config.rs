/// Durations (in seconds) and thresholds of the day/night cycle.
#[derive(Debug, Clone)]
pub struct CycleConfig {
    /// Length of one lighting interpolation.
    pub transition_secs: f32,
    /// How long the morning lasts before advancing to day.
    pub morning_hold_secs: f32,
    /// How long the screen stays dark at night before the next morning.
    pub night_hold_secs: f32,
    /// Quests completed in one day before evening falls.
    pub quests_per_day: u32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            transition_secs: 1.0,
            morning_hold_secs: 2.0,
            night_hold_secs: 1.2,
            quests_per_day: 2,
        }
    }
}

impl CycleConfig {
    /// Set the lighting interpolation length.
    pub fn with_transition_secs(mut self, secs: f32) -> Self {
        self.transition_secs = secs.max(0.0);
        self
    }

    /// Set the morning hold before day.
    pub fn with_morning_hold_secs(mut self, secs: f32) -> Self {
        self.morning_hold_secs = secs.max(0.0);
        self
    }

    /// Set the dark hold between night and morning.
    pub fn with_night_hold_secs(mut self, secs: f32) -> Self {
        self.night_hold_secs = secs.max(0.0);
        self
    }

    /// Set how many completed quests bring the evening.
    pub fn with_quests_per_day(mut self, count: u32) -> Self {
        self.quests_per_day = count;
        self
    }

    /// A config where every transition and hold completes instantly.
    pub fn instant() -> Self {
        Self::default()
            .with_transition_secs(0.0)
            .with_morning_hold_secs(0.0)
            .with_night_hold_secs(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = CycleConfig::default();
        assert!((config.transition_secs - 1.0).abs() < f32::EPSILON);
        assert!((config.morning_hold_secs - 2.0).abs() < f32::EPSILON);
        assert!((config.night_hold_secs - 1.2).abs() < f32::EPSILON);
        assert_eq!(config.quests_per_day, 2);
    }

    #[test]
    fn builder_chain_clamps_negative_durations() {
        let config = CycleConfig::default()
            .with_transition_secs(-1.0)
            .with_quests_per_day(3);
        assert_eq!(config.transition_secs, 0.0);
        assert_eq!(config.quests_per_day, 3);
    }
}
