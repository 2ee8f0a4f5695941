use ff_core::{DayState, GameState};

use crate::config::CycleConfig;
use crate::lighting::Lighting;

/// Something that happened while the cycle advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    /// A scheduled follow-up began a transition towards this state.
    Started(DayState),
    /// A transition finished and the state was committed to the game record.
    Entered(DayState),
}

/// A follow-up the cycle schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Followup {
    /// Morning is over.
    BeginDay,
    /// The night fade is over.
    WakeUp,
}

impl Followup {
    fn target(self) -> DayState {
        match self {
            Self::BeginDay => DayState::Day,
            Self::WakeUp => DayState::Morning,
        }
    }
}

#[derive(Debug, Clone)]
struct Transition {
    from: Lighting,
    target: DayState,
    elapsed: f32,
}

#[derive(Debug, Clone)]
struct Pending {
    followup: Followup,
    remaining: f32,
}

/// The day/night state machine.
///
/// Holds the current lighting and at most one transition in flight. Time is
/// fed in through [`DayNightCycle::advance`]; the day state in [`GameState`]
/// only changes when a transition completes.
#[derive(Debug, Clone)]
pub struct DayNightCycle {
    config: CycleConfig,
    lighting: Lighting,
    transition: Option<Transition>,
    pending: Option<Pending>,
}

impl DayNightCycle {
    /// A cycle showing the lighting of `initial`.
    pub fn new(config: CycleConfig, initial: DayState) -> Self {
        Self {
            config,
            lighting: Lighting::for_state(initial),
            transition: None,
            pending: None,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Jump to a state's lighting without interpolating. Used at boot.
    pub fn apply_immediately(&mut self, state: DayState) {
        self.lighting = Lighting::for_state(state);
    }

    /// The lighting right now, including any partial transition.
    pub fn lighting(&self) -> Lighting {
        match &self.transition {
            Some(t) => t.from.blend(Lighting::for_state(t.target), self.progress(t)),
            None => self.lighting,
        }
    }

    /// Whether a transition is running.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// The state a running transition is heading to.
    pub fn transition_target(&self) -> Option<DayState> {
        self.transition.as_ref().map(|t| t.target)
    }

    /// Whether the cycle still has work queued (a transition or a scheduled
    /// follow-up).
    pub fn is_busy(&self) -> bool {
        self.transition.is_some() || self.pending.is_some()
    }

    /// Start a transition to `target`.
    ///
    /// Returns false, changing nothing, while another transition is in flight.
    pub fn request(&mut self, target: DayState) -> bool {
        if let Some(running) = &self.transition {
            tracing::debug!(%target, running = %running.target, "day transition dropped");
            return false;
        }
        tracing::debug!(%target, "day transition started");
        self.transition = Some(Transition {
            from: self.lighting,
            target,
            elapsed: 0.0,
        });
        true
    }

    /// Go to sleep: transition to night, then into the next morning.
    pub fn start_night(&mut self) -> bool {
        self.request(DayState::Night)
    }

    /// Schedule the morning's hand-over to day. Used at boot when the saved
    /// state is morning.
    pub fn schedule_day(&mut self) {
        self.pending = Some(Pending {
            followup: Followup::BeginDay,
            remaining: self.config.morning_hold_secs,
        });
    }

    /// Whether the evening should begin: it is day and enough quests are done.
    pub fn evening_due(&self, state: &GameState) -> bool {
        state.day_state == DayState::Day
            && state.quests_completed_today >= self.config.quests_per_day
    }

    /// Let `dt` seconds pass, completing transitions and firing follow-ups.
    ///
    /// A large `dt` runs through as many chained steps as fit in it.
    pub fn advance(&mut self, dt: f32, state: &mut GameState) -> Vec<CycleEvent> {
        let mut events = Vec::new();
        let mut budget = dt.max(0.0);

        loop {
            if let Some(mut transition) = self.transition.take() {
                let left = (self.config.transition_secs - transition.elapsed).max(0.0);
                if budget < left {
                    transition.elapsed += budget;
                    self.transition = Some(transition);
                    break;
                }
                budget -= left;
                self.commit(transition.target, state, &mut events);
                continue;
            }

            if let Some(mut pending) = self.pending.take() {
                if budget < pending.remaining {
                    pending.remaining -= budget;
                    self.pending = Some(pending);
                    break;
                }
                budget -= pending.remaining;
                let target = pending.followup.target();
                self.request(target);
                events.push(CycleEvent::Started(target));
                continue;
            }

            break;
        }

        events
    }

    fn commit(&mut self, target: DayState, state: &mut GameState, events: &mut Vec<CycleEvent>) {
        self.lighting = Lighting::for_state(target);
        state.day_state = target;
        match target {
            DayState::Morning => {
                state.start_new_day();
                self.schedule_day();
            }
            DayState::Night => {
                self.pending = Some(Pending {
                    followup: Followup::WakeUp,
                    remaining: self.config.night_hold_secs,
                });
            }
            DayState::Day | DayState::Evening => {}
        }
        tracing::info!(day_state = %target, "day state changed");
        events.push(CycleEvent::Entered(target));
    }

    fn progress(&self, transition: &Transition) -> f32 {
        if self.config.transition_secs <= 0.0 {
            return 1.0;
        }
        transition.elapsed / self.config.transition_secs
    }
}
