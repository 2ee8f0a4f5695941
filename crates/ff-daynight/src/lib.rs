//! Day/night cycle for Fairy Fun.
//!
//! Four named day states advance on events rather than on a clock: the morning
//! auto-advances to day after a short hold, day turns to evening once enough
//! quests are done, and going to bed runs night straight into the next morning.
//! Every change interpolates the sky and light levels over a fixed duration, and
//! only one change may be in flight at a time.

/// Tunable durations and thresholds.
pub mod config;
/// The day/night state machine.
pub mod cycle;
/// Sky colors and light levels per day state.
pub mod lighting;

/// Re-export of [`config::CycleConfig`].
pub use config::CycleConfig;
/// Re-exports of [`cycle::CycleEvent`] and [`cycle::DayNightCycle`].
pub use cycle::{CycleEvent, DayNightCycle};
/// Re-exports of [`lighting::Lighting`] and [`lighting::Rgb`].
pub use lighting::{Lighting, Rgb};
