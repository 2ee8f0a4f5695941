use std::collections::BTreeSet;

use ff_core::GroundPoint;

use crate::config::GameConfig;
use crate::npc::NpcId;

/// Slack past the follow gap before a follower starts moving again.
const FOLLOW_SLACK: f32 = 0.2;

/// The set of characters currently following the player.
///
/// Lives only as long as the session; a reload starts with nobody following.
#[derive(Debug, Clone, Default)]
pub struct Escort {
    following: BTreeSet<NpcId>,
}

impl Escort {
    /// Nobody following.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start following. Returns false if `npc` already follows.
    pub fn follow(&mut self, npc: NpcId) -> bool {
        let added = self.following.insert(npc);
        if added {
            tracing::info!(%npc, "now following the player");
        }
        added
    }

    /// Stop following. Returns false if `npc` was not following.
    pub fn release(&mut self, npc: NpcId) -> bool {
        self.following.remove(&npc)
    }

    /// Whether `npc` follows the player.
    pub fn is_following(&self, npc: NpcId) -> bool {
        self.following.contains(&npc)
    }

    /// Followers in id order.
    pub fn following(&self) -> impl Iterator<Item = NpcId> + '_ {
        self.following.iter().copied()
    }

    /// Whether nobody follows.
    pub fn is_empty(&self) -> bool {
        self.following.is_empty()
    }
}

/// Where a follower at `from` moves to in `dt` seconds, trailing `player`.
///
/// Returns `None` while it is close enough to stand still.
pub fn follow_step(
    from: GroundPoint,
    player: GroundPoint,
    dt: f32,
    config: &GameConfig,
) -> Option<GroundPoint> {
    let dist = from.distance_to(player);
    if dist <= config.follow_gap + FOLLOW_SLACK {
        return None;
    }
    let step = (config.follow_speed * dt).min(dist - config.follow_gap);
    Some(from.step_towards(player, step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_and_release() {
        let mut escort = Escort::new();
        assert!(escort.follow(NpcId::Fox));
        assert!(!escort.follow(NpcId::Fox));
        assert!(escort.is_following(NpcId::Fox));
        assert!(escort.release(NpcId::Fox));
        assert!(!escort.release(NpcId::Fox));
        assert!(escort.is_empty());
    }

    #[test]
    fn follower_keeps_its_gap() {
        let config = GameConfig::default();
        let player = GroundPoint::new(0.0, 0.0);
        assert_eq!(follow_step(GroundPoint::new(1.6, 0.0), player, 1.0, &config), None);

        let moved = follow_step(GroundPoint::new(10.0, 0.0), player, 1.0, &config).unwrap();
        assert!((moved.x - 7.0).abs() < 1e-5);

        let close = follow_step(GroundPoint::new(2.0, 0.0), player, 1.0, &config).unwrap();
        assert!((close.x - config.follow_gap).abs() < 1e-5);
    }
}
