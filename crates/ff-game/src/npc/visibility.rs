use ff_core::{AreaId, GameState, QuestState};

use crate::npc::{Escort, NpcId};

/// Whether `npc` appears in `area`.
///
/// A character appears in its home area or wherever it follows the player.
/// Characters gated on a quest stay hidden until that quest is complete. The
/// roaming dragon is never placed through this rule.
pub fn is_visible(npc: NpcId, area: AreaId, state: &GameState, escort: &Escort) -> bool {
    let def = npc.def();
    let unlocked = def
        .visible_after
        .is_none_or(|gate| state.quest_state(gate) == QuestState::Complete);
    if !unlocked {
        return false;
    }
    def.home == Some(area) || escort.is_following(npc)
}

/// Every character that appears in `area`.
pub fn visible_in(area: AreaId, state: &GameState, escort: &Escort) -> Vec<NpcId> {
    NpcId::ALL
        .into_iter()
        .filter(|npc| is_visible(*npc, area, state, escort))
        .collect()
}

/// Whether the quest marker floats above `npc`: its quest is still open.
pub fn shows_indicator(npc: NpcId, state: &GameState) -> bool {
    npc.def()
        .quest
        .is_some_and(|quest| state.quest_state(quest).is_open())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff_core::QuestId;

    #[test]
    fn residents_appear_at_home_only() {
        let state = GameState::new();
        let escort = Escort::new();
        assert!(is_visible(NpcId::Bunny, AreaId::Meadow, &state, &escort));
        assert!(!is_visible(NpcId::Bunny, AreaId::Glade, &state, &escort));
        assert!(!is_visible(NpcId::Dragon, AreaId::House, &state, &escort));
    }

    #[test]
    fn followers_appear_everywhere() {
        let state = GameState::new();
        let mut escort = Escort::new();
        escort.follow(NpcId::Fox);
        assert!(is_visible(NpcId::Fox, AreaId::Creek, &state, &escort));
        assert_eq!(visible_in(AreaId::Creek, &state, &escort), vec![NpcId::Frog, NpcId::Fox]);
    }

    #[test]
    fn mothers_wait_for_their_quest() {
        let mut state = GameState::new();
        let escort = Escort::new();
        assert!(!is_visible(NpcId::FoxMom, AreaId::Glade, &state, &escort));
        state.advance_quest(QuestId::FoxHome, QuestState::Active).unwrap();
        assert!(!is_visible(NpcId::FoxMom, AreaId::Glade, &state, &escort));
        state.advance_quest(QuestId::FoxHome, QuestState::Complete).unwrap();
        assert!(is_visible(NpcId::FoxMom, AreaId::Glade, &state, &escort));
    }

    #[test]
    fn indicator_tracks_open_quests() {
        let mut state = GameState::new();
        assert!(shows_indicator(NpcId::Bunny, &state));
        state.advance_quest(QuestId::LostCarrot, QuestState::Active).unwrap();
        assert!(shows_indicator(NpcId::Bunny, &state));
        state.advance_quest(QuestId::LostCarrot, QuestState::Complete).unwrap();
        assert!(!shows_indicator(NpcId::Bunny, &state));
        assert!(!shows_indicator(NpcId::FoxMom, &state));
    }
}
