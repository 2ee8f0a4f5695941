use ff_core::{AreaId, GameState, QUEST_ORDER, QuestId, QuestState};

use crate::dialogue::Line;
use crate::npc::NpcId;
use crate::quest::quest_def;

const FALLBACK_HINT: &str = "Keep looking! You can do it! 💜";

/// Whether Spark shows up in `area`.
///
/// In the cave while the gem quest is active, to light the way. At home while
/// some but not all quests are complete, to cheer.
pub fn dragon_appears(area: AreaId, state: &GameState) -> bool {
    match area {
        AreaId::Cave => state.quest_state(QuestId::HornGem) == QuestState::Active,
        AreaId::House => {
            let done = state.completed_count();
            done > 0 && done < QUEST_ORDER.len()
        }
        _ => false,
    }
}

/// Where Spark hovers in `area`.
pub fn dragon_origin(area: AreaId) -> [f32; 3] {
    match area {
        AreaId::Cave => [-2.0, 1.5, 0.0],
        AreaId::House => [-3.0, 1.0, 1.0],
        _ => [4.0, 1.0, -2.0],
    }
}

/// What Spark says when tapped: a greeting with nothing to do, otherwise a
/// hint for the first active quest.
pub fn dragon_lines(state: &GameState) -> Vec<Line> {
    let speaker = NpcId::Dragon.def().name;
    match state.active_quest() {
        None => vec![
            Line::new("Hi Lisa! 🐉", speaker),
            Line::new("Need any help? Just ask!", speaker),
        ],
        Some(quest) => {
            let hint = quest_def(quest).hint.unwrap_or(FALLBACK_HINT);
            vec![Line::new(hint, speaker)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lights_up_the_cave_during_the_gem_quest() {
        let mut state = GameState::new();
        assert!(!dragon_appears(AreaId::Cave, &state));
        state.quests.insert(QuestId::HornGem, QuestState::Active);
        assert!(dragon_appears(AreaId::Cave, &state));
        assert!(!dragon_appears(AreaId::Meadow, &state));
    }

    #[test]
    fn cheers_at_home_between_first_and_last_quest() {
        let mut state = GameState::new();
        assert!(!dragon_appears(AreaId::House, &state));
        state.quests.insert(QuestId::LostCarrot, QuestState::Complete);
        assert!(dragon_appears(AreaId::House, &state));
        for quest in QUEST_ORDER {
            state.quests.insert(quest, QuestState::Complete);
        }
        assert!(!dragon_appears(AreaId::House, &state));
    }

    #[test]
    fn greets_without_an_active_quest() {
        let lines = dragon_lines(&GameState::new());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Hi Lisa! 🐉");
        assert_eq!(lines[0].speaker, "Spark 🐉");
    }

    #[test]
    fn hints_at_the_active_quest() {
        let mut state = GameState::new();
        state.quests.insert(QuestId::BuildNest, QuestState::Active);
        let lines = dragon_lines(&state);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Look for twigs in the forest! 🌿");
    }

    #[test]
    fn origin_depends_on_area() {
        assert_eq!(dragon_origin(AreaId::Cave), [-2.0, 1.5, 0.0]);
        assert_eq!(dragon_origin(AreaId::Glade), [4.0, 1.0, -2.0]);
    }
}
