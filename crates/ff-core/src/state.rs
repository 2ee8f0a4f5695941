use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::area::AreaId;
use crate::error::{CoreError, CoreResult};
use crate::item::Inventory;
use crate::quest::{PuzzleKind, QUEST_ORDER, QuestId, QuestState};

/// Named point in the day/night cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    /// Just woken up. Daily counters are reset on entry.
    #[default]
    Morning,
    /// Full daylight, quests happen here.
    Day,
    /// Getting late, bedtime is allowed.
    Evening,
    /// Asleep, chains into the next morning.
    Night,
}

impl DayState {
    /// All states in cycle order.
    pub const ALL: [DayState; 4] = [Self::Morning, Self::Day, Self::Evening, Self::Night];

    /// The state that follows this one in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Morning => Self::Day,
            Self::Day => Self::Evening,
            Self::Evening => Self::Night,
            Self::Night => Self::Morning,
        }
    }

    /// Whether going to bed is allowed.
    pub fn is_bedtime(self) -> bool {
        matches!(self, Self::Evening | Self::Night)
    }

    /// Lowercase id.
    pub fn name(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Day => "day",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The single mutable game-state record. Persisted after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    /// The area the player is in.
    pub current_area: AreaId,
    /// Four ordered item slots.
    pub inventory: Inventory,
    /// Progression state per quest.
    pub quests: BTreeMap<QuestId, QuestState>,
    /// Puzzle types already solved.
    pub puzzles_solved: BTreeSet<PuzzleKind>,
    /// Areas ever entered, in first-visit order. Append-only.
    pub visited_areas: Vec<AreaId>,
    /// Cursor into [`QUEST_ORDER`]: the next quest to deliver by mail.
    pub current_quest_index: usize,
    /// Whether the mailbox holds an undelivered letter.
    pub has_mail_flag: bool,
    /// Current point in the day/night cycle.
    pub day_state: DayState,
    /// Quests completed since the last morning.
    pub quests_completed_today: u32,
    /// Whether teeth were brushed since the last morning.
    pub has_brushed_teeth: bool,
    /// Delivered-item counters of multi-fetch quests, per quest.
    pub quest_progress: BTreeMap<QuestId, u32>,
    /// True only for a freshly created record.
    pub is_new_game: bool,
    /// Spawn keys of quest items already picked up.
    pub collected_items: BTreeSet<String>,
    /// When the record was last written.
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_area: AreaId::HouseInside,
            inventory: Inventory::new(),
            quests: QUEST_ORDER
                .into_iter()
                .map(|q| (q, QuestState::NotStarted))
                .collect(),
            puzzles_solved: BTreeSet::new(),
            visited_areas: vec![AreaId::HouseInside, AreaId::House],
            current_quest_index: 0,
            has_mail_flag: true,
            day_state: DayState::Morning,
            quests_completed_today: 0,
            has_brushed_teeth: false,
            quest_progress: BTreeMap::new(),
            is_new_game: true,
            collected_items: BTreeSet::new(),
            saved_at: None,
        }
    }
}

impl GameState {
    /// A fresh record for a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a quest. Quests missing from the map count as not started.
    pub fn quest_state(&self, quest: QuestId) -> QuestState {
        self.quests.get(&quest).copied().unwrap_or_default()
    }

    /// Move a quest one step forward.
    ///
    /// Fails without mutating when `to` is not the direct successor of the
    /// quest's current state.
    pub fn advance_quest(&mut self, quest: QuestId, to: QuestState) -> CoreResult<()> {
        let from = self.quest_state(quest);
        if from.successor() != Some(to) {
            return Err(CoreError::InvalidTransition { quest, from, to });
        }
        self.quests.insert(quest, to);
        Ok(())
    }

    /// The first active quest in global order.
    pub fn active_quest(&self) -> Option<QuestId> {
        self.active_quests().next()
    }

    /// Every active quest in global order.
    pub fn active_quests(&self) -> impl Iterator<Item = QuestId> + '_ {
        QUEST_ORDER
            .into_iter()
            .filter(|q| self.quest_state(*q) == QuestState::Active)
    }

    /// The quest the mailbox would deliver next, if any remain.
    pub fn next_mail_quest(&self) -> Option<QuestId> {
        QUEST_ORDER.get(self.current_quest_index).copied()
    }

    /// Advance the quest cursor by one, saturating at the number of quests.
    /// Returns the new cursor.
    pub fn advance_quest_cursor(&mut self) -> usize {
        self.current_quest_index = (self.current_quest_index + 1).min(QUEST_ORDER.len());
        self.current_quest_index
    }

    /// Whether the cursor has passed every quest.
    pub fn all_quests_delivered(&self) -> bool {
        self.current_quest_index >= QUEST_ORDER.len()
    }

    /// Number of quests in the `complete` state.
    pub fn completed_count(&self) -> usize {
        QUEST_ORDER
            .into_iter()
            .filter(|q| self.quest_state(*q) == QuestState::Complete)
            .count()
    }

    /// Delivered-item counter for a multi-fetch quest.
    pub fn progress(&self, quest: QuestId) -> u32 {
        self.quest_progress.get(&quest).copied().unwrap_or(0)
    }

    /// Increment a quest's delivered-item counter. Returns the new count.
    pub fn add_progress(&mut self, quest: QuestId) -> u32 {
        let count = self.quest_progress.entry(quest).or_insert(0);
        *count += 1;
        *count
    }

    /// Record a visit. Returns true on the first visit.
    pub fn visit(&mut self, area: AreaId) -> bool {
        if self.visited_areas.contains(&area) {
            return false;
        }
        self.visited_areas.push(area);
        true
    }

    /// Whether a puzzle type has been solved.
    pub fn is_puzzle_solved(&self, puzzle: PuzzleKind) -> bool {
        self.puzzles_solved.contains(&puzzle)
    }

    /// Record a solved puzzle. Returns true if it was not solved before.
    pub fn mark_puzzle_solved(&mut self, puzzle: PuzzleKind) -> bool {
        self.puzzles_solved.insert(puzzle)
    }

    /// Reset the per-day counters. Done on every morning.
    pub fn start_new_day(&mut self) {
        self.quests_completed_today = 0;
        self.has_brushed_teeth = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_defaults() {
        let state = GameState::new();
        assert_eq!(state.current_area, AreaId::HouseInside);
        assert!(state.inventory.is_empty());
        assert_eq!(state.quest_state(QuestId::LostCarrot), QuestState::NotStarted);
        assert_eq!(state.visited_areas, vec![AreaId::HouseInside, AreaId::House]);
        assert!(state.has_mail_flag);
        assert!(state.is_new_game);
        assert_eq!(state.day_state, DayState::Morning);
        assert_eq!(state.next_mail_quest(), Some(QuestId::LostCarrot));
    }

    #[test]
    fn quests_advance_forward_only() {
        let mut state = GameState::new();
        assert!(state.advance_quest(QuestId::HornGem, QuestState::Complete).is_err());
        state.advance_quest(QuestId::HornGem, QuestState::Active).unwrap();
        assert!(state.advance_quest(QuestId::HornGem, QuestState::NotStarted).is_err());
        state.advance_quest(QuestId::HornGem, QuestState::Complete).unwrap();
        assert!(state.advance_quest(QuestId::HornGem, QuestState::Complete).is_err());
        assert_eq!(state.quest_state(QuestId::HornGem), QuestState::Complete);
    }

    #[test]
    fn active_quest_is_first_in_order() {
        let mut state = GameState::new();
        assert_eq!(state.active_quest(), None);
        state.advance_quest(QuestId::FoxHome, QuestState::Active).unwrap();
        state.advance_quest(QuestId::HornGem, QuestState::Active).unwrap();
        assert_eq!(state.active_quest(), Some(QuestId::HornGem));
        assert_eq!(state.active_quests().count(), 2);
    }

    #[test]
    fn cursor_saturates() {
        let mut state = GameState::new();
        for _ in 0..10 {
            state.advance_quest_cursor();
        }
        assert_eq!(state.current_quest_index, QUEST_ORDER.len());
        assert!(state.all_quests_delivered());
        assert_eq!(state.next_mail_quest(), None);
    }

    #[test]
    fn progress_is_scoped_per_quest() {
        let mut state = GameState::new();
        assert_eq!(state.add_progress(QuestId::BuildNest), 1);
        assert_eq!(state.add_progress(QuestId::BuildNest), 2);
        assert_eq!(state.progress(QuestId::BuildNest), 2);
        assert_eq!(state.progress(QuestId::FrogCrown), 0);
    }

    #[test]
    fn visits_are_append_only() {
        let mut state = GameState::new();
        assert!(state.visit(AreaId::Cave));
        assert!(!state.visit(AreaId::Cave));
        assert_eq!(state.visited_areas.last(), Some(&AreaId::Cave));
    }

    #[test]
    fn new_day_resets_counters() {
        let mut state = GameState::new();
        state.quests_completed_today = 2;
        state.has_brushed_teeth = true;
        state.start_new_day();
        assert_eq!(state.quests_completed_today, 0);
        assert!(!state.has_brushed_teeth);
    }

    #[test]
    fn record_uses_camel_case_field_names() {
        let json = serde_json::to_value(GameState::new()).unwrap();
        assert_eq!(json["currentArea"], "houseInside");
        assert_eq!(json["quests"]["lost-carrot"], "notStarted");
        assert_eq!(json["hasMailFlag"], true);
        assert_eq!(json["dayState"], "morning");
        assert_eq!(json["inventory"], serde_json::json!([null, null, null, null]));
    }
}
