//! Persistence of the [`GameState`] record in a key-value backend.
//!
//! The record is stored as one JSON object under [`SAVE_KEY`]. Loading merges
//! the stored object's top-level keys over the default record, so fields added
//! later fall back to their defaults, and entries naming unknown quests,
//! areas or items are dropped. A record that cannot be read or parsed never
//! fails the boot: it is logged and replaced by a fresh game.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

use crate::area::AreaId;
use crate::error::StoreResult;
use crate::item::ItemKind;
use crate::quest::{PuzzleKind, QuestId, QuestState};
use crate::state::GameState;

/// Storage key of the game record.
pub const SAVE_KEY: &str = "fairyfun-save";

/// Field of records written before multi-fetch progress was tracked per quest.
const LEGACY_TWIG_COUNT: &str = "twigCount";

/// A string key-value backend.
pub trait KeyValueStore {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// In-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory backend: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file that holds `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Loads and saves the game record through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SaveStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SaveStore<S> {
    /// A store using the default key.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, SAVE_KEY)
    }

    /// A store using a custom key.
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Whether a record is stored.
    pub fn exists(&self) -> bool {
        matches!(self.backend.get(&self.key), Ok(Some(_)))
    }

    /// Load the record, or defaults when none is stored or it is unusable.
    ///
    /// A loaded record is never a new game.
    pub fn load(&self) -> GameState {
        match self.try_load() {
            Ok(Some(state)) => {
                tracing::debug!(key = %self.key, area = %state.current_area, "loaded save");
                state
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "no save found, starting a new game");
                GameState::default()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unreadable save");
                GameState::default()
            }
        }
    }

    /// Load the record, surfacing backend and decoding errors.
    pub fn try_load(&self) -> StoreResult<Option<GameState>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        let stored: Value = serde_json::from_str(&raw)?;
        let mut state: GameState = serde_json::from_value(merge_over_defaults(stored)?)?;
        state.is_new_game = false;
        Ok(Some(state))
    }

    /// Write the record, stamping its save time.
    pub fn save(&mut self, state: &mut GameState) -> StoreResult<()> {
        state.saved_at = Some(Utc::now());
        let json = serde_json::to_string(state)?;
        self.backend.set(&self.key, &json)
    }

    /// Remove the stored record and return a fresh one.
    pub fn reset(&mut self) -> StoreResult<GameState> {
        self.backend.remove(&self.key)?;
        tracing::info!(key = %self.key, "save reset");
        Ok(GameState::default())
    }
}

/// Shallow merge of a stored record over the default one.
///
/// Entries that do not decode are dropped one by one so the rest of the
/// record survives: unknown quests, areas, puzzles and items inside the
/// collections, then any top-level field whose value still does not fit.
fn merge_over_defaults(stored: Value) -> StoreResult<Value> {
    let Value::Object(mut base) = serde_json::to_value(GameState::default())? else {
        return Ok(stored);
    };
    let Value::Object(mut stored) = stored else {
        return Err(serde_json::Error::custom("save record is not a JSON object").into());
    };

    migrate_twig_count(&stored, &mut base);
    stored.remove(LEGACY_TWIG_COUNT);
    drop_unknown_entries(&mut stored);

    for (key, value) in stored {
        let previous = base.insert(key.clone(), value);
        if serde_json::from_value::<GameState>(Value::Object(base.clone())).is_err() {
            tracing::warn!(field = %key, "dropping undecodable save field");
            if let Some(default) = previous {
                base.insert(key, default);
            } else {
                base.remove(&key);
            }
        }
    }
    Ok(Value::Object(base))
}

fn decodes<T: DeserializeOwned>(value: &Value) -> bool {
    serde_json::from_value::<T>(value.clone()).is_ok()
}

fn drop_unknown_entries(stored: &mut Map<String, Value>) {
    for (field, value) in stored.iter_mut() {
        match field.as_str() {
            "quests" => retain_entries::<QuestId, QuestState>(field, value),
            "questProgress" => retain_entries::<QuestId, u32>(field, value),
            "visitedAreas" => retain_elements::<AreaId>(field, value),
            "puzzlesSolved" => retain_elements::<PuzzleKind>(field, value),
            "inventory" => empty_unknown_slots(value),
            _ => {}
        }
    }
}

fn retain_entries<K: DeserializeOwned, V: DeserializeOwned>(field: &str, value: &mut Value) {
    let Value::Object(entries) = value else {
        return;
    };
    entries.retain(|key, entry| {
        let keep = decodes::<K>(&Value::String(key.clone())) && decodes::<V>(entry);
        if !keep {
            tracing::warn!(field, key = %key, "dropping unknown save entry");
        }
        keep
    });
}

fn retain_elements<T: DeserializeOwned>(field: &str, value: &mut Value) {
    let Value::Array(items) = value else {
        return;
    };
    items.retain(|item| {
        let keep = decodes::<T>(item);
        if !keep {
            tracing::warn!(field, value = %item, "dropping unknown save entry");
        }
        keep
    });
}

/// Unknown items become empty slots so the others keep their positions.
fn empty_unknown_slots(value: &mut Value) {
    let Value::Array(slots) = value else {
        return;
    };
    for slot in slots.iter_mut() {
        if !decodes::<Option<ItemKind>>(slot) {
            tracing::warn!(item = %slot, "emptying unknown inventory slot");
            *slot = Value::Null;
        }
    }
}

/// Move a legacy shared twig counter into the nest quest's progress.
fn migrate_twig_count(stored: &Map<String, Value>, base: &mut Map<String, Value>) {
    if stored.contains_key("questProgress") {
        return;
    }
    let Some(count) = stored.get(LEGACY_TWIG_COUNT).and_then(Value::as_u64) else {
        return;
    };
    if count == 0 {
        return;
    }
    let mut progress = Map::new();
    progress.insert(QuestId::BuildNest.as_str().to_string(), Value::from(count));
    base.insert("questProgress".into(), Value::Object(progress));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Inventory;
    use crate::state::DayState;

    fn store_with(raw: &str) -> SaveStore<MemoryStore> {
        let mut backend = MemoryStore::new();
        backend.set(SAVE_KEY, raw).unwrap();
        SaveStore::new(backend)
    }

    #[test]
    fn empty_store_gives_new_game() {
        let store = SaveStore::new(MemoryStore::new());
        assert!(!store.exists());
        let state = store.load();
        assert!(state.is_new_game);
        assert_eq!(state.current_area, AreaId::HouseInside);
    }

    #[test]
    fn save_and_reload_keeps_inventory_and_cursor() {
        let mut store = SaveStore::new(MemoryStore::new());
        let mut state = GameState::new();
        state.inventory = Inventory::from(vec![None, Some(ItemKind::Gem), None, None]);
        state.current_quest_index = 2;
        store.save(&mut state).unwrap();
        assert!(state.saved_at.is_some());

        let loaded = store.load();
        assert_eq!(loaded.inventory, state.inventory);
        assert_eq!(loaded.current_quest_index, 2);
        assert!(!loaded.is_new_game);
    }

    #[test]
    fn stored_keys_override_defaults() {
        let store = store_with(r#"{"currentArea":"cave","dayState":"evening"}"#);
        let state = store.load();
        assert_eq!(state.current_area, AreaId::Cave);
        assert_eq!(state.day_state, DayState::Evening);
        // Untouched keys keep their defaults.
        assert!(state.has_mail_flag);
        assert_eq!(state.visited_areas, vec![AreaId::HouseInside, AreaId::House]);
        assert_eq!(state.quest_state(QuestId::FindMom), QuestState::NotStarted);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        for raw in ["not json", "[1,2,3]", r#"{"currentArea":"moon"}"#] {
            let state = store_with(raw).load();
            assert_eq!(state.current_area, AreaId::HouseInside, "raw: {raw}");
        }
    }

    #[test]
    fn legacy_twig_count_moves_to_nest_progress() {
        let state = store_with(r#"{"twigCount":2}"#).load();
        assert_eq!(state.progress(QuestId::BuildNest), 2);
    }

    #[test]
    fn explicit_progress_wins_over_legacy_counter() {
        let state =
            store_with(r#"{"twigCount":2,"questProgress":{"build-nest":1}}"#).load();
        assert_eq!(state.progress(QuestId::BuildNest), 1);
    }

    #[test]
    fn unknown_quest_keeps_the_rest_of_the_save() {
        let state = store_with(
            r#"{"currentArea":"cave","quests":{"lost-carrot":"complete","heal-hedgehog":"active"},"currentQuestIndex":1}"#,
        )
        .load();
        assert_eq!(state.current_area, AreaId::Cave);
        assert_eq!(state.quest_state(QuestId::LostCarrot), QuestState::Complete);
        assert_eq!(state.current_quest_index, 1);
        assert!(!state.is_new_game);
    }

    #[test]
    fn unknown_entries_are_dropped_one_by_one() {
        let state = store_with(
            r#"{"currentArea":"glen","dayState":"dusk","visitedAreas":["houseInside","moon","glen"],
                "puzzlesSolved":["memory","chess"],"questProgress":{"build-nest":2,"heal-hedgehog":1},
                "inventory":["gem","banana","twig"]}"#,
        )
        .load();
        assert_eq!(state.current_area, AreaId::Glen);
        assert_eq!(state.day_state, DayState::Morning);
        assert_eq!(state.visited_areas, vec![AreaId::HouseInside, AreaId::Glen]);
        assert_eq!(state.puzzles_solved.len(), 1);
        assert!(state.puzzles_solved.contains(&PuzzleKind::Memory));
        assert_eq!(state.progress(QuestId::BuildNest), 2);
        assert_eq!(
            state.inventory.slots(),
            &[Some(ItemKind::Gem), None, Some(ItemKind::Twig), None]
        );
    }

    #[test]
    fn bad_inventory_is_normalised() {
        let state = store_with(r#"{"inventory":null}"#).load();
        assert!(state.inventory.is_empty());

        let state = store_with(r#"{"inventory":["twig"]}"#).load();
        assert_eq!(state.inventory.count(ItemKind::Twig), 1);
        assert_eq!(state.inventory.slots().len(), 4);
    }

    #[test]
    fn reset_removes_record() {
        let mut store = SaveStore::new(MemoryStore::new());
        let mut state = GameState::new();
        state.current_area = AreaId::Glen;
        store.save(&mut state).unwrap();
        assert!(store.exists());

        let fresh = store.reset().unwrap();
        assert!(!store.exists());
        assert!(fresh.is_new_game);
        assert_eq!(store.load().current_area, AreaId::HouseInside);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SaveStore::new(FileStore::new(dir.path().join("saves")));
        assert!(!store.exists());

        let mut state = GameState::new();
        state.visit(AreaId::Creek);
        store.save(&mut state).unwrap();
        assert!(store.backend().path_for(SAVE_KEY).exists());

        let loaded = store.load();
        assert!(loaded.visited_areas.contains(&AreaId::Creek));

        store.reset().unwrap();
        store.reset().unwrap();
        assert!(!store.exists());
    }
}
