//! Persistence boundary: a key-value snapshot store and the player snapshot
//! read at startup / written after every change.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::config::{KEY_PLAYER_DATA, KEY_SETTING_VARIANT};
use crate::error::{GameError, Result};
use crate::model::PlayerRecord;
use crate::session::GameVariant;
use crate::util::{clog, cwarn};

pub trait SnapshotStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SnapshotStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let store =
            Self::storage().ok_or_else(|| GameError::Storage("localStorage unavailable".into()))?;
        store
            .set_item(key, value)
            .map_err(|e| GameError::Storage(format!("write to {key} failed: {e:?}")))
    }

    fn remove(&self, key: &str) {
        if let Some(store) = Self::storage() {
            let _ = store.remove_item(key);
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPlayer {
    pub record: PlayerRecord,
    /// No usable snapshot existed; the name prompt should be shown.
    pub first_run: bool,
}

pub fn load_player(store: &dyn SnapshotStore) -> LoadedPlayer {
    let Some(raw) = store.get(KEY_PLAYER_DATA) else {
        clog("no player snapshot, starting fresh");
        return LoadedPlayer {
            record: PlayerRecord::default(),
            first_run: true,
        };
    };
    match serde_json::from_str::<PlayerRecord>(&raw) {
        Ok(record) => {
            let record = record.normalized();
            clog(&format!(
                "loaded player {} (level {}, score {})",
                record.name, record.level, record.score
            ));
            LoadedPlayer {
                record,
                first_run: false,
            }
        }
        Err(e) => {
            cwarn(&format!("player snapshot unreadable, resetting: {e}"));
            LoadedPlayer {
                record: PlayerRecord::default(),
                first_run: true,
            }
        }
    }
}

pub fn save_player(store: &dyn SnapshotStore, record: &PlayerRecord) -> Result<()> {
    let json = serde_json::to_string(record)?;
    store.set(KEY_PLAYER_DATA, &json)
}

pub fn load_variant(store: &dyn SnapshotStore) -> GameVariant {
    match store.get(KEY_SETTING_VARIANT).as_deref() {
        Some("clicker") => GameVariant::Clicker,
        _ => GameVariant::Story,
    }
}

pub fn save_variant(store: &dyn SnapshotStore, variant: GameVariant) -> Result<()> {
    store.set(KEY_SETTING_VARIANT, variant.key())
}

/// Remove every saved key.
pub fn wipe(store: &dyn SnapshotStore) {
    store.remove(KEY_PLAYER_DATA);
    store.remove(KEY_SETTING_VARIANT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_snapshot_is_first_run() {
        let store = MemoryStore::default();
        let loaded = load_player(&store);
        assert!(loaded.first_run);
        assert_eq!(loaded.record, PlayerRecord::default());
    }

    #[test]
    fn saved_record_loads_back() {
        let store = MemoryStore::default();
        let record = PlayerRecord::default()
            .apply_reward(80, 250)
            .record_ending("Lone Wolf")
            .rename_profile("Trinity")
            .unwrap();
        save_player(&store, &record).unwrap();
        let loaded = load_player(&store);
        assert!(!loaded.first_run);
        assert_eq!(loaded.record, record);
    }

    #[test]
    fn corrupt_snapshot_falls_back_to_defaults() {
        let store = MemoryStore::default();
        store.set(KEY_PLAYER_DATA, "{not json").unwrap();
        let loaded = load_player(&store);
        assert!(loaded.first_run);
        assert_eq!(loaded.record, PlayerRecord::default());
    }

    #[test]
    fn loaded_snapshot_is_normalized() {
        let store = MemoryStore::default();
        store
            .set(
                KEY_PLAYER_DATA,
                r#"{"name":"Neo","level":0,"endings":["A","A","B"]}"#,
            )
            .unwrap();
        let loaded = load_player(&store);
        assert_eq!(loaded.record.level, 1);
        assert_eq!(loaded.record.endings, vec!["A", "B"]);
    }

    #[test]
    fn reads_snapshot_written_in_camel_case() {
        let store = MemoryStore::default();
        store
            .set(
                KEY_PLAYER_DATA,
                r#"{"name":"Neo","level":3,"xp":20,"xpToNextLevel":225,"score":900,"clicks":4,"storyProgress":7,"endings":[]}"#,
            )
            .unwrap();
        let record = load_player(&store).record;
        assert_eq!(record.xp_to_next_level, 225);
        assert_eq!(record.story_progress, 7);
        assert_eq!(record.clicks, 4);
    }

    #[test]
    fn variant_setting_round_trip_and_wipe() {
        let store = MemoryStore::default();
        assert_eq!(load_variant(&store), GameVariant::Story);
        save_variant(&store, GameVariant::Clicker).unwrap();
        assert_eq!(load_variant(&store), GameVariant::Clicker);
        save_player(&store, &PlayerRecord::default()).unwrap();
        wipe(&store);
        assert_eq!(load_variant(&store), GameVariant::Story);
        assert!(load_player(&store).first_run);
    }
}
