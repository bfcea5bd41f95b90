//! The single save slot.
//!
//! A save holds the player verbatim plus the tail of the narrative log.
//! Anything that fails to parse loads as "no save". A save that parses
//! but names places or classes the world lacks is rejected on restore.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use hk_core::{CoreResult, GameLog, LogEntry, PlayerState, World};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SessionResult;

/// File name of the default save slot.
pub const DEFAULT_SAVE_FILE: &str = "hawkins_save.json";

/// What goes into the save slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    /// The player, exactly as it was.
    pub player: PlayerState,
    /// The most recent log entries, oldest first.
    pub history: Vec<LogEntry>,
    /// When the save was written.
    pub saved_at: DateTime<Utc>,
}

impl SaveData {
    /// Snapshot the player and the last `history_limit` log entries.
    pub fn capture(player: &PlayerState, log: &GameLog, history_limit: usize) -> Self {
        Self {
            player: player.clone(),
            history: log.tail(history_limit).to_vec(),
            saved_at: Utc::now(),
        }
    }

    /// Confirm every location and class the player refers to exists in `world`.
    pub fn check_against(&self, world: &World) -> CoreResult<()> {
        let player = &self.player;
        world.location(&player.current_location_id)?;
        if let Some(previous) = &player.previous_location_id {
            world.location(previous)?;
        }
        if let Some(class) = player.class {
            world.class_stats(class)?;
        }
        Ok(())
    }

    fn decode(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(data) => Some(data),
            Err(e) => {
                warn!(error = %e, "save file corrupted, ignoring it");
                None
            }
        }
    }
}

/// Storage for the single save slot.
pub trait SaveStore {
    /// Read the slot. Missing or corrupt data is `None`.
    fn load(&self) -> Option<SaveData>;

    /// Overwrite the slot.
    fn save(&mut self, data: &SaveData) -> SessionResult<()>;

    /// Empty the slot. Clearing an empty slot is not an error.
    fn clear(&mut self) -> SessionResult<()>;
}

/// A save slot backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the save lives.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Option<SaveData> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => SaveData::decode(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read save file");
                None
            }
        }
    }

    fn save(&mut self, data: &SaveData) -> SessionResult<()> {
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "game saved");
        Ok(())
    }

    fn clear(&mut self) -> SessionResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// A save slot held in memory as serialized JSON.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot preloaded with raw text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
        }
    }

    /// The raw slot contents.
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Option<SaveData> {
        self.slot.as_deref().and_then(SaveData::decode)
    }

    fn save(&mut self, data: &SaveData) -> SessionResult<()> {
        self.slot = Some(serde_json::to_string(data)?);
        Ok(())
    }

    fn clear(&mut self) -> SessionResult<()> {
        self.slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hk_core::World;

    fn sample() -> SaveData {
        let world = World::hawkins().unwrap();
        let mut player = PlayerState::new("arcade", world.unclassed_stats().unwrap());
        player.add_item("arcade_token");
        player.set_flag("visited_arcade");
        let mut log = GameLog::new();
        for n in 0..60 {
            log.info(format!("line {n}"));
        }
        SaveData::capture(&player, &log, 50)
    }

    #[test]
    fn capture_keeps_the_tail() {
        let data = sample();
        assert_eq!(data.history.len(), 50);
        assert_eq!(data.history[0].text, "line 10");
        assert_eq!(data.history[49].text, "line 59");
    }

    #[test]
    fn memory_store_slot() {
        let mut store = MemoryStore::new();
        assert!(store.load().is_none());

        let data = sample();
        store.save(&data).unwrap();
        assert_eq!(store.load(), Some(data));

        store.clear().unwrap();
        assert!(store.load().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn corrupt_memory_slot_is_absent() {
        let store = MemoryStore::with_raw("{ not json");
        assert!(store.load().is_none());
        let store = MemoryStore::with_raw(r#"{"player": 3}"#);
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));
        assert!(store.load().is_none());

        let data = sample();
        store.save(&data).unwrap();
        assert!(store.path().exists());
        let loaded = store.load().unwrap();
        assert_eq!(loaded.player, data.player);
        assert_eq!(loaded.history.len(), 50);

        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn save_must_match_the_world() {
        let world = World::hawkins().unwrap();
        let mut data = sample();
        assert!(data.check_against(&world).is_ok());

        data.player.previous_location_id = Some("town_square".into());
        data.player.class = Some(hk_core::ClassType::Rogue);
        assert!(data.check_against(&world).is_ok());

        data.player.previous_location_id = Some("old_mill".into());
        assert!(data.check_against(&world).is_err());

        data.player.previous_location_id = None;
        data.player.current_location_id = "atlantis".into();
        assert!(data.check_against(&world).is_err());
    }

    #[test]
    fn corrupt_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(&path, "garbage").unwrap();
        assert!(JsonFileStore::new(&path).load().is_none());
    }

    #[test]
    fn default_path() {
        assert_eq!(
            JsonFileStore::default().path(),
            Path::new(DEFAULT_SAVE_FILE)
        );
    }
}
