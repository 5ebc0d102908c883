//! Save/load of the whole live state as one JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use turf_campaign::economy::ShopLedger;
use turf_campaign::visitor::VisitorState;
use turf_core::components::{AbilitySlot, PlacedDefense, Structure, WaveState};
use turf_core::records::{CityState, PlayerRecord};
use turf_core::types::Millis;

pub const SAVE_VERSION: u32 = 1;

/// Everything that survives a reload. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub version: u32,
    pub player: PlayerRecord,
    pub city: CityState,
    pub visitor: VisitorState,
    pub session: Option<SessionSave>,
    pub saved_at: Millis,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            player: PlayerRecord::default(),
            city: CityState::default(),
            visitor: VisitorState::default(),
            session: None,
            saved_at: 0,
        }
    }
}

/// A defense session between frames. Live enemies are not kept; a session
/// saved mid-wave comes back in the shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSave {
    pub wave: WaveState,
    pub ledger: ShopLedger,
    pub structures: Vec<Structure>,
    pub defenses: Vec<PlacedDefense>,
    pub avatar_position: Option<Vec2>,
    pub abilities: Vec<AbilitySlot>,
    pub adrenaline_until: Option<Millis>,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read save file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write save file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse save data")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize save data")]
    Encode(#[source] serde_json::Error),
}

/// Opaque key-value snapshot storage.
pub trait SnapshotStore {
    fn save(&mut self, data: &SaveData) -> Result<(), PersistenceError>;
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<SaveData>, PersistenceError>;
}

/// Pretty-printed JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&mut self, data: &SaveData) -> Result<(), PersistenceError> {
        save_to_file(&self.path, data)
    }

    fn load(&self) -> Result<Option<SaveData>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_from_file(&self.path).map(Some)
    }
}

/// In-memory store holding the serialized document.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, data: &SaveData) -> Result<(), PersistenceError> {
        self.slot = Some(serde_json::to_string(data).map_err(PersistenceError::Encode)?);
        Ok(())
    }

    fn load(&self) -> Result<Option<SaveData>, PersistenceError> {
        self.slot
            .as_deref()
            .map(|json| serde_json::from_str(json).map_err(PersistenceError::Parse))
            .transpose()
    }
}

pub fn save_to_file(path: &Path, data: &SaveData) -> Result<(), PersistenceError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| PersistenceError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(data).map_err(PersistenceError::Encode)?;
    fs::write(path, json).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_from_file(path: &Path) -> Result<SaveData, PersistenceError> {
    let json = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(PersistenceError::Parse)
}
