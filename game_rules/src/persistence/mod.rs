//! Save persistence - the durable store and the autosave subscriber.
//!
//! The store is a single JSON file holding an array of [`PlayerSnapshot`]s,
//! one per registered player. It is rewritten in full on every save.

mod atomic_io;
mod autosave;

pub use autosave::*;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::PlayerSnapshot;

/// Default location of the save file.
pub const DEFAULT_SAVE_PATH: &str = "salvataggio_gioco.json";

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The on-disk save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a save file is present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Overwrite the save file with `snapshots`.
    pub fn save(&self, snapshots: &[PlayerSnapshot]) -> Result<(), PersistError> {
        let content = serde_json::to_string_pretty(snapshots)?;
        atomic_io::write_text_atomic(&self.path, &content)?;
        Ok(())
    }

    /// Read every snapshot. `Ok(None)` means there is no save file.
    pub fn load(&self) -> Result<Option<Vec<PlayerSnapshot>>, PersistError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let snapshots = serde_json::from_str(&content)?;
        Ok(Some(snapshots))
    }

    /// Delete the save file. Returns `false` if there was none.
    pub fn clear(&self) -> Result<bool, PersistError> {
        Ok(atomic_io::remove_if_exists(&self.path)?)
    }
}

impl Default for SaveStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }
}
