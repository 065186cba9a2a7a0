//! Key/value store backed by a single JSON file.

use super::atomic::{atomic_read_json, atomic_write_json};
use super::KeyValueStore;
use crate::error::{Result, TypeaheadError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Persistent store that keeps every key in one JSON object on disk.
///
/// The file is read once when the store is opened; every write rewrites the
/// whole file atomically.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file starts an empty store. An unreadable or malformed file
    /// is logged and also starts empty; it is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match atomic_read_json::<BTreeMap<String, String>>(&path) {
            Ok(Some(entries)) => {
                debug!("Loaded {} stored keys from {}", entries.len(), path.display());
                entries
            }
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                warn!("Ignoring unreadable state file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn poisoned() -> TypeaheadError {
        TypeaheadError::storage("file store lock poisoned")
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set_many(&self, new_entries: &[(&str, String)]) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;

        let mut next = entries.clone();
        for (key, value) in new_entries {
            next.insert((*key).to_string(), value.clone());
        }

        // Only publish in memory once the disk write succeeded.
        atomic_write_json(&self.path, &next)?;
        *entries = next;
        Ok(())
    }
}
