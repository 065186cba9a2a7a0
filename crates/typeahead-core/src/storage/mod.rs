//! Local key/value persistence.
//!
//! [`KeyValueStore`] is the storage seam. [`JsonFileStore`] keeps all keys
//! in one atomically rewritten JSON file and [`MemoryStore`] keeps them in
//! process. [`LocalStore`] sits on top and knows how the history and the
//! counters are laid out.

mod atomic;
mod file;
mod local;

pub use atomic::{atomic_read_json, atomic_write_json};
pub use file::JsonFileStore;
pub use local::{LoadedState, LocalStore};

use crate::error::{Result, TypeaheadError};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// String key/value storage.
///
/// All operations are synchronous; implementations are expected to be
/// cheap enough to call from async code.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Returns `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write several values as one unit.
    ///
    /// Either every entry becomes visible to later reads or none does.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<()>;
}

/// In-process store, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| TypeaheadError::storage("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set_many(&self, new_entries: &[(&str, String)]) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| TypeaheadError::storage("memory store lock poisoned"))?;
        for (key, value) in new_entries {
            entries.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }
}
