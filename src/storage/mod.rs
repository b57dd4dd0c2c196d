// SPDX-License-Identifier: MPL-2.0
//! Persisted key/value storage shared by the favorites list and the session.
//!
//! Values are plain strings; callers serialize structured data (JSON) before
//! writing. Two implementations are provided:
//!
//! - [`FileStore`] keeps every key in one JSON object on disk
//!   (`local_storage.json` in the application data directory).
//! - [`MemoryStore`] keeps keys in memory, for tests and for sessions
//!   where no data directory is available.
//!
//! Key names are part of the data contract with the web client and must not
//! change; see [`keys`].

pub mod keys;

use crate::app::paths;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "local_storage.json";

/// String key/value storage with `localStorage` semantics.
///
/// Every mutating call is a single synchronous write of the whole store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// File-backed store: one JSON object mapping keys to string values.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store at an explicit file path. The file is created lazily
    /// on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store in the default application data directory.
    ///
    /// Returns `None` if no data directory can be determined.
    #[must_use]
    pub fn open_default() -> Option<Self> {
        Self::open_in(None)
    }

    /// Opens the store in `base_dir`, falling back to the default resolution.
    #[must_use]
    pub fn open_in(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STORAGE_FILE);
            Self::new(dir)
        })
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_content(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::Storage(format!("{}: {e}", self.path.display())))?;
        Ok((!content.trim().is_empty()).then_some(content))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match self.read_content()? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Reads the map ahead of a write.
    ///
    /// An unparseable file is moved aside to `<file>.bak` and replaced by an
    /// empty map, so a damaged file never blocks later writes.
    fn read_for_write(&self) -> Result<BTreeMap<String, String>> {
        let Some(content) = self.read_content()? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(err) => {
                let backup = self.path.with_extension("json.bak");
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %err,
                    "storage file is corrupt, starting from an empty store"
                );
                if let Err(e) = fs::write(&backup, &content) {
                    tracing::warn!(error = %e, "could not keep a copy of the corrupt storage file");
                }
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("{}: {e}", parent.display())))?;
        }
        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, content)
            .map_err(|e| Error::Storage(format!("{}: {e}", self.path.display())))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.write_all(&map)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut map = self.read_for_write()?;
        if map.remove(key).is_some() {
            self.write_all(&map)?;
        }
        Ok(())
    }
}

/// In-memory store.
///
/// [`MemoryStore::failing`] builds a store whose every call errors, which is
/// how storage-unavailable paths are exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
    writes: RefCell<usize>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every read and write.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of successful `set_item`/`remove_item` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            Err(Error::Storage("storage unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.check()?;
        self.items.borrow_mut().remove(key);
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
