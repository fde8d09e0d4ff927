//! Key/value persistence with the same layout a browser's `localStorage`
//! would hold: string keys mapped to JSON-encoded string values.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::core::profile::Profile;

pub const PROFILES_KEY: &str = "profiles";
pub const DARK_MODE_KEY: &str = "darkMode";

const STORE_FILE_NAME: &str = "local_storage.json";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No data directory available on this platform")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: String) -> Result<()>;
}

/// Backs the store with a single JSON object on disk. Every write rewrites
/// the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    pub fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("student-connect").join(STORE_FILE_NAME))
            .ok_or(StorageError::NoDataDir)
    }

    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match Self::read_items(&path) {
            Ok(items) => items,
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No store at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable store {}: {e}", path.display());
                BTreeMap::new()
            }
        };
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(path: &Path) -> Result<BTreeMap<String, String>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes to a temporary sibling and renames it over the store, so a
    /// crash mid-write leaves the previous contents intact.
    fn flush(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let contents = serde_json::to_string_pretty(&self.items)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        self.items.insert(key.to_string(), value);
        self.flush()
    }
}

/// Volatile store, used when no file location can be resolved.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }
}

fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding malformed `{key}` entry: {e}");
            None
        }
    }
}

fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, raw)
}

/// `None` when nothing usable is stored, so the caller picks the fallback.
pub fn load_profiles(store: &dyn KeyValueStore) -> Option<Vec<Profile>> {
    load_json(store, PROFILES_KEY)
}

pub fn save_profiles(store: &mut dyn KeyValueStore, profiles: &[Profile]) -> Result<()> {
    save_json(store, PROFILES_KEY, profiles)
}

pub fn load_dark_mode(store: &dyn KeyValueStore) -> bool {
    load_json(store, DARK_MODE_KEY).unwrap_or(false)
}

pub fn save_dark_mode(store: &mut dyn KeyValueStore, dark_mode: bool) -> Result<()> {
    save_json(store, DARK_MODE_KEY, &dark_mode)
}
