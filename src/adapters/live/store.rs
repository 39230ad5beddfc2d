//! Live adapter for the `StateStore` port backed by a JSON file.

use std::collections::BTreeMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::store::StateStore;

/// Environment variable naming the store file path.
pub const STORE_PATH_VAR: &str = "TIMETABLER_STORE";

/// Default store file, next to wherever the tool runs.
pub const DEFAULT_STORE_PATH: &str = ".timetabler.json";

/// Flat string map persisted as a JSON file, the desktop counterpart of
/// browser local storage.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens (or lazily creates) the store at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error when an existing file cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let entries = if path.exists() {
            let contents = fs::read_to_string(path)
                .map_err(|e| format!("failed to read store {}: {e}", path.display()))?;
            serde_json::from_str(&contents)
                .map_err(|e| format!("failed to parse store {}: {e}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path: path.to_path_buf(), entries: Mutex::new(entries) })
    }

    /// Opens the store named by `TIMETABLER_STORE`, defaulting to
    /// `.timetabler.json` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_env() -> Result<Self, Box<dyn Error + Send + Sync>> {
        let path = env::var(STORE_PATH_VAR).unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());
        Self::open(Path::new(&path))
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), Box<dyn Error + Send + Sync>> {
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| format!("failed to serialize store: {e}"))?;
        fs::write(&self.path, contents)
            .map_err(|e| format!("failed to write store {}: {e}", self.path.display()).into())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let entries = self.entries.lock().map_err(|_| "store lock poisoned")?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut entries = self.entries.lock().map_err(|_| "store lock poisoned")?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut entries = self.entries.lock().map_err(|_| "store lock poisoned")?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
