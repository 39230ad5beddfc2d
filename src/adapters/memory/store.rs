//! In-memory adapter for the `StateStore` port.

use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Mutex;

use crate::ports::store::StateStore;

/// Volatile string map, for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let entries = self.entries.lock().map_err(|_| "store lock poisoned")?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut entries = self.entries.lock().map_err(|_| "store lock poisoned")?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut entries = self.entries.lock().map_err(|_| "store lock poisoned")?;
        entries.remove(key);
        Ok(())
    }
}
