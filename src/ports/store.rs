//! Storage port for the host's flat key/value persistence.

use std::error::Error;

/// Store key holding the active timetable's shareable state string.
pub const KEY_ACTIVE_TIMETABLE: &str = "active-timetable";

/// Store key holding the serialized course color assignments.
pub const KEY_COLORS: &str = "colors";

/// Store key holding the selected academic term.
pub const KEY_TERM: &str = "term";

/// Flat string key/value persistence offered by the host.
pub trait StateStore: Send + Sync {
    /// Reads the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Deletes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
