//! Service context bundling the port trait objects and the entity cache.

use std::sync::Mutex;

use crate::adapters::live::{FileStore, LiveCatalog};
use crate::adapters::memory::{MemoryCatalog, MemoryStore};
use crate::catalog::CatalogCache;
use crate::ports::{CatalogSource, StateStore};

/// Bundles the catalog and store ports with the per-term entity cache.
///
/// Constructors wire up different adapter implementations (live,
/// in-memory); everything downstream works against the traits.
pub struct ServiceContext {
    /// University catalog lookups.
    pub catalog: Box<dyn CatalogSource>,
    /// Flat persistent key/value store.
    pub store: Box<dyn StateStore>,
    /// Resolved-entity cache keyed by academic term.
    pub cache: Mutex<CatalogCache>,
}

impl ServiceContext {
    /// Creates a live context: HTTP catalog plus on-disk store, both
    /// configured from the environment (a `.env` file is honored).
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog URL is missing or the store
    /// file cannot be opened.
    pub fn live() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        let catalog = LiveCatalog::from_env()?;
        let store = FileStore::from_env().map_err(|e| e.to_string())?;
        Ok(Self {
            catalog: Box::new(catalog),
            store: Box::new(store),
            cache: Mutex::new(CatalogCache::new()),
        })
    }

    /// Creates a context over fixture adapters.
    #[must_use]
    pub fn in_memory(catalog: MemoryCatalog) -> Self {
        Self {
            catalog: Box::new(catalog),
            store: Box::new(MemoryStore::new()),
            cache: Mutex::new(CatalogCache::new()),
        }
    }
}
