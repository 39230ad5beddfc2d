//! In-memory adapters serving fixtures, for tests and offline use.

pub mod catalog;
pub mod store;

pub use catalog::MemoryCatalog;
pub use store::MemoryStore;
