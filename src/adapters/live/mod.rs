//! Live adapters: the real catalog API and an on-disk store.

pub mod catalog;
pub mod store;

pub use catalog::LiveCatalog;
pub use store::FileStore;
