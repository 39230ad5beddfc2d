//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the selection core and an
//! external system (the university catalog, host persistent storage).
//! Implementations live in `src/adapters/`.

pub mod catalog;
pub mod store;

pub use catalog::{CatalogFuture, CatalogSource};
pub use store::StateStore;
