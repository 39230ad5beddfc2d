//! Catalog normalization: typed payload shapes, pure entity builders and
//! the per-term entity cache.

pub mod cache;
pub mod dto;
pub mod normalize;

pub use cache::CatalogCache;
