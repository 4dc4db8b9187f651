//! In-memory tree index over flat, id-referenced items.
//!
//! This crate provides:
//! - `TreeIndex`, which builds item, children and parent lookups from a flat list
//! - Child, descendant and ancestor queries without rescanning the list
//! - Insert, remove and update operations that keep the lookups consistent
//! - JSON ingestion of flat item lists (`json` feature)

pub mod error;
pub mod index;
pub mod item;
#[cfg(feature = "json")]
pub mod json;

#[cfg(test)]
mod fixture;

// Re-export main types
pub use error::{Result, TreeIndexError};
pub use index::TreeIndex;
pub use item::{ItemId, TreeItem};
