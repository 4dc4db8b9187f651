//! Tree indexing module.
//!
//! `TreeIndex` keeps three derived lookups in sync with a flat item list:
//! 1. `items_by_id` - id to item
//! 2. `children_by_parent` - id to the ordered ids of its direct children
//! 3. `parent_by_id` - id to the parent id (or `None` for roots)
//!
//! The lookups are built once at construction and then updated in place by
//! mutations; they are never rebuilt wholesale.
//!
//! ## Module Structure
//!
//! - `construct` - Two-pass construction of the lookups from a flat list
//! - `data` - `TreeIndex` itself and point lookups
//! - `mutate` - Insert, remove and update
//! - `traverse` - Descendant and ancestor walks

mod construct;
mod data;
mod mutate;
mod traverse;

// Re-export main types
pub use data::TreeIndex;
