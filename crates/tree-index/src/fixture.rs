//! Shared test fixture: a small mixed-id tree.
//!
//! ```text
//! 1
//! ├── "91064cee"
//! │   ├── 4
//! │   │   ├── 7
//! │   │   └── 8
//! │   ├── 5
//! │   └── 6
//! └── 3
//! ```

use crate::item::{ItemId, TreeItem};

pub fn items() -> Vec<TreeItem> {
    vec![
        TreeItem::root(1, "Item 1"),
        TreeItem::child("91064cee", 1, "Item 2"),
        TreeItem::child(3, 1, "Item 3"),
        TreeItem::child(4, "91064cee", "Item 4"),
        TreeItem::child(5, "91064cee", "Item 5"),
        TreeItem::child(6, "91064cee", "Item 6"),
        TreeItem::child(7, 4, "Item 7"),
        TreeItem::child(8, 4, "Item 8"),
    ]
}

pub fn id(value: impl Into<ItemId>) -> ItemId {
    value.into()
}

/// Collects the ids of a query result, preserving order.
pub fn ids(items: &[&TreeItem]) -> Vec<ItemId> {
    items.iter().map(|item| item.id.clone()).collect()
}
