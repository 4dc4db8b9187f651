//! Item and identifier types.
//!
//! Identifiers are either integers or strings. The two variants never alias:
//! `ItemId::Int(1)` and `ItemId::Str("1")` are different keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an item, either an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A single record of the flat list.
///
/// `parent` is `None` for roots. It may name an id that is not in the index
/// (a dangling parent); such items are never linked as anyone's child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeItem {
    pub id: ItemId,
    pub parent: Option<ItemId>,
    pub label: String,
}

impl TreeItem {
    pub fn new(id: impl Into<ItemId>, parent: Option<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent,
            label: label.into(),
        }
    }

    /// Creates an item under `parent`.
    pub fn child(
        id: impl Into<ItemId>,
        parent: impl Into<ItemId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent: Some(parent.into()),
            label: label.into(),
        }
    }

    /// Creates an item without a parent.
    pub fn root(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            label: label.into(),
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_and_str_ids_do_not_alias() {
        assert_ne!(ItemId::from(1), ItemId::from("1"));
        assert_eq!(ItemId::from(1_i64), ItemId::from(1_u32));
    }

    #[test]
    fn display_is_bare_value() {
        assert_eq!(ItemId::from(42).to_string(), "42");
        assert_eq!(ItemId::from("91064cee").to_string(), "91064cee");
    }

    #[test]
    fn builders() {
        let item = TreeItem::child(4, "91064cee", "Item 4");
        assert_eq!(item.id, ItemId::Int(4));
        assert_eq!(item.parent, Some(ItemId::Str("91064cee".into())));
        assert!(!item.is_root());

        let root = TreeItem::root("top", "Top");
        assert!(root.is_root());
        assert_eq!(root.label, "Top");

        let dangling = TreeItem::new(5, Some(ItemId::from(99)), "Item 5");
        assert_eq!(dangling, TreeItem::child(5, 99, "Item 5"));
    }
}
