//! Core index data structures.
//!
//! `TreeIndex` holds the construction-time snapshot of the flat list plus the
//! three lookups used by every query. Child lists hold ids rather than item
//! copies, so queries always resolve the current item through `items_by_id`.

use fnv::FnvHashMap;

use super::construct;
use crate::error::{Result, TreeIndexError};
use crate::item::{ItemId, TreeItem};

/// In-memory tree index over a flat list of items.
///
/// Queries take `&self` and mutations take `&mut self`; callers embedding the
/// index in a multi-threaded host wrap it in their own lock.
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    /// The list as it was passed at construction. Never mutated.
    pub(super) snapshot: Vec<TreeItem>,

    /// Current value of every live item.
    pub(super) items_by_id: FnvHashMap<ItemId, TreeItem>,

    /// Ordered ids of direct children. Every live id has a slot.
    pub(super) children_by_parent: FnvHashMap<ItemId, Vec<ItemId>>,

    /// Parent of every live id.
    pub(super) parent_by_id: FnvHashMap<ItemId, Option<ItemId>>,
}

impl TreeIndex {
    /// Builds the index from a flat list.
    ///
    /// Ids are not validated here: a duplicate id overwrites the earlier
    /// entry, and is linked into its parent's child list once per occurrence.
    pub fn new(items: Vec<TreeItem>) -> Self {
        let lookups = construct::build_lookups(&items);

        Self {
            snapshot: items,
            items_by_id: lookups.items_by_id,
            children_by_parent: lookups.children_by_parent,
            parent_by_id: lookups.parent_by_id,
        }
    }

    /// Returns the list captured at construction.
    ///
    /// Later mutations are not reflected here; use [`TreeIndex::items`] for the
    /// live set.
    pub fn get_all(&self) -> &[TreeItem] {
        &self.snapshot
    }

    /// Looks up a live item by id.
    pub fn get_item(&self, id: &ItemId) -> Result<&TreeItem> {
        self.items_by_id
            .get(id)
            .ok_or_else(|| TreeIndexError::ItemDoesNotExist(id.clone()))
    }

    /// Returns the direct children of `id` in first-registered order.
    ///
    /// Returns an empty list for a leaf, and `ItemDoesNotExist` if `id` has no
    /// slot.
    pub fn get_children(&self, id: &ItemId) -> Result<Vec<&TreeItem>> {
        let children = self.child_ids(id)?;
        Ok(self.resolve(children))
    }

    /// Iterates over the live items in no particular order.
    pub fn items(&self) -> impl Iterator<Item = &TreeItem> {
        self.items_by_id.values()
    }

    #[inline]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items_by_id.contains_key(id)
    }

    /// Returns the number of live items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items_by_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items_by_id.is_empty()
    }

    pub(super) fn child_ids(&self, id: &ItemId) -> Result<&[ItemId]> {
        self.children_by_parent
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| TreeIndexError::ItemDoesNotExist(id.clone()))
    }

    /// Maps ids to their live items, skipping any id that is no longer present.
    pub(super) fn resolve<'a>(
        &'a self,
        ids: impl IntoIterator<Item = &'a ItemId>,
    ) -> Vec<&'a TreeItem> {
        ids.into_iter()
            .filter_map(|id| self.items_by_id.get(id))
            .collect()
    }
}

impl From<Vec<TreeItem>> for TreeIndex {
    fn from(items: Vec<TreeItem>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<TreeItem> for TreeIndex {
    fn from_iter<I: IntoIterator<Item = TreeItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
