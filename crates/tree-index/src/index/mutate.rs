//! Incremental mutations: insert, remove and update.
//!
//! Each operation updates the three lookups in place. The construction-time
//! snapshot is left untouched.

use super::data::TreeIndex;
use crate::error::{Result, TreeIndexError};
use crate::item::{ItemId, TreeItem};

impl TreeIndex {
    /// Inserts a new item.
    ///
    /// The item is appended to its parent's child list if the parent is
    /// present; a dangling parent leaves the item unlinked.
    pub fn add_item(&mut self, item: TreeItem) -> Result<()> {
        if self.items_by_id.contains_key(&item.id) {
            return Err(TreeIndexError::ItemDuplicate(item.id));
        }

        log::trace!("add item {} (parent {:?})", item.id, item.parent);

        self.parent_by_id.insert(item.id.clone(), item.parent.clone());
        self.children_by_parent.insert(item.id.clone(), Vec::new());
        if let Some(parent) = &item.parent {
            self.link_child(parent, &item.id);
        }
        self.items_by_id.insert(item.id.clone(), item);

        Ok(())
    }

    /// Removes an item together with its whole subtree.
    ///
    /// Grandchildren are not re-parented; they go with the subtree.
    pub fn remove_item(&mut self, id: &ItemId) -> Result<()> {
        let Some(item) = self.items_by_id.get(id) else {
            return Err(TreeIndexError::ItemDoesNotExist(id.clone()));
        };
        let parent = item.parent.clone();

        let subtree: Vec<ItemId> = self.descendant_ids(id)?.into_iter().cloned().collect();

        log::trace!("remove item {} with {} descendants", id, subtree.len());

        for descendant in subtree.iter().chain(std::iter::once(id)) {
            self.items_by_id.remove(descendant);
            self.parent_by_id.remove(descendant);
            self.children_by_parent.remove(descendant);
        }

        if let Some(parent) = parent {
            self.unlink_child(&parent, id);
        }

        Ok(())
    }

    /// Replaces an existing item, moving it if its parent changed.
    pub fn update_item(&mut self, item: TreeItem) -> Result<()> {
        let Some(old_parent) = self.parent_by_id.get(&item.id).cloned() else {
            return Err(TreeIndexError::ItemDoesNotExist(item.id));
        };

        if old_parent != item.parent {
            log::trace!(
                "move item {} from {:?} to {:?}",
                item.id,
                old_parent,
                item.parent
            );
            if let Some(old_parent) = &old_parent {
                self.unlink_child(old_parent, &item.id);
            }
            if let Some(new_parent) = &item.parent {
                self.link_child(new_parent, &item.id);
            }
        }

        self.parent_by_id.insert(item.id.clone(), item.parent.clone());
        self.items_by_id.insert(item.id.clone(), item);

        Ok(())
    }

    /// Appends `child` to `parent`'s slot, if the parent has one.
    fn link_child(&mut self, parent: &ItemId, child: &ItemId) {
        match self.children_by_parent.get_mut(parent) {
            Some(children) => children.push(child.clone()),
            None => log::debug!("item {} has dangling parent {}", child, parent),
        }
    }

    fn unlink_child(&mut self, parent: &ItemId, child: &ItemId) {
        if let Some(children) = self.children_by_parent.get_mut(parent) {
            children.retain(|existing| existing != child);
        }
    }
}
