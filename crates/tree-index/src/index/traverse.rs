//! Descendant and ancestor walks.
//!
//! Both walks are iterative and track visited ids, so a cyclic parent chain
//! in malformed input ends the walk instead of looping.

use fnv::FnvHashSet;

use super::data::TreeIndex;
use crate::error::Result;
use crate::item::{ItemId, TreeItem};

impl TreeIndex {
    /// Returns every descendant of `id`.
    ///
    /// Each direct child is emitted followed by its own subtree. Within that
    /// subtree, a node's whole child group is emitted before any grandchild,
    /// and groups are expanded in the order their parents were emitted:
    ///
    /// ```text
    /// 1 -> [a, b]; a -> [c, d]; c -> [e]
    /// get_all_children(1) == [a, c, d, e, b]
    /// ```
    pub fn get_all_children(&self, id: &ItemId) -> Result<Vec<&TreeItem>> {
        Ok(self.resolve(self.descendant_ids(id)?))
    }

    /// Returns the item itself followed by its ancestors, closest first.
    ///
    /// The walk stops at a root or at a parent id that is not in the index.
    pub fn get_all_parents(&self, id: &ItemId) -> Result<Vec<&TreeItem>> {
        let mut chain = vec![self.get_item(id)?];
        let mut visited = FnvHashSet::default();
        visited.insert(id);

        let mut current = id;
        while let Some(Some(parent_id)) = self.parent_by_id.get(current) {
            let Some((parent_id, parent)) = self.items_by_id.get_key_value(parent_id) else {
                break;
            };
            if !visited.insert(parent_id) {
                log::warn!("parent cycle detected at item {}", parent_id);
                break;
            }
            chain.push(parent);
            current = parent_id;
        }

        Ok(chain)
    }

    /// Collects descendant ids in `get_all_children` order.
    pub(super) fn descendant_ids(&self, id: &ItemId) -> Result<Vec<&ItemId>> {
        let direct = self.child_ids(id)?;

        let mut visited: FnvHashSet<&ItemId> = FnvHashSet::default();
        visited.insert(id);

        let mut out = Vec::new();
        let mut stack: Vec<&ItemId> = Vec::new();

        for child in direct {
            if !visited.insert(child) {
                continue;
            }
            out.push(child);

            stack.push(child);
            while let Some(node) = stack.pop() {
                let Some(group) = self.children_by_parent.get(node) else {
                    continue;
                };
                let start = out.len();
                for grandchild in group {
                    if visited.insert(grandchild) {
                        out.push(grandchild);
                    } else {
                        log::warn!("item {} reached twice, below {}", grandchild, node);
                    }
                }
                // Expand the group's members in order on the next pops.
                stack.extend(out[start..].iter().rev());
            }
        }

        Ok(out)
    }
}
