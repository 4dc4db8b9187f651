//! Lookup construction from a flat item list.
//!
//! Construction runs in two passes so that input order does not matter:
//! 1. Register every id: item, parent and an empty child slot
//! 2. Link every item into its parent's slot, if that parent has one
//!
//! A child whose parent appears later in the input is therefore still linked.

use fnv::FnvHashMap;

use crate::item::{ItemId, TreeItem};

/// The three derived lookups of a `TreeIndex`.
#[derive(Debug, Default)]
pub(super) struct Lookups {
    pub items_by_id: FnvHashMap<ItemId, TreeItem>,
    pub children_by_parent: FnvHashMap<ItemId, Vec<ItemId>>,
    pub parent_by_id: FnvHashMap<ItemId, Option<ItemId>>,
}

/// Builds the lookups for `items`.
pub(super) fn build_lookups(items: &[TreeItem]) -> Lookups {
    let capacity = items.len();
    let mut lookups = Lookups {
        items_by_id: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        children_by_parent: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        parent_by_id: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
    };

    // Pass 1: register ids (last write wins for duplicates)
    for item in items {
        lookups.items_by_id.insert(item.id.clone(), item.clone());
        lookups.children_by_parent.insert(item.id.clone(), Vec::new());
        lookups.parent_by_id.insert(item.id.clone(), item.parent.clone());
    }

    // Pass 2: link children, once per occurrence
    let mut roots = 0usize;
    let mut dangling = 0usize;
    for item in items {
        let Some(parent) = &item.parent else {
            roots += 1;
            continue;
        };
        match lookups.children_by_parent.get_mut(parent) {
            Some(children) => children.push(item.id.clone()),
            None => {
                log::debug!("item {} has dangling parent {}", item.id, parent);
                dangling += 1;
            }
        }
    }

    log::debug!(
        "built tree index: {} items, {} unique ids, {} roots, {} dangling parents",
        items.len(),
        lookups.items_by_id.len(),
        roots,
        dangling
    );

    lookups
}
