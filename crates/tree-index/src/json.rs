//! JSON ingestion of flat item lists.
//!
//! The expected shape is an array of `{ "id", "parent", "label" }` records,
//! where ids are JSON integers or strings and a root has `"parent": null`.

use crate::error::{Result, TreeIndexError};
use crate::index::TreeIndex;
use crate::item::TreeItem;

/// Parses a flat item list.
pub fn items_from_json(input: &str) -> Result<Vec<TreeItem>> {
    serde_json::from_str(input).map_err(|e| TreeIndexError::Serialization(e.to_string()))
}

/// Serializes a flat item list.
pub fn items_to_json(items: &[TreeItem]) -> Result<String> {
    serde_json::to_string(items).map_err(|e| TreeIndexError::Serialization(e.to_string()))
}

impl TreeIndex {
    /// Builds an index from a JSON item list.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(Self::new(items_from_json(input)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{id, ids, items};
    use crate::item::ItemId;

    const FIXTURE: &str = r#"[
        { "id": 1, "parent": null, "label": "Item 1" },
        { "id": "91064cee", "parent": 1, "label": "Item 2" },
        { "id": 3, "parent": 1, "label": "Item 3" },
        { "id": 4, "parent": "91064cee", "label": "Item 4" },
        { "id": 5, "parent": "91064cee", "label": "Item 5" },
        { "id": 6, "parent": "91064cee", "label": "Item 6" },
        { "id": 7, "parent": 4, "label": "Item 7" },
        { "id": 8, "parent": 4, "label": "Item 8" }
    ]"#;

    #[test]
    fn parses_mixed_ids() {
        let parsed = items_from_json(FIXTURE).unwrap();
        assert_eq!(parsed, items());
        assert_eq!(parsed[1].id, ItemId::Str("91064cee".into()));
        assert_eq!(parsed[1].parent, Some(ItemId::Int(1)));
    }

    #[test]
    fn numeric_string_stays_a_string() {
        let parsed = items_from_json(r#"[{ "id": "1", "parent": null, "label": "x" }]"#).unwrap();
        assert_eq!(parsed[0].id, ItemId::Str("1".into()));
    }

    #[test]
    fn writes_null_parent() {
        let json = items_to_json(&[TreeItem::root(1, "Item 1")]).unwrap();
        assert_eq!(json, r#"[{"id":1,"parent":null,"label":"Item 1"}]"#);
        assert_eq!(items_from_json(&json).unwrap(), vec![TreeItem::root(1, "Item 1")]);
    }

    #[test]
    fn from_json_builds_index() {
        let index = TreeIndex::from_json(FIXTURE).unwrap();
        assert_eq!(
            ids(&index.get_all_parents(&id(7)).unwrap()),
            vec![id(7), id(4), id("91064cee"), id(1)]
        );
    }

    #[test]
    fn rejects_malformed_records() {
        let missing_label = r#"[{ "id": 1, "parent": null }]"#;
        assert!(matches!(
            items_from_json(missing_label),
            Err(TreeIndexError::Serialization(_))
        ));

        let float_id = r#"[{ "id": 1.5, "parent": null, "label": "x" }]"#;
        assert!(matches!(
            TreeIndex::from_json(float_id),
            Err(TreeIndexError::Serialization(_))
        ));
    }
}
