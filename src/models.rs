//! Frontend Models
//!
//! Data structures matching the server payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DELETED_MARKER;

/// Opaque item key. The server may send integers or strings;
/// either form is echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Num(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Orderable item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    #[serde(default)]
    pub deleted: bool,
    pub current_position: i64,
    pub starting_position: i64,
}

impl Item {
    /// Label as shown to the user, with the deleted marker appended
    pub fn display_label(&self) -> String {
        if self.deleted {
            format!("{}{}", self.label, DELETED_MARKER)
        } else {
            self.label.clone()
        }
    }
}

/// Named display grouping of items. Slots may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub label: String,
    #[serde(default)]
    pub ordered_items: Vec<Option<Item>>,
}

/// Body of `/load-fields`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadFieldsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub item_sets: Vec<ItemGroup>,
}

/// Body of `/update-order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    pub moving_ids: Vec<ItemId>,
    pub target_position: i64,
}

#[cfg(test)]
pub(crate) fn make_item(id: i64, label: &str, position: i64) -> Item {
    Item {
        id: ItemId::Num(id),
        label: label.to_string(),
        deleted: false,
        current_position: position,
        starting_position: position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_load_fields_payload() {
        let json = r#"{
            "items": [
                {"id": 101, "label": "Matter Type", "deleted": false, "current_position": 0, "starting_position": 0},
                {"id": "cf-7", "label": "Old Field", "deleted": true, "current_position": 1, "starting_position": 3}
            ],
            "item_sets": [
                {"label": "Intake", "ordered_items": [
                    {"id": 101, "label": "Matter Type", "deleted": false, "current_position": 0, "starting_position": 0},
                    null
                ]}
            ]
        }"#;

        let parsed: LoadFieldsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].id, ItemId::Num(101));
        assert_eq!(parsed.items[1].id, ItemId::Text("cf-7".to_string()));
        assert_eq!(parsed.items[1].starting_position, 3);
        assert_eq!(parsed.item_sets[0].ordered_items.len(), 2);
        assert!(parsed.item_sets[0].ordered_items[1].is_none());
    }

    #[test]
    fn test_deleted_flag_defaults_to_false() {
        let json = r#"{"id": 1, "label": "A", "current_position": 0, "starting_position": 0}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(!item.deleted);
    }

    #[test]
    fn test_display_label() {
        let mut item = make_item(1, "Client Name", 0);
        assert_eq!(item.display_label(), "Client Name");
        item.deleted = true;
        assert_eq!(item.display_label(), "Client Name (deleted)");
    }

    #[test]
    fn test_update_request_keeps_id_forms() {
        let req = UpdateOrderRequest {
            moving_ids: vec![ItemId::Num(5), ItemId::Text("x9".to_string())],
            target_position: 4,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"moving_ids":[5,"x9"],"target_position":4}"#);
    }

    #[test]
    fn test_negative_and_large_ids_parse() {
        let json = r#"[
            {"id": -3, "label": "Neg", "current_position": 0, "starting_position": 0},
            {"id": 9007199254740991, "label": "Big", "current_position": 1, "starting_position": 1}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].id, ItemId::Num(-3));
        assert_eq!(items[1].id, ItemId::Num(9_007_199_254_740_991));
        assert_eq!(
            serde_json::to_string(&items[0].id).unwrap(),
            "-3"
        );
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::Num(42).to_string(), "42");
        assert_eq!(ItemId::Text("abc".to_string()).to_string(), "abc");
    }
}
