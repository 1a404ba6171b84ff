//! JSON encoding of the collection.
//!
//! Records keep the field names of the on-device format: the category is a
//! `work` boolean and the edit flag is `isEdit`.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::core::todo::{Category, ToDoCollection, ToDoId, ToDoItem};

#[derive(Serialize, Deserialize, Debug)]
struct ToDoRecord {
    text: String,
    work: bool,
    #[serde(default)]
    completed: bool,
    #[serde(rename = "isEdit", default)]
    is_edit: bool,
}

impl From<&ToDoItem> for ToDoRecord {
    fn from(item: &ToDoItem) -> Self {
        Self {
            text: item.text.clone(),
            work: item.category == Category::Work,
            completed: item.completed,
            is_edit: item.editing,
        }
    }
}

impl From<ToDoRecord> for ToDoItem {
    fn from(record: ToDoRecord) -> Self {
        Self {
            text: record.text,
            category: if record.work {
                Category::Work
            } else {
                Category::Travel
            },
            completed: record.completed,
            editing: record.is_edit,
        }
    }
}

pub fn encode(todos: &ToDoCollection) -> Result<String, StoreError> {
    let records: BTreeMap<ToDoId, ToDoRecord> = todos
        .iter()
        .map(|(id, item)| (id, ToDoRecord::from(item)))
        .collect();
    serde_json::to_string(&records).map_err(StoreError::Encode)
}

/// Parse a stored blob. Records with blank text are dropped.
pub fn decode(blob: &str) -> Result<ToDoCollection, StoreError> {
    let records: BTreeMap<ToDoId, ToDoRecord> =
        serde_json::from_str(blob).map_err(StoreError::Corrupt)?;
    Ok(records
        .into_iter()
        .filter(|(id, record)| {
            let keep = !record.text.trim().is_empty();
            if !keep {
                warn!("Dropping stored to-do {} with empty text", id);
            }
            keep
        })
        .map(|(id, record)| (id, ToDoItem::from(record)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_storage_field_names() {
        let todos = ToDoCollection::new()
            .with_added(ToDoId::new(1700000000000), "Lisbon", Category::Travel)
            .unwrap();
        let blob = encode(&todos).unwrap();
        assert_eq!(
            blob,
            r#"{"1700000000000":{"text":"Lisbon","work":false,"completed":false,"isEdit":false}}"#
        );
    }

    #[test]
    fn test_decode_accepts_existing_blob() {
        let blob = r#"{
        "1699999999999": {"text": "Pack bags", "work": false, "completed": true, "isEdit": false},
        "1700000000123": {"text": "Standup", "work": true, "completed": false, "isEdit": true}
        }"#;
        let todos = decode(blob).unwrap();
        assert_eq!(todos.len(), 2);

        let trip = todos.get(ToDoId::new(1699999999999)).unwrap();
        assert_eq!(trip.category, Category::Travel);
        assert!(trip.completed);

        let standup = todos.get(ToDoId::new(1700000000123)).unwrap();
        assert_eq!(standup.category, Category::Work);
        assert!(standup.editing);
    }

    #[test]
    fn test_decode_defaults_missing_flags() {
        let todos = decode(r#"{"5": {"text": "Old", "work": true}}"#).unwrap();
        let item = todos.get(ToDoId::new(5)).unwrap();
        assert!(!item.completed);
        assert!(!item.editing);
    }

    #[test]
    fn test_decode_drops_blank_records() {
        let todos =
            decode(r#"{"1": {"text": "  ", "work": true}, "2": {"text": "ok", "work": true}}"#)
                .unwrap();
        assert_eq!(todos.len(), 1);
        assert!(todos.contains(ToDoId::new(2)));
    }

    #[test]
    fn test_decode_rejects_non_numeric_keys() {
        assert!(decode(r#"{"abc": {"text": "x", "work": true}}"#).is_err());
    }

    #[test]
    fn test_empty_collection_encodes_as_empty_object() {
        assert_eq!(encode(&ToDoCollection::new()).unwrap(), "{}");
        assert!(decode("{}").unwrap().is_empty());
    }
}
