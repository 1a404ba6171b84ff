//! # To-Do Persistence
//!
//! The whole collection lives under one key (`@toDos`) of a key-value store,
//! serialized as a single JSON object:
//!
//! ```text
//! {
//!   "1700000000000": { "text": "Write report", "work": true,  "completed": false, "isEdit": false },
//!   "1700000004211": { "text": "Lisbon",       "work": false, "completed": true,  "isEdit": false }
//! }
//! ```
//!
//! Every save overwrites the previous value with the full current snapshot.
//! The collection is read once at startup; after that writes go through the
//! single-writer [`Persister`].

mod codec;
mod persister;
mod store;

pub use codec::{decode, encode};
pub use persister::Persister;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

use log::{debug, info};

use crate::core::todo::ToDoCollection;

/// The one key the collection is stored under.
pub const STORAGE_KEY: &str = "@toDos";

/// Read the collection at startup. A missing value means an empty collection.
pub async fn load(store: &dyn KeyValueStore) -> Result<ToDoCollection, StoreError> {
    match store.get(STORAGE_KEY).await? {
        Some(blob) => {
            let todos = decode(&blob)?;
            info!("Loaded {} to-dos", todos.len());
            Ok(todos)
        }
        None => {
            info!("No saved to-dos, starting empty");
            Ok(ToDoCollection::new())
        }
    }
}

/// Overwrite the stored value with the full collection.
pub async fn save(store: &dyn KeyValueStore, todos: &ToDoCollection) -> Result<(), StoreError> {
    let blob = encode(todos)?;
    store.set(STORAGE_KEY, &blob).await?;
    debug!("Saved {} to-dos ({} bytes)", todos.len(), blob.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::todo::{Category, ToDoId};

    #[tokio::test]
    async fn test_load_missing_key_is_empty() {
        let store = MemoryStore::new();
        let todos = load(&store).await.unwrap();
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let todos = ToDoCollection::new()
            .with_added(ToDoId::new(1), "Write report", Category::Work)
            .unwrap()
            .with_added(ToDoId::new(2), "Lisbon", Category::Travel)
            .unwrap()
            .with_completion_toggled(ToDoId::new(2))
            .unwrap()
            .with_edit_toggled(ToDoId::new(1))
            .unwrap();

        save(&store, &todos).await.unwrap();
        assert_eq!(load(&store).await.unwrap(), todos);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_value() {
        let store = MemoryStore::new();
        let first = ToDoCollection::new()
            .with_added(ToDoId::new(1), "a", Category::Work)
            .unwrap();
        let second = first.without(ToDoId::new(1)).unwrap();

        save(&store, &first).await.unwrap();
        save(&store, &second).await.unwrap();

        assert_eq!(store.value(STORAGE_KEY).as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_load_corrupt_value_is_error() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "not json").await.unwrap();
        assert!(matches!(load(&store).await, Err(StoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_corrupt_value_converts_to_io_error() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY, "not json").await.unwrap();

        let err: std::io::Error = load(&store).await.unwrap_err().into();
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
        assert!(err.to_string().starts_with("stored to-dos are unreadable"));
    }
}
