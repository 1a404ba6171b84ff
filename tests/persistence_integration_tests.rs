use std::sync::Arc;

use tokio_test::{assert_err, assert_ok};
use worktrip::core::action::{Action, Effect, update};
use worktrip::core::state::App;
use worktrip::core::todo::{Category, ToDoCollection, ToDoId};
use worktrip::storage::{self, FileStore, KeyValueStore, Persister, StoreError, STORAGE_KEY};

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_collection() -> ToDoCollection {
    ToDoCollection::new()
        .with_added(ToDoId::new(1_700_000_000_000), "Write report", Category::Work)
        .and_then(|todos| {
            todos.with_added(ToDoId::new(1_700_000_004_211), "Lisbon", Category::Travel)
        })
        .and_then(|todos| todos.with_completion_toggled(ToDoId::new(1_700_000_004_211)))
        .unwrap()
}

// ============================================================================
// FileStore
// ============================================================================

#[tokio::test]
async fn test_fresh_directory_loads_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested"));

    let todos = assert_ok!(storage::load(&store).await);
    assert!(todos.is_empty());
}

#[tokio::test]
async fn test_save_then_load_in_a_new_store() {
    let dir = tempfile::tempdir().unwrap();
    let todos = sample_collection();

    assert_ok!(storage::save(&FileStore::new(dir.path()), &todos).await);

    // A second store over the same directory stands in for an app restart
    let loaded = assert_ok!(storage::load(&FileStore::new(dir.path())).await);
    assert_eq!(loaded, todos);
    assert!(dir.path().join("_toDos.json").exists());
    assert!(!dir.path().join("_toDos.tmp").exists());
}

#[tokio::test]
async fn test_loads_blob_written_by_earlier_versions() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let blob = r#"{
    "1600000000000": {"text": "Call the bank", "work": true, "completed": false, "isEdit": true},
    "1600000000500": {"text": "Reykjavik", "work": false}
    }"#;
    assert_ok!(store.set(STORAGE_KEY, blob).await);

    let todos = assert_ok!(storage::load(&store).await);

    assert_eq!(todos.len(), 2);
    let bank = todos.get(ToDoId::new(1_600_000_000_000)).unwrap();
    assert_eq!(bank.category, Category::Work);
    assert!(bank.editing);
    let trip = todos.get(ToDoId::new(1_600_000_000_500)).unwrap();
    assert_eq!(trip.category, Category::Travel);
    assert!(!trip.completed);
    assert!(!trip.editing);
}

#[tokio::test]
async fn test_corrupt_blob_is_reported_and_left_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert_ok!(store.set(STORAGE_KEY, "not json").await);

    let err = assert_err!(storage::load(&store).await);
    assert!(matches!(err, StoreError::Corrupt(_)));
    assert_eq!(store.get(STORAGE_KEY).await.unwrap().as_deref(), Some("not json"));
}

// ============================================================================
// Persister
// ============================================================================

#[tokio::test]
async fn test_persister_writes_final_state_of_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let persister = Persister::spawn(Arc::new(FileStore::new(dir.path())));
    let mut app = App::new(ToDoCollection::new(), Category::Work);

    for text in ["Write report", "Book flights", "Expenses"] {
        if update(&mut app, Action::SubmitDraft(text.to_string())) == Effect::Persist {
            persister.persist(app.todos.clone());
        }
    }
    let first = app.visible_ids()[0];
    update(&mut app, Action::RequestDelete(first));
    if update(&mut app, Action::ConfirmDelete) == Effect::Persist {
        persister.persist(app.todos.clone());
    }
    persister.shutdown().await;

    let loaded = assert_ok!(storage::load(&FileStore::new(dir.path())).await);
    assert_eq!(loaded, app.todos);
    assert_eq!(loaded.len(), 2);
    assert!(!loaded.contains(first));
}
