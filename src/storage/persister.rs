//! # Single-Writer Persistence
//!
//! The UI never waits for storage. After each successful mutation it hands the
//! full new collection to [`Persister::persist`] and moves on.
//!
//! ```text
//! UI thread ──persist(snapshot)──▶ watch channel ──▶ writer task ──▶ KeyValueStore
//!                                  (latest only)     (one write at a time)
//! ```
//!
//! A `watch` channel holds only the most recent snapshot, so a burst of edits
//! while a write is in flight collapses into a single follow-up write. Because
//! one task performs every write in order, an older snapshot can never land
//! after a newer one.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{KeyValueStore, save};
use crate::core::todo::ToDoCollection;

pub struct Persister {
    tx: watch::Sender<Option<ToDoCollection>>,
    handle: JoinHandle<()>,
}

impl Persister {
    /// Start the writer task. Must be called from within a tokio runtime.
    pub fn spawn(store: Arc<dyn KeyValueStore>) -> Self {
        let (tx, rx) = watch::channel(None);
        let handle = tokio::spawn(writer_loop(store, rx));
        Self { tx, handle }
    }

    /// Queue `snapshot` to be written, replacing any snapshot not yet written.
    /// Never blocks.
    pub fn persist(&self, snapshot: ToDoCollection) {
        self.tx.send_replace(Some(snapshot));
    }

    /// Write whatever is still pending, then stop the writer task.
    pub async fn shutdown(self) {
        let Self { tx, handle } = self;
        drop(tx);
        if let Err(e) = handle.await {
            warn!("Persistence task ended abnormally: {}", e);
        }
    }
}

async fn writer_loop(
    store: Arc<dyn KeyValueStore>,
    mut rx: watch::Receiver<Option<ToDoCollection>>,
) {
    let mut written = 0usize;
    // `changed()` still reports a value sent just before the sender dropped,
    // so the final snapshot is written before the loop exits.
    while rx.changed().await.is_ok() {
        let Some(snapshot) = rx.borrow_and_update().clone() else {
            continue;
        };
        match save(store.as_ref(), &snapshot).await {
            Ok(()) => {
                written += 1;
                debug!("Persisted snapshot #{} ({} to-dos)", written, snapshot.len());
            }
            Err(e) => warn!("Failed to save to-dos: {}", e),
        }
    }
    info!("Persistence task stopped after {} writes", written);
}
