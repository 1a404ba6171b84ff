//! # Application State
//!
//! Core state for the to-do screen. Domain data plus the little bit of
//! screen-level state the reducer owns (active category, delete prompt).
//! Presentation state (focus, selection, text buffers) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── todos: ToDoCollection          // authoritative in-memory collection
//! ├── active: Category               // which list is shown
//! ├── ids: IdGenerator               // unique ids for new items
//! ├── pending_delete: Option<ToDoId> // open "Delete To Do?" prompt
//! └── status_message: String         // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::todo::{Category, IdGenerator, ToDoCollection, ToDoId};

pub struct App {
    pub todos: ToDoCollection,
    pub active: Category,
    pub ids: IdGenerator,
    /// Item awaiting delete confirmation (None = no prompt open).
    pub pending_delete: Option<ToDoId>,
    pub status_message: String,
}

impl App {
    pub fn new(todos: ToDoCollection, active: Category) -> Self {
        Self {
            ids: IdGenerator::after(&todos),
            todos,
            active,
            pending_delete: None,
            status_message: String::new(),
        }
    }

    pub fn from_config(todos: ToDoCollection, config: &ResolvedConfig) -> Self {
        Self::new(todos, config.default_category)
    }

    /// Ids shown for the active category, in display order.
    pub fn visible_ids(&self) -> Vec<ToDoId> {
        self.todos.visible(self.active).map(|(id, _)| id).collect()
    }
}
