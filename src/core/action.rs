//! # Actions
//!
//! Everything that can happen on the to-do screen becomes an `Action`.
//! User types a task and presses Enter? That's `Action::SubmitDraft(text)`.
//! User confirms the delete prompt? That's `Action::ConfirmDelete`.
//!
//! The `update()` function takes the current state and an action, swaps in
//! the new collection produced by the domain operation, and returns an
//! `Effect` telling the adapter what I/O to do. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::state::App;
use crate::core::todo::{Category, ToDoCollection, ToDoError, ToDoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SwitchCategory(Category),
    ToggleCategory,
    /// Create an item in the active category from the input box text.
    SubmitDraft(String),
    ToggleComplete(ToDoId),
    ToggleEdit(ToDoId),
    /// Replace an item's text with the edit buffer.
    SubmitEdit { id: ToDoId, text: String },
    /// Open the delete prompt for an item.
    RequestDelete(ToDoId),
    ConfirmDelete,
    CancelDelete,
    Quit,
}

/// Side effect requested by `update`, performed by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Write the full current collection to storage.
    Persist,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SwitchCategory(category) => {
            app.active = category;
            Effect::None
        }
        Action::ToggleCategory => {
            app.active = app.active.toggle();
            Effect::None
        }
        Action::SubmitDraft(text) => {
            let id = app.ids.next();
            let result = app.todos.with_added(id, &text, app.active);
            apply(app, result, format!("Added to {}", app.active), Effect::Persist)
        }
        Action::ToggleComplete(id) => {
            let result = app.todos.with_completion_toggled(id);
            let status = match app.todos.get(id) {
                Some(item) if item.completed => "Marked as not done",
                _ => "Marked as done",
            };
            apply(app, result, status.to_string(), Effect::Persist)
        }
        Action::ToggleEdit(id) => {
            let result = app.todos.with_edit_toggled(id);
            apply(app, result, String::new(), Effect::None)
        }
        Action::SubmitEdit { id, text } => {
            let result = app.todos.with_text_edited(id, &text);
            apply(app, result, "Updated".to_string(), Effect::Persist)
        }
        Action::RequestDelete(id) => {
            if app.todos.contains(id) {
                app.pending_delete = Some(id);
            } else {
                warn!("Delete requested for unknown to-do {}", id);
            }
            Effect::None
        }
        Action::ConfirmDelete => {
            let Some(id) = app.pending_delete.take() else {
                return Effect::None;
            };
            let result = app.todos.without(id);
            apply(app, result, "Deleted".to_string(), Effect::Persist)
        }
        Action::CancelDelete => {
            app.pending_delete = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Swap in a successful result, or log why the collection stayed as it was.
fn apply(
    app: &mut App,
    result: Result<ToDoCollection, ToDoError>,
    status: String,
    on_success: Effect,
) -> Effect {
    match result {
        Ok(todos) => {
            app.todos = todos;
            if !status.is_empty() {
                app.status_message = status;
            }
            on_success
        }
        Err(ToDoError::EmptyText) => {
            debug!("Ignoring empty submission");
            Effect::None
        }
        Err(e) => {
            warn!("Rejected to-do operation: {}", e);
            Effect::None
        }
    }
}
