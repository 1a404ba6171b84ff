//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;
use crate::core::todo::{Category, ToDoCollection, ToDoId};

/// Creates an empty App on the Work tab.
pub fn test_app() -> App {
    App::new(ToDoCollection::new(), Category::Work)
}

/// Creates an App on the Work tab holding `items`, with ids 1..=n in order.
pub fn app_with(items: &[(&str, Category)]) -> App {
    let todos = items
        .iter()
        .enumerate()
        .try_fold(ToDoCollection::new(), |todos, (i, (text, category))| {
            todos.with_added(ToDoId::new(i as u64 + 1), text, *category)
        })
        .expect("test items must be non-empty");
    App::new(todos, Category::Work)
}
