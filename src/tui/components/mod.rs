//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `CategoryTabs`: Work / Travel header
//! - `StatusBar`: last status message and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: single-line text field (new item, edit buffer)
//! - `ToDoList`: rows of the active category with a selection
//! - `ConfirmDialog`: the "Delete To Do?" prompt
//!
//! Each component file holds its state types, event types, rendering,
//! event handling and tests together.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── category_tabs.rs   (Work / Travel header)
//! ├── input_box/         (Text input with placeholder)
//! ├── todo_list.rs       (Item rows)
//! ├── confirm_dialog.rs  (Delete confirmation overlay)
//! └── status_bar.rs      (Bottom status line)
//! ```

pub mod category_tabs;
pub mod confirm_dialog;
pub mod input_box;
pub mod status_bar;
pub mod todo_list;

pub use category_tabs::CategoryTabs;
pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState, DialogChoice};
pub use input_box::{InputBox, InputEvent};
pub use status_bar::StatusBar;
pub use todo_list::{ToDoList, ToDoListState};
