//! # Core Application Logic
//!
//! This module contains the to-do business logic.
//! It knows nothing about terminals or files.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ToDoCollection       │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Persist
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  storage   │
//!     │  Adapter   │                          │ (Persister)│
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`todo`]: items, categories, ids and the pure collection operations
//! - [`state`]: The `App` struct: all core state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod state;
pub mod todo;
