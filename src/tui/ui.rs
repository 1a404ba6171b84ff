//! Frame composition: lays out the components and feeds them their props.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │                                      │
//! │ WORK 2                      TRAVEL 1 │  tabs
//! │ ╭ New ───────────────────────────╮   │
//! │ │ Add a To Do                    │   │  draft input
//! │ ╰────────────────────────────────╯   │
//! │ [ ] Write report              ✎ ✕    │  list
//! │     [x] Expense claim           ✕    │
//! │                                      │
//! │ Added to Work       ↑↓ move  q quit  │  status
//! └──────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{CategoryTabs, ConfirmDialog, StatusBar, ToDoList};
use crate::tui::{Focus, TuiState};

const HINTS_DRAFT: &str = "Enter add  Tab switch  Esc list  Ctrl+C quit ";
const HINTS_LIST: &str = "↑↓ move  Space done  e edit  d delete  i type  Tab switch  q quit ";
const HINTS_EDIT: &str = "Enter save  Esc cancel ";
const HINTS_DIALOG: &str = "←→ choose  Enter select  y/n ";

/// Split the frame into tabs, input, list and status areas.
pub fn layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    let [_spacer, tabs, input, list, status] =
        Layout::vertical([Length(1), Length(1), Length(3), Min(0), Length(1)]).areas(area);
    [tabs, input, list, status]
}

pub fn hints(app: &App, focus: Focus) -> &'static str {
    if app.pending_delete.is_some() {
        return HINTS_DIALOG;
    }
    match focus {
        Focus::Draft => HINTS_DRAFT,
        Focus::List => HINTS_LIST,
        Focus::Edit => HINTS_EDIT,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [tabs_area, input_area, list_area, status_area] = layout(frame.area());
    let dialog_open = app.pending_delete.is_some();

    CategoryTabs::new(app.active, &app.todos).render(frame, tabs_area);

    // Sync InputBox props with App/TUI state
    tui.draft.placeholder = app.active.placeholder().to_string();
    tui.draft.title = format!(" New {} item ", app.active.label().to_lowercase());
    tui.draft.focused = tui.focus == Focus::Draft && !dialog_open;
    tui.draft.render(frame, input_area);

    ToDoList::new(&mut tui.list, &app.todos, app.active, &tui.edit)
        .focused(
            tui.focus != Focus::Draft,
            tui.focus == Focus::Edit && !dialog_open,
        )
        .render(frame, list_area);

    StatusBar::new(&app.status_message, hints(app, tui.focus)).render(frame, status_area);

    if let Some(id) = app.pending_delete {
        let subject = app.todos.get(id).map(|item| item.text.as_str()).unwrap_or("");
        ConfirmDialog::new(&tui.dialog, subject).render(frame, frame.area());
    }
}
