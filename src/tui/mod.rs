//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Keys mean different things depending on where the user is:
//!
//! - **Draft**: typing a new item for the active category (startup focus).
//! - **List**: moving through items, toggling, opening edit mode, deleting.
//! - **Edit**: typing into the edit buffer of the selected item.
//!
//! While the delete prompt is open it takes every key.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps in `poll` and only redraws after an
//! event (including terminal resize). All pending events are drained before
//! the next draw.
//!
//! ## Persistence
//!
//! Whenever `update()` returns `Effect::Persist` the loop hands the new
//! collection to the `Persister` and carries on without waiting for the write.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::storage::Persister;
use crate::tui::component::EventHandler;
use crate::tui::components::{ConfirmDialogState, DialogChoice, InputBox, InputEvent, ToDoListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long the loop sleeps waiting for input before checking again.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Draft,
    List,
    Edit,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    /// New item text
    pub draft: InputBox,
    /// Edit buffer, shared by every item in edit mode
    pub edit: InputBox,
    pub list: ToDoListState,
    pub dialog: ConfirmDialogState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Draft, // User expects to type immediately
            draft: InputBox::new(),
            edit: InputBox::new(),
            list: ToDoListState::new(),
            dialog: ConfirmDialogState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol makes a lone Esc arrive immediately; terminals
        // without it ignore the request
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(mut app: App, persister: &Persister) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut app, &mut tui, event) {
                Effect::Persist => persister.persist(app.todos.clone()),
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Leaving UI with {} to-dos", app.todos.len());
    ratatui::restore();
    Ok(())
}

/// Route one event to the component that owns it and run the resulting action.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    // The delete prompt is modal
    if app.pending_delete.is_some() {
        let effect = match tui.dialog.handle_event(&event) {
            Some(DialogChoice::Confirm) => update(app, Action::ConfirmDelete),
            Some(DialogChoice::Cancel) => update(app, Action::CancelDelete),
            None => Effect::None,
        };
        tui.list.clamp(app.visible_ids().len());
        return effect;
    }

    match tui.focus {
        Focus::Draft => handle_draft(app, tui, event),
        Focus::List => handle_list(app, tui, event),
        Focus::Edit => handle_edit(app, tui, event),
    }
}

fn switch_category(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let before = app.active;
    let effect = update(app, action);
    if app.active != before {
        tui.list.list_state.select(None);
    }
    tui.list.clamp(app.visible_ids().len());
    effect
}

fn handle_draft(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::ToggleCategory => switch_category(app, tui, Action::ToggleCategory),
        TuiEvent::SelectCategory(category) => {
            switch_category(app, tui, Action::SwitchCategory(category))
        }
        TuiEvent::Escape | TuiEvent::CursorDown => {
            tui.focus = Focus::List;
            tui.list.clamp(app.visible_ids().len());
            Effect::None
        }
        other => match tui.draft.handle_event(&other) {
            Some(InputEvent::Submit(text)) => {
                let effect = update(app, Action::SubmitDraft(text));
                if effect == Effect::Persist {
                    tui.draft.clear();
                    tui.list.select_last(app.visible_ids().len());
                }
                effect
            }
            _ => Effect::None,
        },
    }
}

fn handle_list(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let visible = app.visible_ids();
    let selected = tui.list.selected_id(&visible);

    match event {
        TuiEvent::ToggleCategory => switch_category(app, tui, Action::ToggleCategory),
        TuiEvent::SelectCategory(category) => {
            switch_category(app, tui, Action::SwitchCategory(category))
        }
        TuiEvent::CursorUp => {
            if tui.list.selected().unwrap_or(0) == 0 {
                tui.focus = Focus::Draft;
            } else {
                tui.list.select_previous(visible.len());
            }
            Effect::None
        }
        TuiEvent::CursorDown => {
            tui.list.select_next(visible.len());
            Effect::None
        }
        TuiEvent::CursorHome => {
            tui.list.list_state.select((!visible.is_empty()).then_some(0));
            Effect::None
        }
        TuiEvent::CursorEnd => {
            tui.list.select_last(visible.len());
            Effect::None
        }
        TuiEvent::InputChar(' ') => match selected {
            Some(id) => update(app, Action::ToggleComplete(id)),
            None => Effect::None,
        },
        TuiEvent::Submit => match selected {
            Some(id) if app.todos.get(id).is_some_and(|item| item.editing) => {
                tui.edit.clear();
                tui.focus = Focus::Edit;
                Effect::None
            }
            Some(id) => update(app, Action::ToggleComplete(id)),
            None => Effect::None,
        },
        TuiEvent::InputChar('e') => {
            let Some(id) = selected else {
                return Effect::None;
            };
            // No edit affordance for completed items
            if app.todos.get(id).is_some_and(|item| item.completed) {
                debug!("Ignoring edit on completed to-do {}", id);
                return Effect::None;
            }
            let effect = update(app, Action::ToggleEdit(id));
            // Every edit session starts from an empty buffer
            tui.edit.clear();
            if app.todos.get(id).is_some_and(|item| item.editing) {
                tui.focus = Focus::Edit;
            }
            effect
        }
        TuiEvent::InputChar('d') | TuiEvent::Delete => match selected {
            Some(id) => {
                tui.dialog.reset();
                update(app, Action::RequestDelete(id))
            }
            None => Effect::None,
        },
        TuiEvent::InputChar('i') | TuiEvent::InputChar('a') => {
            tui.focus = Focus::Draft;
            Effect::None
        }
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        _ => Effect::None,
    }
}

fn handle_edit(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let visible = app.visible_ids();
    let Some(id) = tui
        .list
        .selected_id(&visible)
        .filter(|id| app.todos.get(*id).is_some_and(|item| item.editing))
    else {
        tui.focus = Focus::List;
        return Effect::None;
    };

    match event {
        // Leave edit mode without saving
        TuiEvent::Escape => {
            tui.edit.clear();
            tui.focus = Focus::List;
            update(app, Action::ToggleEdit(id))
        }
        other => match tui.edit.handle_event(&other) {
            Some(InputEvent::Submit(text)) => {
                let effect = update(app, Action::SubmitEdit { id, text });
                if effect == Effect::Persist {
                    tui.edit.clear();
                    tui.focus = Focus::List;
                }
                effect
            }
            _ => Effect::None,
        },
    }
}
