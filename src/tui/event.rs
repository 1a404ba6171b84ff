use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, warn};

use crate::core::todo::Category;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Always handled
    ForceQuit,
    Resize,

    // Category header
    ToggleCategory,              // Tab / Shift+Tab
    SelectCategory(Category),    // Ctrl+W / Ctrl+T

    // Text entry and list navigation (meaning depends on focus)
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    Submit,
    Escape,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(ev) => translate(ev),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => {
            // Keyboard enhancement reports releases too; act on presses only
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                    Some(TuiEvent::SelectCategory(Category::Work))
                }
                (KeyModifiers::CONTROL, KeyCode::Char('t')) => {
                    Some(TuiEvent::SelectCategory(Category::Travel))
                }
                (KeyModifiers::CONTROL, _) => None,
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Tab) | (_, KeyCode::BackTab) => Some(TuiEvent::ToggleCategory),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                _ => None,
            }
        }
        // Bracketed paste; newlines make no sense in a one-line item
        Event::Paste(data) => Some(TuiEvent::Paste(data.replace(['\r', '\n'], " "))),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
