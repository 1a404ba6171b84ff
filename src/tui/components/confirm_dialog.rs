//! # Confirm Dialog Component
//!
//! Centered overlay asking "Delete To Do?" with two buttons, `Cancel` and
//! the destructive `I'm Sure`. Shown while `App::pending_delete` is set;
//! while open it receives every key.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ConfirmDialogState` lives in `TuiState`
//! - `ConfirmDialog` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const DIALOG_WIDTH: u16 = 36;
const DIALOG_HEIGHT: u16 = 7;

/// Which button has focus. Cancel is the default so a stray Enter is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    #[default]
    Cancel,
    Confirm,
}

/// Events emitted by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Cancel,
    Confirm,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pub focused: DialogButton,
}

impl ConfirmDialogState {
    /// Reset focus to Cancel; called each time the dialog opens.
    pub fn reset(&mut self) {
        self.focused = DialogButton::Cancel;
    }
}

impl EventHandler for ConfirmDialogState {
    type Event = DialogChoice;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogChoice> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('n') | TuiEvent::InputChar('N') => {
                Some(DialogChoice::Cancel)
            }
            TuiEvent::InputChar('y') | TuiEvent::InputChar('Y') => Some(DialogChoice::Confirm),
            TuiEvent::CursorLeft => {
                self.focused = DialogButton::Cancel;
                None
            }
            TuiEvent::CursorRight => {
                self.focused = DialogButton::Confirm;
                None
            }
            TuiEvent::ToggleCategory => {
                self.focused = match self.focused {
                    DialogButton::Cancel => DialogButton::Confirm,
                    DialogButton::Confirm => DialogButton::Cancel,
                };
                None
            }
            TuiEvent::Submit => Some(match self.focused {
                DialogButton::Cancel => DialogChoice::Cancel,
                DialogButton::Confirm => DialogChoice::Confirm,
            }),
            _ => None,
        }
    }
}

/// Transient render wrapper for the dialog overlay.
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    /// Text of the item about to be deleted
    subject: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState, subject: &'a str) -> Self {
        Self { state, subject }
    }
}

impl<'a> Component for ConfirmDialog<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title(" Delete To Do? ")
            .title_alignment(Alignment::Center);

        let button = |label: &'static str, focused: bool, color: Color| {
            let style = if focused {
                Style::default()
                    .fg(color)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(color)
            };
            Span::styled(format!(" {label} "), style)
        };

        let lines = vec![
            Line::from(Span::styled(
                self.subject.to_string(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )),
            Line::from("Are you sure?"),
            Line::default(),
            Line::from(vec![
                button("Cancel", self.state.focused == DialogButton::Cancel, Color::White),
                Span::raw("    "),
                button("I'm Sure", self.state.focused == DialogButton::Confirm, Color::Red),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

/// A `width` x `height` rect centered in `outer`, shrunk to fit.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_enter_defaults_to_cancel() {
        let mut state = ConfirmDialogState::default();
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(DialogChoice::Cancel));
    }

    #[test]
    fn test_move_to_confirm_then_enter() {
        let mut state = ConfirmDialogState::default();
        assert_eq!(state.handle_event(&TuiEvent::CursorRight), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(DialogChoice::Confirm));

        state.reset();
        assert_eq!(state.focused, DialogButton::Cancel);
    }

    #[test]
    fn test_shortcuts() {
        let mut state = ConfirmDialogState::default();
        assert_eq!(state.handle_event(&TuiEvent::InputChar('y')), Some(DialogChoice::Confirm));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('n')), Some(DialogChoice::Cancel));
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(DialogChoice::Cancel));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut state = ConfirmDialogState::default();
        state.handle_event(&TuiEvent::ToggleCategory);
        assert_eq!(state.focused, DialogButton::Confirm);
        state.handle_event(&TuiEvent::ToggleCategory);
        assert_eq!(state.focused, DialogButton::Cancel);
    }

    #[test]
    fn test_render_shows_prompt_and_buttons() {
        let backend = TestBackend::new(60, 15);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = ConfirmDialogState::default();

        terminal
            .draw(|f| ConfirmDialog::new(&state, "Write report").render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Delete To Do?"));
        assert!(text.contains("Are you sure?"));
        assert!(text.contains("Cancel"));
        assert!(text.contains("I'm Sure"));
        assert!(text.contains("Write report"));
    }

    #[test]
    fn test_centered_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 20, 4);
        let rect = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 4);
    }
}
