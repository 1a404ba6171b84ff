//! # InputBox Component
//!
//! Single-line text field used for new items and as the edit buffer.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit the buffer on Enter (the caller clears it once the text is accepted)
//! - Show a placeholder while empty and scroll horizontally to keep the cursor visible
//!
//! The buffer and cursor are internal state. Placeholder, title and focus are
//! props set by the parent each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Offset from area edge to content (border width)
const BORDER_OFFSET: u16 = 1;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter; carries the current buffer
    Submit(String),
    /// Buffer or cursor changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// Shown dimmed while the buffer is empty (Prop)
    pub placeholder: String,
    /// Block title (Prop)
    pub title: String,
    /// Whether keystrokes currently go here (Prop)
    pub focused: bool,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            placeholder: String::new(),
            title: String::new(),
            focused: false,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Display width of the text left of the cursor.
    pub fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor].width() as u16
    }

    /// The tail of the buffer that fits in `width` columns with the cursor
    /// visible, plus the cursor column within that tail.
    fn visible_window(&self, width: u16) -> (&str, u16) {
        let width = width as usize;
        if width == 0 {
            return ("", 0);
        }
        let before = &self.buffer[..self.cursor];
        let mut start = 0;
        // Keep one column free for the cursor itself
        while before[start..].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        (&self.buffer[start..], before[start..].width() as u16)
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());

        let inner_width = area.width.saturating_sub(BORDER_OFFSET * 2);
        let (visible, cursor_col) = self.visible_window(inner_width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(visible).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + cursor_col,
                area.y + BORDER_OFFSET,
            ));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor, text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_submit_does_not_clear() {
        let mut input = typed("hello");
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(InputEvent::Submit("hello".to_string()))
        );
        assert_eq!(input.buffer, "hello");

        input.clear();
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor_column(), 0);
    }

    #[test]
    fn test_cursor_movement_and_multibyte_editing() {
        let mut input = typed("café");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "caf");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::InputChar('é'));
        assert_eq!(input.buffer, "écaf");
        assert_eq!(input.cursor_column(), 1);

        assert_eq!(input.handle_event(&TuiEvent::CursorHome), Some(InputEvent::ContentChanged));
        assert_eq!(input.handle_event(&TuiEvent::CursorHome), None);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);

        input.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_paste_inserts_at_cursor() {
        let mut input = typed("ad");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Paste("bc".to_string()));
        assert_eq!(input.buffer, "abcd");
        assert_eq!(input.cursor_column(), 3);
    }

    #[test]
    fn test_visible_window_keeps_cursor_in_view() {
        let input = typed("abcdefghij");
        let (visible, col) = input.visible_window(5);
        assert_eq!(visible, "ghij");
        assert_eq!(col, 4);

        let (visible, col) = input.visible_window(20);
        assert_eq!(visible, "abcdefghij");
        assert_eq!(col, 10);
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        input.placeholder = "Add a To Do".to_string();
        input.title = "Work".to_string();

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Add a To Do"));
        assert!(text.contains("Work"));
    }
}
