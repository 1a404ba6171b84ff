//! # StatusBar Component
//!
//! Bottom line showing the last status message on the left and the key
//! hints for the current focus on the right.
//!
//! Stateless: both props are plain strings chosen by the parent, so the
//! bar doesn't care where they come from.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct StatusBar<'a> {
    /// Outcome of the last action (e.g. "Added to Work", "Deleted")
    pub status_message: &'a str,
    /// Key hints for the current focus
    pub hints: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(status_message: &'a str, hints: &'a str) -> Self {
        Self {
            status_message,
            hints,
        }
    }
}

impl<'a> Component for StatusBar<'a> {
    /// Hints are right-aligned; when both don't fit, the status wins.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width as usize;
        let status = format!(" {}", self.status_message);
        let used = status.width() + self.hints.width();

        let mut spans = vec![Span::styled(status, Style::default().fg(Color::Green))];
        if used <= width {
            spans.push(Span::raw(" ".repeat(width - used)));
            spans.push(Span::styled(self.hints, Style::default().fg(Color::DarkGray)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
