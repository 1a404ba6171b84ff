//! # ToDoList Component
//!
//! The items of the active category, one row each, in creation order.
//!
//! ## Row layout
//!
//! ```text
//!  [ ] Write the quarterly report             ✎ ✕
//!      [x] Book flights                           ✕     ← completed: indented, struck through
//!  [ ] ✎ new text being typed|                ✎ ✕     ← editing: edit buffer, old text as hint
//! ```
//!
//! Completed items do not show the edit hint. Long text wraps under itself.
//!
//! `ToDoList` is transient (created each frame) and wraps the persistent
//! `ToDoListState`, which tracks the selected row.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::todo::{Category, ToDoCollection, ToDoId, ToDoItem};
use crate::tui::component::Component;
use crate::tui::components::InputBox;

const COMPLETED_INDENT: &str = "    ";
const EDIT_MARK: &str = "✎ ";
const HINT_EDIT_DELETE: &str = " ✎ ✕";
const HINT_DELETE: &str = " ✕";

/// Selection state for the list. Lives in `TuiState`.
#[derive(Default)]
pub struct ToDoListState {
    pub list_state: ListState,
}

impl ToDoListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn selected_id(&self, visible: &[ToDoId]) -> Option<ToDoId> {
        self.selected().and_then(|i| visible.get(i).copied())
    }

    /// Keep the selection on a valid row after the list changed length.
    pub fn clamp(&mut self, len: usize) {
        let selected = match (len, self.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.selected().map(|i| i.saturating_sub(1)).unwrap_or(len - 1);
        self.list_state.select(Some(i));
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.selected().map(|i| (i + 1).min(len - 1)).unwrap_or(0);
        self.list_state.select(Some(i));
    }

    pub fn select_last(&mut self, len: usize) {
        self.list_state.select(len.checked_sub(1));
    }
}

pub struct ToDoList<'a> {
    pub state: &'a mut ToDoListState,
    pub todos: &'a ToDoCollection,
    pub category: Category,
    /// Shared edit buffer shown in rows that are in edit mode
    pub edit: &'a InputBox,
    /// Highlight the selected row
    pub has_focus: bool,
    /// Place the terminal cursor in the selected row's edit field
    pub editing_selected: bool,
}

impl<'a> ToDoList<'a> {
    pub fn new(
        state: &'a mut ToDoListState,
        todos: &'a ToDoCollection,
        category: Category,
        edit: &'a InputBox,
    ) -> Self {
        Self {
            state,
            todos,
            category,
            edit,
            has_focus: false,
            editing_selected: false,
        }
    }

    pub fn focused(mut self, has_focus: bool, editing_selected: bool) -> Self {
        self.has_focus = has_focus;
        self.editing_selected = editing_selected;
        self
    }
}

impl<'a> Component for ToDoList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().padding(Padding::horizontal(1));
        let inner = block.inner(area);

        let visible: Vec<(ToDoId, &ToDoItem)> = self.todos.visible(self.category).collect();
        if visible.is_empty() {
            let empty = Paragraph::new(format!(
                "No {} items yet.",
                self.category.label().to_lowercase()
            ))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }
        self.state.clamp(visible.len());

        let rows: Vec<Vec<Line>> = visible
            .iter()
            .map(|(_, item)| row_lines(item, self.edit.buffer.as_str(), inner.width))
            .collect();
        let heights: Vec<u16> = rows.iter().map(|lines| lines.len() as u16).collect();

        let highlight = if self.has_focus {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(rows.into_iter().map(ListItem::new))
            .block(block)
            .highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);

        if self.editing_selected
            && let Some(selected) = self.state.selected()
            && let Some((_, item)) = visible.get(selected)
            && item.editing
        {
            let offset = self.state.list_state.offset();
            if selected >= offset {
                let row_y: u16 = heights[offset..selected].iter().sum();
                let col = prefix_width(item) + EDIT_MARK.width() as u16 + self.edit.cursor_column();
                if row_y < inner.height && col < inner.width {
                    frame.set_cursor_position((inner.x + col, inner.y + row_y));
                }
            }
        }
    }
}

fn prefix_width(item: &ToDoItem) -> u16 {
    let indent = if item.completed { COMPLETED_INDENT.width() } else { 0 };
    (indent + "[ ] ".width()) as u16
}

/// Build the display lines of one item for a row of `width` columns.
fn row_lines(item: &ToDoItem, edit_buffer: &str, width: u16) -> Vec<Line<'static>> {
    let indent = if item.completed { COMPLETED_INDENT } else { "" };
    let checkbox = if item.completed { "[x] " } else { "[ ] " };
    let hint = if item.completed { HINT_DELETE } else { HINT_EDIT_DELETE };
    let dim = Style::default().fg(Color::DarkGray);

    let (mark, body, body_style) = if item.editing {
        if edit_buffer.is_empty() {
            (EDIT_MARK, item.text.clone(), dim.add_modifier(Modifier::ITALIC))
        } else {
            (EDIT_MARK, edit_buffer.to_string(), Style::default().fg(Color::Yellow))
        }
    } else if item.completed {
        ("", item.text.clone(), dim.add_modifier(Modifier::CROSSED_OUT))
    } else {
        ("", item.text.clone(), Style::default().fg(Color::White))
    };

    let lead = format!("{indent}{checkbox}{mark}");
    let lead_width = lead.width();
    let body_width = (width as usize)
        .saturating_sub(lead_width + hint.width())
        .max(1);

    // Edit fields stay on one line so the cursor can be placed on them
    let wrapped: Vec<String> = if item.editing {
        vec![body]
    } else {
        textwrap::wrap(&body, body_width)
            .into_iter()
            .map(|segment| segment.into_owned())
            .collect()
    };

    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            let lead_span = if i == 0 {
                Span::styled(lead.clone(), dim)
            } else {
                Span::raw(" ".repeat(lead_width))
            };
            let mut spans = vec![lead_span];
            let segment_width = segment.width();
            spans.push(Span::styled(segment, body_style));
            if i == 0 {
                let pad = body_width.saturating_sub(segment_width);
                spans.push(Span::raw(" ".repeat(pad)));
                spans.push(Span::styled(hint, dim));
            }
            Line::from(spans)
        })
        .collect()
}
