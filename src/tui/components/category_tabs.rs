//! # CategoryTabs Component
//!
//! Header with the two category labels at opposite ends, `Work` on the left
//! and `Travel` on the right. The active one is bright, the other gray.
//! Each label carries the number of open (not completed) items.
//!
//! Stateless: all data comes in as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::todo::{Category, ToDoCollection};
use crate::tui::component::Component;

pub struct CategoryTabs {
    pub active: Category,
    /// Open items per category, in `Category::ALL` order
    pub open_counts: [usize; 2],
}

impl CategoryTabs {
    pub fn new(active: Category, todos: &ToDoCollection) -> Self {
        let open = |c: Category| todos.count(c) - todos.completed_count(c);
        Self {
            active,
            open_counts: Category::ALL.map(open),
        }
    }

    fn label(&self, category: Category, open: usize) -> Line<'static> {
        let style = if category == self.active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut spans = vec![Span::styled(category.label().to_uppercase(), style)];
        if open > 0 {
            spans.push(Span::styled(
                format!(" {open}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Component for CategoryTabs {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area.inner(ratatui::layout::Margin::new(1, 0)));

        let [work, travel] = Category::ALL;
        let [work_open, travel_open] = self.open_counts;
        frame.render_widget(
            Paragraph::new(self.label(work, work_open)).alignment(Alignment::Left),
            left,
        );
        frame.render_widget(
            Paragraph::new(self.label(travel, travel_open)).alignment(Alignment::Right),
            right,
        );
    }
}
