//! # To-Do Domain
//!
//! The collection of to-do items and every operation that changes it.
//!
//! ```text
//! ToDoCollection
//! └── BTreeMap<ToDoId, ToDoItem>   // ordered by id = creation order
//!     ├── text: String             // never empty
//!     ├── category: Category       // fixed at creation
//!     ├── completed: bool
//!     └── editing: bool            // transient UI flag
//! ```
//!
//! Operations never mutate in place. Each one borrows the current collection
//! and hands back a new one (or a `ToDoError` saying why nothing changed), so
//! the caller decides when the new snapshot becomes current and gets persisted.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The two lists an item can belong to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Travel,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Work, Category::Travel];

    pub fn label(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Travel => "Travel",
        }
    }

    /// Hint shown in the empty input box.
    pub fn placeholder(self) -> &'static str {
        match self {
            Category::Work => "Add a To Do",
            Category::Travel => "Where do you want to go?",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Category::Work => Category::Travel,
            Category::Travel => Category::Work,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of a to-do item.
///
/// Values are millisecond timestamps made strictly increasing by
/// [`IdGenerator`], so sorting by id gives creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToDoId(u64);

impl ToDoId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToDoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToDoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ToDoId)
    }
}

/// Hands out unique, strictly increasing ids.
///
/// Uses the wall clock when it has moved past the last id and `last + 1`
/// otherwise, so two items created in the same millisecond (or after the
/// clock stepped backwards) still get distinct keys.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// A generator that will never return an id already present in `todos`.
    pub fn after(todos: &ToDoCollection) -> Self {
        Self {
            last: todos.max_id().map(ToDoId::as_u64).unwrap_or(0),
        }
    }

    pub fn next_at(&mut self, now_millis: u64) -> ToDoId {
        self.last = now_millis.max(self.last.saturating_add(1));
        ToDoId(self.last)
    }

    pub fn next(&mut self) -> ToDoId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToDoItem {
    pub text: String,
    pub category: Category,
    pub completed: bool,
    /// Transient: the item is showing its edit field.
    pub editing: bool,
}

impl ToDoItem {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
            completed: false,
            editing: false,
        }
    }
}

/// Why an operation left the collection unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToDoError {
    /// Submitted text was empty or whitespace only.
    EmptyText,
    /// No item with this id (stale id, e.g. already deleted).
    NotFound(ToDoId),
    /// An item with this id already exists.
    DuplicateId(ToDoId),
}

impl fmt::Display for ToDoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToDoError::EmptyText => write!(f, "text is empty"),
            ToDoError::NotFound(id) => write!(f, "no to-do with id {id}"),
            ToDoError::DuplicateId(id) => write!(f, "to-do id {id} already exists"),
        }
    }
}

impl std::error::Error for ToDoError {}

/// All to-do items, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToDoCollection {
    items: BTreeMap<ToDoId, ToDoItem>,
}

impl ToDoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ToDoId) -> Option<&ToDoItem> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ToDoId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn max_id(&self) -> Option<ToDoId> {
        self.items.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToDoId, &ToDoItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    /// Items of one category, in creation order.
    pub fn visible(&self, category: Category) -> impl Iterator<Item = (ToDoId, &ToDoItem)> {
        self.iter().filter(move |(_, item)| item.category == category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.visible(category).count()
    }

    pub fn completed_count(&self, category: Category) -> usize {
        self.visible(category).filter(|(_, item)| item.completed).count()
    }

    /// New collection with a fresh incomplete item appended.
    pub fn with_added(
        &self,
        id: ToDoId,
        text: &str,
        category: Category,
    ) -> Result<Self, ToDoError> {
        if text.trim().is_empty() {
            return Err(ToDoError::EmptyText);
        }
        if self.contains(id) {
            return Err(ToDoError::DuplicateId(id));
        }
        let mut next = self.clone();
        next.items.insert(id, ToDoItem::new(text, category));
        Ok(next)
    }

    pub fn with_completion_toggled(&self, id: ToDoId) -> Result<Self, ToDoError> {
        self.modify(id, |item| item.completed = !item.completed)
    }

    /// Flips the transient edit flag. Completed items are not blocked here;
    /// hiding the edit affordance for them is a presentation rule.
    pub fn with_edit_toggled(&self, id: ToDoId) -> Result<Self, ToDoError> {
        self.modify(id, |item| item.editing = !item.editing)
    }

    /// Replaces the item's text and leaves edit mode.
    ///
    /// An empty buffer is rejected and the item stays in edit mode.
    pub fn with_text_edited(&self, id: ToDoId, text: &str) -> Result<Self, ToDoError> {
        if !self.contains(id) {
            return Err(ToDoError::NotFound(id));
        }
        if text.trim().is_empty() {
            return Err(ToDoError::EmptyText);
        }
        self.modify(id, |item| {
            item.text = text.to_string();
            item.editing = false;
        })
    }

    pub fn without(&self, id: ToDoId) -> Result<Self, ToDoError> {
        if !self.contains(id) {
            return Err(ToDoError::NotFound(id));
        }
        let mut next = self.clone();
        next.items.remove(&id);
        Ok(next)
    }

    fn modify(&self, id: ToDoId, f: impl FnOnce(&mut ToDoItem)) -> Result<Self, ToDoError> {
        let mut next = self.clone();
        let item = next.items.get_mut(&id).ok_or(ToDoError::NotFound(id))?;
        f(item);
        Ok(next)
    }
}

impl FromIterator<(ToDoId, ToDoItem)> for ToDoCollection {
    fn from_iter<I: IntoIterator<Item = (ToDoId, ToDoItem)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ToDoCollection {
        ToDoCollection::new()
            .with_added(ToDoId::new(1), "Write report", Category::Work)
            .unwrap()
            .with_added(ToDoId::new(2), "Lisbon", Category::Travel)
            .unwrap()
    }

    #[test]
    fn test_add_creates_incomplete_item_in_category() {
        let todos = ToDoCollection::new();
        let next = todos
            .with_added(ToDoId::new(10), "Call Bob", Category::Travel)
            .unwrap();

        assert_eq!(next.len(), todos.len() + 1);
        let item = next.get(ToDoId::new(10)).unwrap();
        assert_eq!(item.text, "Call Bob");
        assert_eq!(item.category, Category::Travel);
        assert!(!item.completed);
        assert!(!item.editing);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let todos = sample();
        assert_eq!(
            todos.with_added(ToDoId::new(3), "", Category::Work),
            Err(ToDoError::EmptyText)
        );
        assert_eq!(
            todos.with_added(ToDoId::new(3), "  \t ", Category::Work),
            Err(ToDoError::EmptyText)
        );
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let todos = sample();
        assert_eq!(
            todos.with_added(ToDoId::new(1), "again", Category::Work),
            Err(ToDoError::DuplicateId(ToDoId::new(1)))
        );
    }

    #[test]
    fn test_toggle_completion_twice_restores_item() {
        let todos = sample();
        let once = todos.with_completion_toggled(ToDoId::new(1)).unwrap();
        assert!(once.get(ToDoId::new(1)).unwrap().completed);

        let twice = once.with_completion_toggled(ToDoId::new(1)).unwrap();
        assert_eq!(twice, todos);
    }

    #[test]
    fn test_toggle_unknown_id_is_not_found() {
        let todos = sample();
        assert_eq!(
            todos.with_completion_toggled(ToDoId::new(99)),
            Err(ToDoError::NotFound(ToDoId::new(99)))
        );
    }

    #[test]
    fn test_edit_toggle_is_per_item() {
        let todos = sample()
            .with_edit_toggled(ToDoId::new(1))
            .unwrap()
            .with_edit_toggled(ToDoId::new(2))
            .unwrap();
        assert!(todos.get(ToDoId::new(1)).unwrap().editing);
        assert!(todos.get(ToDoId::new(2)).unwrap().editing);

        let todos = todos.with_edit_toggled(ToDoId::new(1)).unwrap();
        assert!(!todos.get(ToDoId::new(1)).unwrap().editing);
        assert!(todos.get(ToDoId::new(2)).unwrap().editing);
    }

    #[test]
    fn test_edit_replaces_text_and_leaves_edit_mode() {
        let todos = sample()
            .with_completion_toggled(ToDoId::new(1))
            .unwrap()
            .with_edit_toggled(ToDoId::new(1))
            .unwrap();

        let edited = todos.with_text_edited(ToDoId::new(1), "Send report").unwrap();
        let item = edited.get(ToDoId::new(1)).unwrap();
        assert_eq!(item.text, "Send report");
        assert!(!item.editing);
        assert!(item.completed);
        assert_eq!(item.category, Category::Work);
    }

    #[test]
    fn test_edit_with_empty_buffer_keeps_edit_mode() {
        let todos = sample().with_edit_toggled(ToDoId::new(1)).unwrap();
        assert_eq!(
            todos.with_text_edited(ToDoId::new(1), ""),
            Err(ToDoError::EmptyText)
        );
        let item = todos.get(ToDoId::new(1)).unwrap();
        assert_eq!(item.text, "Write report");
        assert!(item.editing);
    }

    #[test]
    fn test_edit_unknown_id_reports_not_found_before_empty_text() {
        assert_eq!(
            sample().with_text_edited(ToDoId::new(7), ""),
            Err(ToDoError::NotFound(ToDoId::new(7)))
        );
    }

    #[test]
    fn test_without_removes_only_that_item() {
        let todos = sample();
        let next = todos.without(ToDoId::new(1)).unwrap();
        assert_eq!(next.len(), 1);
        assert!(!next.contains(ToDoId::new(1)));
        assert_eq!(next.get(ToDoId::new(2)), todos.get(ToDoId::new(2)));
    }

    #[test]
    fn test_visible_filters_by_category() {
        let todos = sample();
        let work: Vec<_> = todos.visible(Category::Work).map(|(id, _)| id).collect();
        let travel: Vec<_> = todos.visible(Category::Travel).map(|(id, _)| id).collect();
        assert_eq!(work, vec![ToDoId::new(1)]);
        assert_eq!(travel, vec![ToDoId::new(2)]);
        assert_eq!(todos.len(), 2);
    }

    #[test]
    fn test_visible_follows_creation_order() {
        let todos = ToDoCollection::new()
            .with_added(ToDoId::new(30), "c", Category::Work)
            .unwrap()
            .with_added(ToDoId::new(10), "a", Category::Work)
            .unwrap()
            .with_added(ToDoId::new(20), "b", Category::Work)
            .unwrap();
        let texts: Vec<_> = todos
            .visible(Category::Work)
            .map(|(_, item)| item.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_id_generator_is_strictly_increasing() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(900);
        let d = ids.next_at(5_000);
        assert_eq!(a, ToDoId::new(1_000));
        assert_eq!(b, ToDoId::new(1_001));
        assert_eq!(c, ToDoId::new(1_002));
        assert_eq!(d, ToDoId::new(5_000));
    }

    #[test]
    fn test_id_generator_starts_after_loaded_ids() {
        let todos = sample();
        let mut ids = IdGenerator::after(&todos);
        assert_eq!(ids.next_at(0), ToDoId::new(3));
    }

    #[test]
    fn test_category_toggle_and_labels() {
        assert_eq!(Category::Work.toggle(), Category::Travel);
        assert_eq!(Category::Travel.toggle(), Category::Work);
        assert_eq!(Category::default(), Category::Work);
        assert_eq!(Category::Travel.placeholder(), "Where do you want to go?");
    }

    #[test]
    fn test_id_parses_from_string_key() {
        assert_eq!("1700000000000".parse::<ToDoId>(), Ok(ToDoId::new(1_700_000_000_000)));
        assert!("abc".parse::<ToDoId>().is_err());
    }
}
