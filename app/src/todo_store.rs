//! The canonical todo collection and its mutations.
//!
//! Creation is split in two: [`normalize`] fills the defaults a blank form
//! leaves out, and [`TodoStore::insert`] assigns the id and stores the
//! record unconditionally. [`TodoStore::add`] chains both.

use crate::types::{Status, TodoDraft, TodoId, TodoItem};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of every date string a todo carries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fill in the defaults for a todo about to be created
///
/// An empty title becomes `default_title` and an empty start date becomes
/// `today`. Anything else, whitespace included, is kept as given.
#[must_use]
pub fn normalize(candidate: TodoDraft, today: NaiveDate, default_title: &str) -> TodoDraft {
    let mut draft = candidate;
    if draft.title.is_empty() {
        draft.title = default_title.to_string();
    }
    if draft.start_date.is_empty() {
        draft.start_date = today.format(DATE_FORMAT).to_string();
    }
    draft
}

/// In-memory collection of todo items, kept in insertion order
///
/// Presentation order is computed on read by [`crate::query`], never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
}

impl TodoStore {
    /// Creates an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// The id the next inserted item will receive: highest id plus one
    #[must_use]
    pub fn next_id(&self) -> TodoId {
        let max = self.todos.iter().map(|todo| todo.id.get()).max().unwrap_or(0);
        TodoId::new(max.saturating_add(1))
    }

    /// Store an already-normalized draft under a fresh id
    pub fn insert(&mut self, draft: TodoDraft) -> TodoItem {
        let item = TodoItem::from_draft(self.next_id(), draft);
        self.todos.push(item.clone());
        item
    }

    /// Store `item` under its own id, replacing any item with that id
    pub fn put(&mut self, item: TodoItem) {
        match self.position(item.id) {
            Some(index) => self.todos[index] = item,
            None => self.todos.push(item),
        }
    }

    /// The item [`TodoStore::add`] would store for `candidate`, without storing it
    ///
    /// Defaults are filled and the next id assigned; the store is unchanged.
    #[must_use]
    pub fn prepare(&self, candidate: TodoDraft, today: NaiveDate, default_title: &str) -> TodoItem {
        TodoItem::from_draft(self.next_id(), normalize(candidate, today, default_title))
    }

    /// Normalize `candidate` and insert it
    pub fn add(&mut self, candidate: TodoDraft, today: NaiveDate, default_title: &str) -> TodoItem {
        let item = self.prepare(candidate, today, default_title);
        self.put(item.clone());
        item
    }

    /// Replace the item with the same id, verbatim
    ///
    /// Returns `false` and changes nothing when no item has that id.
    pub fn edit(&mut self, item: TodoItem) -> bool {
        let Some(index) = self.position(item.id) else {
            return false;
        };
        self.todos[index] = item;
        true
    }

    /// Remove the item with `id`
    ///
    /// Returns `false` when no item has that id.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.todos.len() != before
    }

    /// Move the item with `id` one status forward, stopping at `Completed`
    ///
    /// Returns `false` when no item has that id.
    pub fn advance_status(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) else {
            return false;
        };
        todo.status = todo.status.next();
        true
    }

    /// Every item, in insertion order
    #[must_use]
    pub fn list(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Look up one item
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Whether an item with `id` exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.position(id).is_some()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the store holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of items with the given status
    #[must_use]
    pub fn count_by_status(&self, status: Status) -> usize {
        self.todos.iter().filter(|todo| todo.status == status).count()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }
}

impl FromIterator<TodoItem> for TodoStore {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        let mut store = Self::new();
        for item in iter {
            store.put(item);
        }
        store
    }
}
