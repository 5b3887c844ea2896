//! Application state and actions driven through the runtime `Store`.
//!
//! Commands express what the user asked for; events record what changed.
//! Only events touch state (see [`AppReducer::apply_event`](crate::reducer::AppReducer::apply_event)).

use crate::query;
use crate::todo_store::TodoStore;
use crate::types::{Filter, Status, TodoDraft, TodoId, TodoItem};
use serde::{Deserialize, Serialize};
use taskboard_macros::{Action, State};

/// The page the board is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", content = "id", rename_all = "lowercase")]
pub enum Route {
    /// Filtered list of todos
    #[default]
    List,
    /// Blank creation form
    Add,
    /// One todo with its description, editable
    Detail(TodoId),
}

/// Everything the board knows
#[derive(State, Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Canonical todo collection
    pub todos: TodoStore,
    /// Current list filter
    pub filter: Filter,
    /// Current page
    pub route: Route,
    /// Bumped on every applied event
    #[revision]
    pub revision: u64,
}

impl AppState {
    /// Creates state holding `todos`, on the list page, unfiltered
    #[must_use]
    pub fn with_todos(todos: TodoStore) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    /// The list page's rows under the current filter
    #[must_use]
    pub fn visible(&self) -> Vec<&TodoItem> {
        query::filter_refs(self.todos.list(), self.filter)
    }

    /// The todo shown on the detail page, if the route points at one that exists
    #[must_use]
    pub fn current_detail(&self) -> Option<&TodoItem> {
        match self.route {
            Route::Detail(id) => self.todos.get(id),
            Route::List | Route::Add => None,
        }
    }
}

/// Actions for the board
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppAction {
    // ========== Commands ==========
    /// Command: create a todo from a possibly blank form
    #[command]
    AddTodo {
        /// Form contents; empty title and start date get defaults
        draft: TodoDraft,
    },

    /// Command: replace a todo wholesale
    #[command]
    EditTodo {
        /// New contents, matched by id
        item: TodoItem,
    },

    /// Command: remove a todo
    #[command]
    DeleteTodo {
        /// Todo to remove
        id: TodoId,
    },

    /// Command: move a todo one status forward
    #[command]
    AdvanceStatus {
        /// Todo to advance
        id: TodoId,
    },

    /// Command: change the list filter
    #[command]
    SetFilter {
        /// New filter
        filter: Filter,
    },

    /// Command: switch page
    #[command]
    Navigate {
        /// Requested page
        route: Route,
    },

    // ========== Events ==========
    /// Event: a todo was created
    #[event]
    TodoAdded {
        /// The stored todo, defaults filled and id assigned
        item: TodoItem,
    },

    /// Event: a todo was replaced
    #[event]
    TodoEdited {
        /// The new contents
        item: TodoItem,
    },

    /// Event: a todo was removed
    #[event]
    TodoDeleted {
        /// Removed todo
        id: TodoId,
    },

    /// Event: a todo's status moved forward
    #[event]
    StatusAdvanced {
        /// Advanced todo
        id: TodoId,
        /// Its new status
        status: Status,
    },

    /// Event: the list filter changed
    #[event]
    FilterChanged {
        /// New filter
        filter: Filter,
    },

    /// Event: the page changed
    #[event]
    Navigated {
        /// New page
        route: Route,
    },
}
