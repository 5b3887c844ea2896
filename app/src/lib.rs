//! # Taskboard
//!
//! An in-memory schedule board: create, edit, delete and advance todos, and
//! view them filtered by status and ordered by start date.
//!
//! - [`todo_store`] owns the todo collection and its mutations
//! - [`query`] derives the filtered, ordered list
//! - [`reducer`] drives both through the runtime `Store`
//! - [`view`] is the terminal front end
//!
//! Nothing is persisted; the board lives as long as the process.

pub mod app;
pub mod config;
pub mod locale;
pub mod query;
pub mod reducer;
pub mod todo_store;
pub mod types;
pub mod view;

pub use app::{AppAction, AppState, Route};
pub use config::{Config, ConfigError};
pub use locale::Locale;
pub use reducer::{AppEnvironment, AppReducer};
pub use todo_store::TodoStore;
pub use types::{Filter, Status, TodoDraft, TodoId, TodoItem};
