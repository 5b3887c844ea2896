//! Terminal front end: parses commands, drives the store, renders pages.

pub mod binding;
pub mod input;
pub mod render;

pub use binding::{AppStore, BindingError, Outcome, ViewBinding};
pub use input::{InputError, ReplCommand, parse_line};
