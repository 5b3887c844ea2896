//! Filtered, date-ordered views over the todo collection.

use crate::types::{Filter, TodoItem};

/// Items passing `selector`, ordered by start date
///
/// Dates are zero-padded `YYYY-MM-DD`, so string order is date order. The
/// sort is stable: items sharing a start date keep their relative order.
#[must_use]
pub fn filter_refs(todos: &[TodoItem], selector: Filter) -> Vec<&TodoItem> {
    let mut visible: Vec<&TodoItem> = todos
        .iter()
        .filter(|todo| selector.matches(todo.status))
        .collect();
    visible.sort_by(|a, b| a.start_date.cmp(&b.start_date));
    visible
}

/// Owned variant of [`filter_refs`]
#[must_use]
pub fn filter(todos: &[TodoItem], selector: Filter) -> Vec<TodoItem> {
    filter_refs(todos, selector).into_iter().cloned().collect()
}
