//! Plain-text pages.
//!
//! Every renderer is a pure function of state and locale, so pages can be
//! asserted on directly in tests.

use crate::app::{AppState, Route};
use crate::locale::Locale;
use crate::types::{Filter, TodoItem};

/// Render whichever page the route points at
///
/// A detail route whose todo no longer exists renders the list page.
#[must_use]
pub fn render_page(state: &AppState, locale: Locale) -> String {
    match state.route {
        Route::List => render_list(state, locale),
        Route::Add => render_add(locale),
        Route::Detail(_) => state
            .current_detail()
            .map_or_else(|| render_list(state, locale), |todo| render_detail(todo, locale)),
    }
}

/// The list page: filter row, add entry, then one row per visible todo
#[must_use]
pub fn render_list(state: &AppState, locale: Locale) -> String {
    let strings = locale.strings();
    let mut lines = vec![
        format!("== {} ==", strings.list_heading),
        filter_row(state.filter, locale),
        format!("[{}] (add / new)", strings.add_button),
        String::new(),
    ];

    let visible = state.visible();
    if visible.is_empty() {
        lines.push(strings.empty_list.to_string());
    } else {
        lines.extend(visible.into_iter().map(|todo| list_row(todo, locale)));
    }

    lines.join("\n")
}

/// The creation form
#[must_use]
pub fn render_add(locale: Locale) -> String {
    let strings = locale.strings();
    [
        format!("== {} ==", strings.add_heading),
        format!("{}:", strings.title_field),
        format!("{}:", strings.description_field),
        format!("{}:  ~ ", strings.period_field),
        String::new(),
        format!(
            "[{}] add [TITLE] [--desc TEXT] [--start YYYY-MM-DD] [--end YYYY-MM-DD]",
            strings.register_button
        ),
        format!("[{}] list", strings.back_button),
    ]
    .join("\n")
}

/// The detail page of one todo
#[must_use]
pub fn render_detail(todo: &TodoItem, locale: Locale) -> String {
    let strings = locale.strings();
    let mut lines = vec![
        format!("== {} #{} ==", strings.detail_heading, todo.id),
        format!("{}: {}", strings.title_field, todo.title),
        format!("{}:", strings.description_field),
    ];
    lines.extend(todo.description.lines().map(|line| format!("  {line}")));
    lines.extend([
        format!("{}: {} ~ {}", strings.period_field, todo.start_date, todo.end_date),
        format!("{}: {}", strings.status_field, todo.status.label(locale)),
        String::new(),
        format!(
            "[{}] edit {} [--title T] [--desc D] [--start DATE] [--end DATE]",
            strings.update_button, todo.id
        ),
        format!("[{}] delete {}", strings.delete_button, todo.id),
        format!("[{}] list", strings.back_button),
    ]);
    lines.join("\n")
}

/// The command reference
#[must_use]
pub fn render_help() -> String {
    [
        "list | ls                      show the list page",
        "filter <all|not-started|in-progress|completed|0-3>",
        "new                            show the creation form",
        "add [TITLE] [--desc D] [--start DATE] [--end DATE]",
        "show <id>                      show one todo",
        "edit <id> [--title T] [--desc D] [--start DATE] [--end DATE]",
        "delete <id>                    delete a todo",
        "advance <id>                   move a todo one status forward",
        "json                           print the filtered list as JSON",
        "help                           this text",
        "quit | exit                    leave",
    ]
    .join("\n")
}

fn filter_row(current: Filter, locale: Locale) -> String {
    Filter::OPTIONS
        .iter()
        .map(|option| {
            let mark = if *option == current { "(*)" } else { "( )" };
            format!("{mark} {}", option.label(locale))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn list_row(todo: &TodoItem, locale: Locale) -> String {
    format!(
        "#{:<3} {}  {} ~ {}  [{}]  [{}] show {}",
        todo.id,
        todo.title,
        todo.start_date,
        todo.end_date,
        todo.status.label(locale),
        locale.strings().detail_button,
        todo.id
    )
}
