//! Connects REPL commands to the runtime `Store` and renders the result.

use crate::app::{AppAction, AppState, Route};
use crate::locale::Locale;
use crate::query;
use crate::reducer::{AppEnvironment, AppReducer};
use crate::types::TodoDraft;
use crate::view::input::{self, InputError, ReplCommand};
use crate::view::render;
use taskboard_runtime::{Store, StoreError};
use thiserror::Error;

/// The store type the board runs on
pub type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

/// Failures that end the session
#[derive(Debug, Error)]
pub enum BindingError {
    /// The store refused the action
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The JSON export could not be produced
    #[error("failed to serialize todos: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the REPL should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and read the next line
    Continue(String),
    /// Leave the loop
    Quit,
}

/// Terminal front end over an [`AppStore`]
pub struct ViewBinding {
    store: AppStore,
    locale: Locale,
}

impl ViewBinding {
    /// Creates a binding over `store`, rendering in `locale`
    #[must_use]
    pub const fn new(store: AppStore, locale: Locale) -> Self {
        Self { store, locale }
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &AppStore {
        &self.store
    }

    /// Render the current page
    pub async fn render(&self) -> String {
        let locale = self.locale;
        self.store
            .state(|state| render::render_page(state, locale))
            .await
    }

    /// Handle one line of input
    ///
    /// Input mistakes are reported in the returned text, never as errors.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError`] if the store is shutting down or the JSON
    /// export fails.
    pub async fn handle_line(&self, line: &str) -> Result<Outcome, BindingError> {
        match input::parse_line(line) {
            Ok(Some(command)) => self.execute(command).await,
            Ok(None) => Ok(Outcome::Continue(self.render().await)),
            Err(err) => Ok(Outcome::Continue(Self::input_error(&err))),
        }
    }

    /// Run a parsed command
    ///
    /// # Errors
    ///
    /// Returns [`BindingError`] if the store is shutting down or the JSON
    /// export fails.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn execute(&self, command: ReplCommand) -> Result<Outcome, BindingError> {
        let action = match command {
            ReplCommand::Quit => return Ok(Outcome::Quit),
            ReplCommand::Help => return Ok(Outcome::Continue(render::render_help())),
            ReplCommand::Json => return self.export_json().await.map(Outcome::Continue),
            ReplCommand::List => AppAction::Navigate { route: Route::List },
            ReplCommand::New => AppAction::Navigate { route: Route::Add },
            ReplCommand::Show { id } => AppAction::Navigate {
                route: Route::Detail(id),
            },
            ReplCommand::Filter { selector } => AppAction::SetFilter { filter: selector },
            ReplCommand::Advance { id } => AppAction::AdvanceStatus { id },
            ReplCommand::Delete { id } => AppAction::DeleteTodo { id },
            ReplCommand::Add {
                title,
                desc,
                start,
                end,
            } => AppAction::AddTodo {
                draft: TodoDraft::titled(title.join(" "))
                    .described(desc)
                    .starting(start)
                    .ending(end),
            },
            ReplCommand::Edit {
                id,
                title,
                desc,
                start,
                end,
            } => {
                let current = self.store.state(|state| state.todos.get(id).cloned()).await;
                match current {
                    Some(mut item) => {
                        if let Some(title) = title {
                            item.title = title;
                        }
                        if let Some(desc) = desc {
                            item.description = desc;
                        }
                        if let Some(start) = start {
                            item.start_date = start;
                        }
                        if let Some(end) = end {
                            item.end_date = end;
                        }
                        AppAction::EditTodo { item }
                    },
                    // lands on the list, like opening a stale detail link
                    None => AppAction::Navigate {
                        route: Route::Detail(id),
                    },
                }
            },
        };

        self.dispatch(action).await?;
        Ok(Outcome::Continue(self.render().await))
    }

    /// Send an action and wait until its effects have settled
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] once shutdown has begun.
    pub async fn dispatch(&self, action: AppAction) -> Result<(), StoreError> {
        let mut handle = self.store.send(action).await?;
        handle.wait().await;
        Ok(())
    }

    async fn export_json(&self) -> Result<String, BindingError> {
        let visible = self
            .store
            .state(|state| query::filter(state.todos.list(), state.filter))
            .await;
        Ok(serde_json::to_string_pretty(&visible)?)
    }

    fn input_error(err: &InputError) -> String {
        tracing::debug!(error = %err, "Rejected input");
        match err {
            InputError::Usage(message) => message.trim_end().to_string(),
            other => format!("error: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Status, TodoId};
    use std::sync::Arc;
    use taskboard_testing::test_clock;

    fn binding() -> ViewBinding {
        let env = AppEnvironment::new(Arc::new(test_clock()), "未設定");
        ViewBinding::new(
            Store::new(AppState::default(), AppReducer::new(), env),
            Locale::Ja,
        )
    }

    async fn line(binding: &ViewBinding, input: &str) -> String {
        match binding.handle_line(input).await {
            Ok(Outcome::Continue(text)) => text,
            other => panic!("unexpected outcome for {input:?}: {other:?}"),
        }
    }

    #[tokio::test]
    async fn add_then_list() {
        let binding = binding();
        let page = line(&binding, "add").await;

        assert!(page.contains("#1"));
        assert!(page.contains("未設定  2024-03-05 ~ "));
        assert!(page.contains("[未着手]"));
        let route = binding.store().state(|s| s.route).await;
        assert_eq!(route, Route::List);
    }

    #[tokio::test]
    async fn new_then_add_returns_to_list() {
        let binding = binding();
        assert!(line(&binding, "new").await.contains("== 新規登録 =="));

        let page = line(&binding, "add 'write report' --start 2024-04-01").await;
        assert!(page.starts_with("== TOP (予定一覧表示) =="));
        assert!(page.contains("write report  2024-04-01"));
    }

    #[tokio::test]
    async fn edit_applies_only_given_fields() {
        let binding = binding();
        line(&binding, "add first -d notes --start 2024-01-01").await;
        line(&binding, "edit 1 --title renamed").await;

        let todo = binding
            .store()
            .state(|s| s.todos.get(TodoId::new(1)).cloned())
            .await;
        let todo = todo.unwrap_or_else(|| panic!("todo 1 missing"));
        assert_eq!(todo.title, "renamed");
        assert_eq!(todo.description, "notes");
        assert_eq!(todo.start_date, "2024-01-01");
    }

    #[tokio::test]
    async fn show_missing_todo_falls_back_to_list() {
        let binding = binding();
        let page = line(&binding, "show 5").await;
        assert!(page.contains("登録されている予定はありません。"));
        assert_eq!(binding.store().state(|s| s.route).await, Route::List);
    }

    #[tokio::test]
    async fn advance_and_filter() {
        let binding = binding();
        line(&binding, "add a").await;
        line(&binding, "add b").await;
        line(&binding, "advance 2").await;
        let page = line(&binding, "filter in-progress").await;

        assert!(page.contains("#2"));
        assert!(!page.contains("#1"));
        assert_eq!(
            binding.store().state(|s| s.todos.count_by_status(Status::InProgress)).await,
            1
        );
    }

    #[tokio::test]
    async fn list_reopens_unfiltered_after_detail() {
        let binding = binding();
        line(&binding, "add a").await;
        line(&binding, "add b").await;
        line(&binding, "advance 2").await;
        line(&binding, "filter in-progress").await;
        line(&binding, "show 2").await;
        let page = line(&binding, "list").await;

        assert!(page.contains("(*) すべて"));
        assert!(page.contains("[詳細] show 1"));
        assert!(page.contains("[詳細] show 2"));
    }

    #[tokio::test]
    async fn json_exports_filtered_view() {
        let binding = binding();
        line(&binding, "add a --start 2024-02-01").await;
        line(&binding, "add b --start 2024-01-01").await;
        let json = line(&binding, "json").await;

        let value: serde_json::Value = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(value[0]["id"], 2);
        assert_eq!(value[1]["id"], 1);
        assert_eq!(value[0]["startDate"], "2024-01-01");
    }

    #[tokio::test]
    async fn input_errors_are_reported_not_fatal() {
        let binding = binding();
        assert_eq!(
            line(&binding, "add x --start 2024-13-01").await,
            "error: invalid date '2024-13-01' (expected YYYY-MM-DD)"
        );
        assert_eq!(line(&binding, "add \"open").await, "error: unterminated quote");
        assert!(!line(&binding, "bogus").await.is_empty());
    }

    #[tokio::test]
    async fn quit_and_shutdown() {
        let binding = binding();
        assert_eq!(binding.handle_line("quit").await.ok(), Some(Outcome::Quit));

        binding
            .store()
            .shutdown(std::time::Duration::from_millis(100))
            .await
            .unwrap_or_else(|err| panic!("shutdown failed: {err}"));
        assert!(matches!(
            binding.handle_line("list").await,
            Err(BindingError::Store(StoreError::ShutdownInProgress))
        ));
    }
}
