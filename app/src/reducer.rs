//! Board reducer: turns commands into events and applies events to state.
//!
//! Commands on an id that is not in the store are ignored. They are logged
//! at debug level, produce no event and leave the revision alone.

use crate::app::{AppAction, AppState, Route};
use crate::types::Filter;
use std::sync::Arc;
use taskboard_core::effect::Effect;
use taskboard_core::environment::Clock;
use taskboard_core::reducer::Reducer;
use taskboard_core::{SmallVec, smallvec};

/// Dependencies of the board reducer
#[derive(Clone)]
pub struct AppEnvironment {
    /// Source of "today" for default start dates
    pub clock: Arc<dyn Clock>,
    /// Title given to todos created without one
    pub default_title: String,
}

impl AppEnvironment {
    /// Creates a new board environment
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, default_title: impl Into<String>) -> Self {
        Self {
            clock,
            default_title: default_title.into(),
        }
    }
}

impl std::fmt::Debug for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEnvironment")
            .field("default_title", &self.default_title)
            .finish_non_exhaustive()
    }
}

/// Reducer implementing the board's behavior
///
/// 1. Commands are checked against current state
/// 2. Accepted commands produce an event
/// 3. The event is applied to state
///
/// Submitting a form (add, edit, delete) returns to the list page through a
/// feedback `Navigate` action, the same way the forms' submit buttons do.
#[derive(Clone, Debug, Default)]
pub struct AppReducer;

impl AppReducer {
    /// Creates a new board reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an event to state
    ///
    /// Deterministic: replaying the same events over the same state gives
    /// the same result. Commands are ignored here.
    pub fn apply_event(state: &mut AppState, action: &AppAction) {
        match action {
            AppAction::TodoAdded { item } => {
                state.todos.put(item.clone());
            },
            AppAction::TodoEdited { item } => {
                state.todos.edit(item.clone());
            },
            AppAction::TodoDeleted { id } => {
                state.todos.delete(*id);
                if state.route == Route::Detail(*id) {
                    state.route = Route::List;
                    state.filter = Filter::All;
                }
            },
            AppAction::StatusAdvanced { id, .. } => {
                state.todos.advance_status(*id);
            },
            AppAction::FilterChanged { filter } => {
                state.filter = *filter;
            },
            AppAction::Navigated { route } => {
                // the list page opens unfiltered whenever it is entered anew
                if *route == Route::List && state.route != Route::List {
                    state.filter = Filter::All;
                }
                state.route = *route;
            },
            AppAction::AddTodo { .. }
            | AppAction::EditTodo { .. }
            | AppAction::DeleteTodo { .. }
            | AppAction::AdvanceStatus { .. }
            | AppAction::SetFilter { .. }
            | AppAction::Navigate { .. } => return,
        }

        state.bump_revision();
        tracing::debug!(
            event_type = action.event_type(),
            revision = state.revision(),
            "Applied event"
        );
    }

    fn back_to_list() -> Effect<AppAction> {
        Effect::send(AppAction::Navigate { route: Route::List })
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            AppAction::AddTodo { draft } => {
                let item = state
                    .todos
                    .prepare(draft, env.clock.today(), &env.default_title);
                tracing::info!(id = %item.id, title = %item.title, "Adding todo");

                Self::apply_event(state, &AppAction::TodoAdded { item });
                smallvec![Self::back_to_list()]
            },

            AppAction::EditTodo { item } => {
                if !state.todos.contains(item.id) {
                    tracing::debug!(id = %item.id, "EditTodo ignored: no such todo");
                    return smallvec![Effect::None];
                }

                Self::apply_event(state, &AppAction::TodoEdited { item });
                smallvec![Self::back_to_list()]
            },

            AppAction::DeleteTodo { id } => {
                if !state.todos.contains(id) {
                    tracing::debug!(%id, "DeleteTodo ignored: no such todo");
                    return smallvec![Effect::None];
                }

                Self::apply_event(state, &AppAction::TodoDeleted { id });
                smallvec![Self::back_to_list()]
            },

            AppAction::AdvanceStatus { id } => {
                let Some(current) = state.todos.get(id).map(|todo| todo.status) else {
                    tracing::debug!(%id, "AdvanceStatus ignored: no such todo");
                    return smallvec![Effect::None];
                };

                let status = current.next();
                if status == current {
                    tracing::debug!(%id, "AdvanceStatus ignored: already completed");
                    return smallvec![Effect::None];
                }

                Self::apply_event(state, &AppAction::StatusAdvanced { id, status });
                smallvec![Effect::None]
            },

            AppAction::SetFilter { filter } => {
                if state.filter != filter {
                    Self::apply_event(state, &AppAction::FilterChanged { filter });
                }
                smallvec![Effect::None]
            },

            AppAction::Navigate { route } => {
                let route = match route {
                    Route::Detail(id) if !state.todos.contains(id) => {
                        tracing::warn!(%id, "Detail page for unknown todo, showing the list");
                        Route::List
                    },
                    other => other,
                };

                if state.route != route {
                    Self::apply_event(state, &AppAction::Navigated { route });
                }
                smallvec![Effect::None]
            },

            // ========== Events ==========
            event @ (AppAction::TodoAdded { .. }
            | AppAction::TodoEdited { .. }
            | AppAction::TodoDeleted { .. }
            | AppAction::StatusAdvanced { .. }
            | AppAction::FilterChanged { .. }
            | AppAction::Navigated { .. }) => {
                Self::apply_event(state, &event);
                smallvec![Effect::None]
            },
        }
    }
}
