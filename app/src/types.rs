//! Domain types for the schedule board.
//!
//! A todo item is a schedulable task with a title, free-form description, a
//! `YYYY-MM-DD` date range and a three-step status. Ids are plain integers
//! handed out by the [`TodoStore`](crate::todo_store::TodoStore).

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Returned when a status value is outside 0..=2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown status value {0} (expected 0, 1 or 2)")]
pub struct UnknownStatus(pub u8);

/// Returned when a filter selector cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}' (expected all, not-started, in-progress, completed or 0-3)")]
pub struct UnknownFilter(pub String);

/// Identifier of a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// Lifecycle stage of a todo item
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Status {
    /// Not started yet
    #[default]
    NotStarted = 0,
    /// Being worked on
    InProgress = 1,
    /// Done
    Completed = 2,
}

impl Status {
    /// All statuses in progression order
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// The following status, saturating at `Completed`
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress | Self::Completed => Self::Completed,
        }
    }

    /// Numeric value (0, 1 or 2)
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Display label in the given locale
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        locale.strings().status[usize::from(self.value())]
    }
}

impl TryFrom<u8> for Status {
    type Error = UnknownStatus;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotStarted),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Completed),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status.value()
    }
}

/// Input for creating a todo: every field except the id
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    /// Initial status
    pub status: Status,
    /// Title, may be empty until normalized
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Start date as `YYYY-MM-DD`, may be empty until normalized
    pub start_date: String,
    /// End date as `YYYY-MM-DD`, may be empty
    pub end_date: String,
}

impl TodoDraft {
    /// Creates a not-started draft with just a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the start date
    #[must_use]
    pub fn starting(mut self, date: impl Into<String>) -> Self {
        self.start_date = date.into();
        self
    }

    /// Sets the end date
    #[must_use]
    pub fn ending(mut self, date: impl Into<String>) -> Self {
        self.end_date = date.into();
        self
    }

    /// Sets the description
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// A stored todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Identifier assigned by the store
    pub id: TodoId,
    /// Current status
    pub status: Status,
    /// Title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Start date as `YYYY-MM-DD`
    pub start_date: String,
    /// End date as `YYYY-MM-DD`, may be empty
    pub end_date: String,
}

impl TodoItem {
    /// Builds a stored item from a draft and its assigned id
    #[must_use]
    pub fn from_draft(id: TodoId, draft: TodoDraft) -> Self {
        let TodoDraft {
            status,
            title,
            description,
            start_date,
            end_date,
        } = draft;

        Self {
            id,
            status,
            title,
            description,
            start_date,
            end_date,
        }
    }
}

/// Which statuses the list page shows
///
/// The selector wire values are 0, 1 and 2 for a single status and 3 for
/// every status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Filter {
    /// Only items with this status
    Only(Status),
    /// Every item
    #[default]
    All,
}

impl Filter {
    /// Selector value of [`Filter::All`]
    pub const ALL_SELECTOR: u8 = 3;

    /// Options in the order the list page offers them
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Only(Status::NotStarted),
        Self::Only(Status::InProgress),
        Self::Only(Status::Completed),
    ];

    /// Whether an item with `status` passes this filter
    #[must_use]
    pub fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// Selector wire value
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::All => Self::ALL_SELECTOR,
            Self::Only(status) => status.value(),
        }
    }

    /// Display label in the given locale
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Self::All => locale.strings().filter_all,
            Self::Only(status) => status.label(locale),
        }
    }
}

impl TryFrom<u8> for Filter {
    type Error = UnknownFilter;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value == Self::ALL_SELECTOR {
            return Ok(Self::All);
        }
        Status::try_from(value)
            .map(Self::Only)
            .map_err(|_| UnknownFilter(value.to_string()))
    }
}

impl From<Filter> for u8 {
    fn from(filter: Filter) -> Self {
        filter.selector()
    }
}

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Ok(value) = key.parse::<u8>() {
            return Self::try_from(value).map_err(|_| UnknownFilter(s.to_string()));
        }
        match key.as_str() {
            "all" => Ok(Self::All),
            "not-started" | "not-yet" | "todo" => Ok(Self::Only(Status::NotStarted)),
            "in-progress" | "working" | "doing" => Ok(Self::Only(Status::InProgress)),
            "completed" | "done" => Ok(Self::Only(Status::Completed)),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}
