//! Display languages and the user-facing strings for each.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Returned when a locale code is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale '{0}' (expected 'ja' or 'en')")]
pub struct UnknownLocale(pub String);

/// Display language of the board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese, the default
    #[default]
    Ja,
    /// English
    En,
}

impl Locale {
    /// The string table for this locale
    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Ja => &JA,
            Self::En => &EN,
        }
    }

    /// Title given to a todo created without one
    #[must_use]
    pub fn placeholder_title(self) -> &'static str {
        self.strings().placeholder_title
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "ja-jp" | "japanese" => Ok(Self::Ja),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ja => write!(f, "ja"),
            Self::En => write!(f, "en"),
        }
    }
}

/// User-facing strings for one locale
#[derive(Debug)]
pub struct Strings {
    /// Default title for an untitled todo
    pub placeholder_title: &'static str,
    /// Status labels, indexed by status value
    pub status: [&'static str; 3],
    /// Label of the "all" filter option
    pub filter_all: &'static str,
    /// Heading of the list page
    pub list_heading: &'static str,
    /// Heading of the add page
    pub add_heading: &'static str,
    /// Heading of the detail page
    pub detail_heading: &'static str,
    /// Shown when the filtered list is empty
    pub empty_list: &'static str,
    /// Label of the add entry on the list page
    pub add_button: &'static str,
    /// Label of the per-row detail action
    pub detail_button: &'static str,
    /// Label of the submit action on the add page
    pub register_button: &'static str,
    /// Label of the update action on the detail page
    pub update_button: &'static str,
    /// Label of the delete action on the detail page
    pub delete_button: &'static str,
    /// Label of the header link back to the list
    pub back_button: &'static str,
    /// Field label: title
    pub title_field: &'static str,
    /// Field label: description
    pub description_field: &'static str,
    /// Field label: date range
    pub period_field: &'static str,
    /// Field label: status
    pub status_field: &'static str,
}

static JA: Strings = Strings {
    placeholder_title: "未設定",
    status: ["未着手", "作業中", "完了"],
    filter_all: "すべて",
    list_heading: "TOP (予定一覧表示)",
    add_heading: "新規登録",
    detail_heading: "予定詳細",
    empty_list: "登録されている予定はありません。",
    add_button: "新規登録",
    detail_button: "詳細",
    register_button: "登録",
    update_button: "更新",
    delete_button: "削除",
    back_button: "一覧へ",
    title_field: "タイトル",
    description_field: "内容",
    period_field: "期間",
    status_field: "ステータス",
};

static EN: Strings = Strings {
    placeholder_title: "Unset",
    status: ["Not started", "In progress", "Completed"],
    filter_all: "All",
    list_heading: "TOP (Schedule list)",
    add_heading: "New entry",
    detail_heading: "Schedule detail",
    empty_list: "No schedules registered.",
    add_button: "New entry",
    detail_button: "Detail",
    register_button: "Register",
    update_button: "Update",
    delete_button: "Delete",
    back_button: "Back to list",
    title_field: "Title",
    description_field: "Description",
    period_field: "Period",
    status_field: "Status",
};
