//! REPL input: tokenizing a line and parsing it into a command.

use crate::todo_store::DATE_FORMAT;
use crate::types::{Filter, TodoId};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use thiserror::Error;

/// Problems with a line the user typed
///
/// None of these are fatal; the binding shows them and waits for the next
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A quoted argument was never closed
    #[error("unterminated quote")]
    UnterminatedQuote,

    /// A date argument is not a real `YYYY-MM-DD` date
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// clap rejected the command line
    #[error("{0}")]
    Usage(String),
}

/// One REPL line
#[derive(Debug, Parser)]
#[command(
    name = "taskboard",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ReplLine {
    /// The command to run
    #[command(subcommand)]
    pub command: ReplCommand,
}

/// Commands accepted at the prompt
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ReplCommand {
    /// Show the list page
    #[command(alias = "ls")]
    List,

    /// Change the list filter (all, not-started, in-progress, completed or 0-3)
    Filter {
        /// Filter selector
        selector: Filter,
    },

    /// Show the blank creation form
    New,

    /// Create a todo
    Add {
        /// Title words; empty means the default title
        title: Vec<String>,
        /// Description
        #[arg(long, short = 'd', default_value = "")]
        desc: String,
        /// Start date (YYYY-MM-DD); empty means today
        #[arg(long, short = 's', default_value = "")]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long, short = 'e', default_value = "")]
        end: String,
    },

    /// Show one todo with its description
    Show {
        /// Todo id
        id: TodoId,
    },

    /// Change fields of a todo; unspecified fields keep their value
    Edit {
        /// Todo id
        id: TodoId,
        /// New title
        #[arg(long, short = 't')]
        title: Option<String>,
        /// New description
        #[arg(long, short = 'd')]
        desc: Option<String>,
        /// New start date (YYYY-MM-DD)
        #[arg(long, short = 's')]
        start: Option<String>,
        /// New end date (YYYY-MM-DD)
        #[arg(long, short = 'e')]
        end: Option<String>,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// Todo id
        id: TodoId,
    },

    /// Move a todo one status forward
    Advance {
        /// Todo id
        id: TodoId,
    },

    /// Print the filtered list as JSON
    Json,

    /// List the commands
    Help,

    /// Leave the board
    #[command(alias = "exit")]
    Quit,
}

/// Parse one line into a command
///
/// Returns `Ok(None)` for a blank line. Date arguments are checked here so
/// the store only ever sees well-formed dates or empty strings.
///
/// # Errors
///
/// Returns an [`InputError`] describing what is wrong with the line.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>, InputError> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let parsed =
        ReplLine::try_parse_from(tokens).map_err(|err| InputError::Usage(err.to_string()))?;

    let command = match parsed.command {
        ReplCommand::Add {
            title,
            desc,
            start,
            end,
        } => ReplCommand::Add {
            title,
            desc,
            start: parse_date(&start)?,
            end: parse_date(&end)?,
        },
        ReplCommand::Edit {
            id,
            title,
            desc,
            start,
            end,
        } => ReplCommand::Edit {
            id,
            title,
            desc,
            start: start.as_deref().map(parse_date).transpose()?,
            end: end.as_deref().map(parse_date).transpose()?,
        },
        other => other,
    };

    Ok(Some(command))
}

/// Check a date argument and normalize it to zero-padded `YYYY-MM-DD`
///
/// An empty argument stays empty.
///
/// # Errors
///
/// Returns [`InputError::InvalidDate`] if `raw` is not a calendar date with
/// an unsigned year in 0..=9999.
pub fn parse_date(raw: &str) -> Result<String, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }
    let invalid = || InputError::InvalidDate(raw.to_string());

    // chrono's %Y accepts a leading sign
    if !raw.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())?;
    if !(0..=9999).contains(&date.year()) {
        return Err(invalid());
    }
    Ok(date.format(DATE_FORMAT).to_string())
}

/// Split a line on whitespace, keeping quoted runs together
///
/// Single and double quotes both group; a backslash escapes the next
/// character outside single quotes. `""` yields an empty argument.
///
/// # Errors
///
/// Returns [`InputError::UnterminatedQuote`] if a quote is left open.
pub fn tokenize(line: &str) -> Result<Vec<String>, InputError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(open), c) if c == open => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                in_token = true;
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_token = true;
            },
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            },
            (None, c) => {
                current.push(c);
                in_token = true;
            },
        }
    }

    if quote.is_some() {
        return Err(InputError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
