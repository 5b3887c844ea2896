//! Configuration management for the board.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Command-line flags are applied on top with [`Config::with_overrides`].

use crate::locale::{Locale, UnknownLocale};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `TASKBOARD_LOCALE` or `--locale` named an unsupported locale
    #[error(transparent)]
    UnknownLocale(#[from] UnknownLocale),
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Display language
    pub locale: Locale,
    /// Title for todos created without one; the locale's placeholder if unset
    pub default_title: Option<String>,
    /// Tracing filter directives (trace, debug, info, warn, error)
    pub log_level: String,
    /// How long shutdown waits for in-flight effects, in milliseconds
    pub shutdown_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_title: None,
            log_level: "taskboard=info".to_string(),
            shutdown_timeout_ms: 1000,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLocale`] if `TASKBOARD_LOCALE` is set to
    /// an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLocale`] if `TASKBOARD_LOCALE` is set to
    /// an unsupported value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let locale = match lookup("TASKBOARD_LOCALE") {
            Some(code) if !code.trim().is_empty() => code.parse()?,
            _ => defaults.locale,
        };

        Ok(Self {
            locale,
            default_title: lookup("TASKBOARD_DEFAULT_TITLE").filter(|title| !title.is_empty()),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            shutdown_timeout_ms: lookup("TASKBOARD_SHUTDOWN_TIMEOUT_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.shutdown_timeout_ms),
        })
    }

    /// Apply command-line flags, which win over the environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLocale`] if `locale` is unsupported.
    pub fn with_overrides(
        mut self,
        locale: Option<&str>,
        default_title: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(code) = locale {
            self.locale = code.parse()?;
        }
        if let Some(title) = default_title.filter(|title| !title.is_empty()) {
            self.default_title = Some(title);
        }
        Ok(self)
    }

    /// Title for todos created without one
    #[must_use]
    pub fn default_title(&self) -> &str {
        self.default_title
            .as_deref()
            .unwrap_or_else(|| self.locale.placeholder_title())
    }

    /// Shutdown timeout as a [`Duration`]
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}
