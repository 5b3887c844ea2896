//! # Taskboard Testing
//!
//! Testing utilities and helpers for the Taskboard architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_testing::{ReducerTest, test_clock};
//!
//! ReducerTest::new(AppReducer::new())
//!     .with_env(AppEnvironment::new(Arc::new(test_clock()), settings))
//!     .given_state(AppState::default())
//!     .when_action(AppAction::AddTodo { draft: TodoDraft::default() })
//!     .then_state(|state| assert_eq!(state.todos.len(), 1))
//!     .run();
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use taskboard_core::environment::Clock;

/// Fluent Given-When-Then harness for reducers
pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, NaiveDate, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use taskboard_testing::mocks::FixedClock;
    /// use taskboard_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }

        /// Create a fixed clock at midnight UTC on the given date
        #[must_use]
        pub fn on_date(date: NaiveDate) -> Self {
            Self::new(date.and_time(chrono::NaiveTime::default()).and_utc())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2024-03-05 09:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2024-03-05T09:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
