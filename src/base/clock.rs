//! Date sources for completion stamps.

use chrono::Local;

/// Format used for every date written into a task line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Supplies "today" when an item or task is marked complete.
pub trait Clock {
    /// Current date as `YYYY-MM-DD`.
    fn today(&self) -> String;
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        Local::now().date_naive().format(DATE_FORMAT).to_string()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    /// The constant stamp older releases wrote on completion.
    pub fn legacy() -> Self {
        Self::new("2015-01-01")
    }
}

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.clone()
    }
}
