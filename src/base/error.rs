//! Error types for item and task construction.

use thiserror::Error;

/// Errors raised when building an [`Item`](crate::item::Item).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    /// The token sequence was absent or otherwise unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ItemError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Errors raised by the observable [`Task`](crate::task::Task) model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Priorities are a single uppercase ASCII letter.
    #[error("Invalid priority '{0}': expected A-Z")]
    InvalidPriority(char),

    /// Dates must look like `YYYY-MM-DD`.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
