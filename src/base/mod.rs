//! Foundation types for todo.txt handling.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TokenType`], [`Token`], [`GenericMetadata`] - Tagged line fragments
//! - [`ItemError`], [`TaskError`] - Construction failures
//! - [`Clock`], [`SystemClock`], [`FixedClock`] - Completion date sources
//!
//! This module has NO dependencies on other todotxt modules.

mod clock;
mod error;
mod token;

pub use clock::{Clock, DATE_FORMAT, FixedClock, SystemClock};
pub use error::{ItemError, TaskError};
pub use token::{GenericMetadata, Token, TokenType};
