//! # todotxt-base
//!
//! Core library for parsing, editing and rendering todo.txt task lines.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! task       → Observable regex-based task model (independent of item)
//! item       → Item: token sequence owner, queries and mutations
//!   ↓
//! serializer → String and HTML rendering of token sequences
//!   ↓
//! parser     → Logos lexer, tokenizer
//!   ↓
//! base       → Primitives (Token, TokenType, errors, clocks)
//! ```
//!
//! ## Example
//!
//! ```
//! use todotxt::{FixedClock, Item};
//!
//! let mut item = Item::parse_string("(A) call mom +family @phone");
//! assert_eq!(item.priority(), Some("A"));
//! assert_eq!(item.projects(), vec!["family"]);
//!
//! item.complete_with(&FixedClock::new("2024-01-01"));
//! assert_eq!(item.to_string(), "x 2024-01-01 (A) call mom +family @phone");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → serializer → item; task)
// ============================================================================

/// Foundation types: Token, TokenType, GenericMetadata, errors, clocks
pub mod base;

/// Parser: Logos lexer, line tokenizer
pub mod parser;

/// Serializers: plain todo.txt and HTML output
pub mod serializer;

/// Item: token-backed task with queries and mutations
pub mod item;

/// Task: observable line model with publish/subscribe
pub mod task;

// Re-export commonly needed items
pub use base::{
    Clock, FixedClock, GenericMetadata, ItemError, SystemClock, TaskError, Token, TokenType,
};
pub use item::Item;
pub use parser::tokenize;
pub use serializer::{HtmlOptions, HtmlSerializer, Serializer, StringSerializer};
pub use task::{Task, TaskEvent, TaskField};
