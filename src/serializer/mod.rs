//! Serializers: token sequence → output text
//!
//! Both serializers walk the sequence in order and render one fragment per
//! token. They differ only in how a fragment is dressed:
//!
//! - [`StringSerializer`] re-adds the todo.txt punctuation (`x `, `(A)`, `+`,
//!   `@`, `key:`) and produces a line the tokenizer reads back identically.
//! - [`HtmlSerializer`] wraps each fragment in a classed `<span>` for display.
//!   There is no parser for its output.

mod html;
mod options;
mod string;

pub use html::HtmlSerializer;
pub use options::HtmlOptions;
pub use string::{StringSerializer, surface};

use crate::base::Token;

/// Render a token sequence to text.
pub trait Serializer {
    /// Serialize `tokens` in sequence order.
    fn serialize(&self, tokens: &[Token]) -> String;
}
