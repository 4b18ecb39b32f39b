//! Parser for todo.txt task lines
//!
//! ## Architecture
//!
//! ```text
//! Raw line
//!     ↓
//! Lexer (logos) → Lexemes (word, date, priority, +project, @context, key:value)
//!     ↓
//! Tokenizer → header/body classification → Vec<Token>
//! ```
//!
//! The tokenizer is a pure function: no state survives between calls and no
//! input makes it fail.

mod date;
mod lexer;
mod tokenizer;

pub use date::is_date;
pub use lexer::{Lexeme, LexemeKind, Lexer, lex};
pub use tokenizer::{COMPLETION_MARKER, tokenize};
