//! Plain todo.txt line output.

use std::borrow::Cow;

use super::Serializer;
use crate::base::{Token, TokenType};
use crate::parser::COMPLETION_MARKER;

/// Rebuilds a todo.txt line from tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSerializer;

impl Serializer for StringSerializer {
    fn serialize(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        for token in tokens {
            let fragment = surface(token);
            if fragment.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&fragment);
        }
        out
    }
}

/// The text a token occupies in a todo.txt line, punctuation included.
pub fn surface(token: &Token) -> Cow<'_, str> {
    let text = token.text();
    match token.kind() {
        TokenType::Text | TokenType::CreateDate => Cow::Borrowed(text),
        TokenType::Completed if text.is_empty() => Cow::Borrowed(COMPLETION_MARKER),
        TokenType::Completed => Cow::Owned(format!("{COMPLETION_MARKER} {text}")),
        TokenType::Priority => Cow::Owned(format!("({text})")),
        TokenType::Project => Cow::Owned(format!("+{text}")),
        TokenType::Context => Cow::Owned(format!("@{text}")),
        TokenType::Metadata => match token.id() {
            Some(id) => Cow::Owned(format!("{id}:{text}")),
            None => Cow::Borrowed(text),
        },
    }
}
