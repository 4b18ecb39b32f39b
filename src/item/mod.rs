//! Token-backed task items
//!
//! An [`Item`] owns one ordered token sequence and answers every question
//! about the task by scanning it. Mutations edit the sequence in place; raw
//! text is only parsed by the constructors ([`Item::parse_string`],
//! [`FromStr`]).
//!
//! ## Read semantics
//!
//! - Single-valued fields (priority, creation date, completion date) read the
//!   first matching token.
//! - Repeating fields (projects, contexts, metadata) return every match in
//!   sequence order.
//! - An item is completed when it holds exactly one completion token.
//! - An empty sequence is a removed item.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;
use tracing::debug;

use crate::base::{Clock, GenericMetadata, ItemError, SystemClock, Token, TokenType};
use crate::parser::tokenize;
use crate::serializer::{HtmlSerializer, Serializer, StringSerializer};

/// One task, backed by an ordered token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    tokens: Vec<Token>,
    /// External ordering handle for list views. Never read by parsing or
    /// serialization.
    pub index: usize,
}

impl Item {
    /// Wrap a token sequence. An empty sequence is a valid, removed item.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Tokenize `text` and wrap the result.
    pub fn parse_string(text: &str) -> Self {
        Self::new(tokenize(text))
    }

    /// Read-only view of the token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Take ownership of the token sequence.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn removed(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Clear the token sequence. Removing twice is a no-op.
    pub fn remove(&mut self) {
        debug!(index = self.index, "removing item");
        self.tokens.clear();
    }

    // ========================================================================
    // Completion
    // ========================================================================

    /// Toggle completion, stamping today's local date when completing.
    pub fn complete(&mut self) {
        self.complete_with(&SystemClock);
    }

    /// Toggle completion using `clock` for the completion date.
    ///
    /// Completing inserts a completion token at the front. Un-completing
    /// removes every completion token. An item holding several completion
    /// tokens reads as not completed, so toggling it only adds another one.
    pub fn complete_with(&mut self, clock: &impl Clock) {
        if self.completed() {
            self.tokens.retain(|t| !t.is(TokenType::Completed));
            debug!(index = self.index, "item marked not completed");
        } else {
            let date = clock.today();
            debug!(index = self.index, date = %date, "item marked completed");
            self.tokens.insert(0, Token::new(TokenType::Completed, date));
        }
    }

    /// True when exactly one completion token is present.
    pub fn completed(&self) -> bool {
        self.find(TokenType::Completed).count() == 1
    }

    pub fn completed_date(&self) -> Option<&str> {
        self.first_text(TokenType::Completed)
    }

    // ========================================================================
    // Header fields
    // ========================================================================

    pub fn priority(&self) -> Option<&str> {
        self.first_text(TokenType::Priority)
    }

    pub fn create_date(&self) -> Option<&str> {
        self.first_text(TokenType::CreateDate)
    }

    /// Set the creation date.
    ///
    /// Overwrites the first creation date token in place. Without one, a new
    /// token goes right after the completion token of a completed item, or
    /// at the front otherwise.
    pub fn set_create_date(&mut self, date: impl Into<SmolStr>) {
        let date = date.into();
        debug!(index = self.index, date = %date, "setting create date");

        if let Some(token) = self.tokens.iter_mut().find(|t| t.is(TokenType::CreateDate)) {
            token.set_text(date);
            return;
        }

        let at = if self.completed() { 1 } else { 0 };
        self.tokens.insert(at, Token::new(TokenType::CreateDate, date));
    }

    // ========================================================================
    // Markers
    // ========================================================================

    pub fn projects(&self) -> Vec<&str> {
        self.find(TokenType::Project).map(Token::text).collect()
    }

    pub fn contexts(&self) -> Vec<&str> {
        self.find(TokenType::Context).map(Token::text).collect()
    }

    pub fn has_project(&self, project: &str) -> bool {
        self.find(TokenType::Project).any(|t| t.text() == project)
    }

    pub fn has_context(&self, context: &str) -> bool {
        self.find(TokenType::Context).any(|t| t.text() == context)
    }

    /// Every `key:value` marker, in sequence order.
    pub fn metadata(&self) -> Vec<GenericMetadata> {
        self.tokens.iter().filter_map(Token::as_metadata).collect()
    }

    /// Value of the first metadata marker keyed `id`.
    pub fn metadata_value(&self, id: &str) -> Option<&str> {
        self.find(TokenType::Metadata)
            .find(|t| t.id() == Some(id))
            .map(Token::text)
    }

    // ========================================================================
    // Output
    // ========================================================================

    pub fn to_html(&self) -> String {
        self.serialize_with(&HtmlSerializer::new())
    }

    /// Render with any serializer.
    pub fn serialize_with(&self, serializer: &dyn Serializer) -> String {
        serializer.serialize(&self.tokens)
    }

    fn find(&self, kind: TokenType) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.is(kind))
    }

    fn first_text(&self, kind: TokenType) -> Option<&str> {
        self.find(kind).next().map(Token::text)
    }
}

impl TryFrom<Option<Vec<Token>>> for Item {
    type Error = ItemError;

    /// Build from a possibly absent sequence; absence is an error.
    fn try_from(tokens: Option<Vec<Token>>) -> Result<Self, Self::Error> {
        tokens
            .map(Item::new)
            .ok_or_else(|| ItemError::invalid_argument("No tokens given"))
    }
}

impl From<Vec<Token>> for Item {
    fn from(tokens: Vec<Token>) -> Self {
        Item::new(tokens)
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Item::parse_string(text)
    }
}

impl FromStr for Item {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Item::parse_string(s))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&StringSerializer.serialize(&self.tokens))
    }
}
