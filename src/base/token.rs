//! Tagged fragments of a task line.

use smol_str::SmolStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The semantic tag carried by every [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TokenType {
    /// Unflagged content
    #[default]
    Text,
    /// `x` completion marker, text is the completion date (may be empty)
    Completed,
    CreateDate,
    /// `(A)` priority, text is the bare letter
    Priority,
    /// `+project`, text excludes the `+`
    Project,
    /// `@context`, text excludes the `@`
    Context,
    /// `key:value`, text is the value
    Metadata,
}

impl TokenType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Completed => "completed",
            Self::CreateDate => "createDate",
            Self::Priority => "priority",
            Self::Project => "project",
            Self::Context => "context",
            Self::Metadata => "metadata",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token of a parsed task line.
///
/// Tokens carry no position: their index in the owning sequence is the only
/// layout information, and serializers rebuild the line from that order.
/// Metadata tokens additionally carry a key, see [`GenericMetadata`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    kind: TokenType,
    text: SmolStr,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    id: Option<SmolStr>,
}

impl Token {
    /// Create a token of the given type.
    ///
    /// A [`TokenType::Metadata`] token is keyed by splitting `text` at its
    /// first `:`, so `Token::new(TokenType::Metadata, "due:2020-01-01")`
    /// equals `Token::metadata("due", "2020-01-01")`. Metadata text without a
    /// key stays unkeyed: it renders as its bare value and is not reported as
    /// a metadata entry.
    pub fn new(kind: TokenType, text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        if kind == TokenType::Metadata {
            if let Some((id, value)) = text.split_once(':').filter(|(id, _)| !id.is_empty()) {
                return Self::metadata(id, value);
            }
        }
        Self {
            kind,
            text,
            id: None,
        }
    }

    pub fn text_token(text: impl Into<SmolStr>) -> Self {
        Self::new(TokenType::Text, text)
    }

    /// Create a `key:value` metadata token.
    pub fn metadata(id: impl Into<SmolStr>, text: impl Into<SmolStr>) -> Self {
        Self {
            kind: TokenType::Metadata,
            text: text.into(),
            id: Some(id.into()),
        }
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the token text. The type is fixed at construction.
    pub fn set_text(&mut self, text: impl Into<SmolStr>) {
        self.text = text.into();
    }

    /// Metadata key, `None` for every other token type.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is(&self, kind: TokenType) -> bool {
        self.kind == kind
    }

    /// View this token as a metadata entry, if it is a keyed one.
    pub fn as_metadata(&self) -> Option<GenericMetadata> {
        if self.kind != TokenType::Metadata {
            return None;
        }
        Some(GenericMetadata {
            id: self.id.clone()?,
            text: self.text.clone(),
        })
    }
}

/// A `key:value` marker lifted out of a metadata [`Token`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenericMetadata {
    id: SmolStr,
    text: SmolStr,
}

impl GenericMetadata {
    pub fn new(id: impl Into<SmolStr>, text: impl Into<SmolStr>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// The metadata key
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The metadata value
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<GenericMetadata> for Token {
    fn from(meta: GenericMetadata) -> Self {
        Token::metadata(meta.id, meta.text)
    }
}
