//! HTML rendering options

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for [`HtmlSerializer`](super::HtmlSerializer)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HtmlOptions {
    /// Prefix of every span class, spans get `{prefix}-{token type}`
    pub class_prefix: String,
    /// Markup placed between consecutive spans
    pub separator: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            class_prefix: "todo".to_string(),
            separator: " ".to_string(),
        }
    }
}

impl HtmlOptions {
    /// Class attribute value for a token type name
    pub fn class_for(&self, kind: &str) -> String {
        if self.class_prefix.is_empty() {
            kind.to_string()
        } else {
            format!("{}-{}", self.class_prefix, kind)
        }
    }
}
