//! Display markup output.

use std::fmt::Write;

use quick_xml::escape::escape;

use super::{HtmlOptions, Serializer, surface};
use crate::base::Token;

/// Renders tokens as a run of classed `<span>` elements.
///
/// Each span holds the same text the [`StringSerializer`](super::StringSerializer)
/// would emit for the token, escaped. Keyed metadata spans also carry the key
/// in a `data-key` attribute.
#[derive(Debug, Clone, Default)]
pub struct HtmlSerializer {
    options: HtmlOptions,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    fn write_span(&self, out: &mut String, token: &Token, fragment: &str) {
        let class = self.options.class_for(token.kind().as_str());
        let _ = write!(out, "<span class=\"{}\"", escape(class.as_str()));
        if let Some(key) = token.id() {
            let _ = write!(out, " data-key=\"{}\"", escape(key));
        }
        let _ = write!(out, ">{}</span>", escape(fragment));
    }
}

impl Serializer for HtmlSerializer {
    fn serialize(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        let mut first = true;
        for token in tokens {
            let fragment = surface(token);
            if fragment.is_empty() {
                continue;
            }
            if !first {
                out.push_str(&self.options.separator);
            }
            first = false;
            self.write_span(&mut out, token, &fragment);
        }
        out
    }
}
