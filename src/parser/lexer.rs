//! Logos-based lexer for todo.txt lines
//!
//! Splits a line into lexemes. Classification of header elements (completion,
//! priority, creation date) depends on position and is left to the tokenizer.

use logos::Logos;

/// Lexical class of a slice of the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    Whitespace,
    /// `YYYY?MM?DD` shape, range checked later
    Date,
    /// `(A)` through `(Z)`
    Priority,
    Project,
    Context,
    /// `key:value`
    KeyValue,
    Word,
}

/// A lexeme with its kind and source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a str,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();

        // Every non-whitespace byte is covered by `Word`, an error here can
        // only come from a pattern gap and degrades to plain text.
        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => LexemeKind::Word,
        };

        Some(Lexeme { kind, text })
    }
}

/// Lex an entire line into a Vec
pub fn lex(input: &str) -> Vec<Lexeme<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to LexemeKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"[0-9]{4}[-/.][0-9]{2}[-/.][0-9]{2}", priority = 10)]
    Date,

    #[regex(r"\([A-Z]\)", priority = 10)]
    Priority,

    // Markers win over key:value at equal length, so `+a:b` is a project
    #[regex(r"\+[^ \t\r\n\f]+", priority = 6, allow_greedy = true)]
    Project,

    #[regex(r"@[^ \t\r\n\f]+", priority = 6, allow_greedy = true)]
    Context,

    #[regex(r"[^ \t\r\n\f:]+:[^ \t\r\n\f]+", priority = 4, allow_greedy = true)]
    KeyValue,

    #[regex(r"[^ \t\r\n\f]+", priority = 2, allow_greedy = true)]
    Word,
}

impl From<LogosToken> for LexemeKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => LexemeKind::Whitespace,
            LogosToken::Date => LexemeKind::Date,
            LogosToken::Priority => LexemeKind::Priority,
            LogosToken::Project => LexemeKind::Project,
            LogosToken::Context => LexemeKind::Context,
            LogosToken::KeyValue => LexemeKind::KeyValue,
            LogosToken::Word => LexemeKind::Word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<LexemeKind> {
        Lexer::new(input).map(|l| l.kind).collect()
    }

    #[test]
    fn test_lex_header() {
        let lexemes = lex("x 2020-01-01 (A) call");
        assert_eq!(lexemes.len(), 7);
        assert_eq!(lexemes[0].kind, LexemeKind::Word);
        assert_eq!(lexemes[0].text, "x");
        assert_eq!(lexemes[2].kind, LexemeKind::Date);
        assert_eq!(lexemes[4].kind, LexemeKind::Priority);
        assert_eq!(lexemes[6].text, "call");
    }

    #[test]
    fn test_lex_markers() {
        assert_eq!(
            kinds("+garden @home due:today"),
            vec![
                LexemeKind::Project,
                LexemeKind::Whitespace,
                LexemeKind::Context,
                LexemeKind::Whitespace,
                LexemeKind::KeyValue,
            ]
        );
    }

    #[test]
    fn test_lex_project_with_colon() {
        assert_eq!(kinds("+a:b"), vec![LexemeKind::Project]);
        assert_eq!(kinds("@home:office"), vec![LexemeKind::Context]);
    }

    #[test]
    fn test_lex_bare_flags_are_words() {
        assert_eq!(kinds("+"), vec![LexemeKind::Word]);
        assert_eq!(kinds("@"), vec![LexemeKind::Word]);
        assert_eq!(kinds("due:"), vec![LexemeKind::Word]);
        assert_eq!(kinds(":x"), vec![LexemeKind::Word]);
    }

    #[test]
    fn test_lex_longest_match_wins() {
        assert_eq!(kinds("2020-01-01x"), vec![LexemeKind::Word]);
        assert_eq!(kinds("(A)b"), vec![LexemeKind::Word]);
        assert_eq!(kinds("(a)"), vec![LexemeKind::Word]);
    }

    #[test]
    fn test_lex_preserves_text() {
        let input = "  a\tb  +c ";
        let joined: String = lex(input).iter().map(|l| l.text).collect();
        assert_eq!(joined, input);
    }
}
