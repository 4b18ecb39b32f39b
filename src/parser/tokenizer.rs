//! Line tokenizer
//!
//! Turns a raw task line into the ordered [`Token`] sequence an
//! [`Item`](crate::item::Item) owns.
//!
//! ## Grammar
//!
//! ```text
//! [x [completion-date] ][(P) ][creation-date ]body
//! ```
//!
//! Header elements are only recognized at the start of the line and in that
//! order. The body interleaves plain words with `+project`, `@context` and
//! `key:value` markers. Whitespace only separates; runs of plain words become
//! one text token joined by single spaces.

use smol_str::SmolStr;
use tracing::trace;

use super::date::is_date;
use super::lexer::{Lexeme, LexemeKind, Lexer};
use crate::base::{Token, TokenType};

/// Literal completion marker
pub const COMPLETION_MARKER: &str = "x";

/// Tokenize a task line.
///
/// Never fails: anything that is not a recognized marker becomes text.
/// An empty or all-whitespace line yields an empty sequence.
pub fn tokenize(raw: &str) -> Vec<Token> {
    let words: Vec<Lexeme<'_>> = Lexer::new(raw)
        .filter(|l| l.kind != LexemeKind::Whitespace)
        .collect();

    let mut tokens = Vec::new();
    let pos = read_header(&words, &mut tokens);
    read_body(&words[pos..], &mut tokens);

    trace!(line = raw, count = tokens.len(), "tokenized line");
    tokens
}

/// Consume the completion, priority and creation date prefix.
///
/// Returns the index of the first body lexeme.
fn read_header(words: &[Lexeme<'_>], tokens: &mut Vec<Token>) -> usize {
    let mut pos = 0;

    // A lone `x` is text, the marker needs something after it
    if words.len() > 1 && words[0].kind == LexemeKind::Word && words[0].text == COMPLETION_MARKER
    {
        pos += 1;
        let date = match words.get(pos) {
            Some(w) if is_header_date(w) => {
                pos += 1;
                w.text
            }
            _ => "",
        };
        tokens.push(Token::new(TokenType::Completed, date));
    }

    if let Some(w) = words.get(pos).filter(|w| w.kind == LexemeKind::Priority) {
        tokens.push(Token::new(TokenType::Priority, &w.text[1..2]));
        pos += 1;
    }

    if let Some(w) = words.get(pos).filter(|w| is_header_date(w)) {
        tokens.push(Token::new(TokenType::CreateDate, w.text));
        pos += 1;
    }

    pos
}

fn read_body(words: &[Lexeme<'_>], tokens: &mut Vec<Token>) {
    let mut text = TextRun::default();

    for word in words {
        let marker = match word.kind {
            LexemeKind::Project => Token::new(TokenType::Project, &word.text[1..]),
            LexemeKind::Context => Token::new(TokenType::Context, &word.text[1..]),
            LexemeKind::KeyValue => match word.text.split_once(':') {
                Some((key, value)) => Token::metadata(key, value),
                None => {
                    text.push(word.text);
                    continue;
                }
            },
            LexemeKind::Date | LexemeKind::Priority | LexemeKind::Word => {
                text.push(word.text);
                continue;
            }
            LexemeKind::Whitespace => continue,
        };

        text.flush_into(tokens);
        tokens.push(marker);
    }

    text.flush_into(tokens);
}

fn is_header_date(lexeme: &Lexeme<'_>) -> bool {
    lexeme.kind == LexemeKind::Date && is_date(lexeme.text)
}

/// Accumulates consecutive plain words into a single text token.
#[derive(Default)]
struct TextRun {
    buf: String,
}

impl TextRun {
    fn push(&mut self, word: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(word);
    }

    fn flush_into(&mut self, tokens: &mut Vec<Token>) {
        if self.buf.is_empty() {
            return;
        }
        let text = SmolStr::from(std::mem::take(&mut self.buf));
        tokens.push(Token::new(TokenType::Text, text));
    }
}
