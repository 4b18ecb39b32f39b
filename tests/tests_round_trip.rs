#![allow(clippy::unwrap_used)]

//! Tokenize → serialize round trips.
//!
//! A line that the string serializer produced must come back unchanged after
//! another tokenize/serialize pass. The first pass may normalize whitespace.

use rstest::rstest;
use todotxt::{Item, Serializer, StringSerializer, TokenType, tokenize};

fn pass(line: &str) -> String {
    StringSerializer.serialize(&tokenize(line))
}

#[rstest]
#[case("")]
#[case("x")]
#[case("x done")]
#[case("call mom")]
#[case("(A) call mom")]
#[case("2020-01-01 call mom")]
#[case("(A) 2020-01-01 call mom")]
#[case("x 2020-01-02 call mom")]
#[case("x 2020-01-02 (A) 2020-01-01 call mom +family @phone due:2020-02-01")]
#[case("x (B) 2019/03/04 pay rent")]
#[case("+garden @home")]
#[case("see url:http://example.com:8080/x and +a:b")]
#[case("(a) 2020-13-01 not a header")]
#[case("text (A) 2020-01-01 x mid-line")]
#[case("café +über @zuhause")]
fn test_canonical_lines_are_fixpoints(#[case] line: &str) {
    assert_eq!(pass(line), line);
}

#[rstest]
#[case("  padded   line  ", "padded line")]
#[case("a\tb", "a b")]
#[case("x ", "x")]
#[case("(A)   +p  ", "(A) +p")]
fn test_first_pass_normalizes_whitespace(#[case] input: &str, #[case] expected: &str) {
    let first = pass(input);
    assert_eq!(first, expected);
    assert_eq!(pass(&first), first);
}

#[rstest]
#[case("x 2020-01-02 (A) 2020-01-01 call +p @c k:v tail")]
#[case("one +a two @b three c:d four")]
fn test_marker_order_preserved(#[case] line: &str) {
    let tokens = tokenize(line);
    let again = tokenize(&pass(line));
    let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind()).collect();
    let kinds_again: Vec<TokenType> = again.iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, kinds_again);
    assert_eq!(tokens, again);
}

#[test]
fn test_item_round_trip_after_edits() {
    let mut item = Item::parse_string("(B) plan trip +travel @laptop");
    item.set_create_date("2023-04-05");
    let line = item.to_string();
    assert_eq!(line, "2023-04-05 (B) plan trip +travel @laptop");

    let reparsed = Item::parse_string(&line);
    assert_eq!(reparsed.to_string(), line);
    assert_eq!(reparsed.create_date(), Some("2023-04-05"));
    // A date in front of the priority turns the priority into text
    assert_eq!(reparsed.priority(), None);
    assert_eq!(reparsed.projects(), vec!["travel"]);
}
