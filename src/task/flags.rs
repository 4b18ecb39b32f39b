//! `+project` / `@context` scanning over free text.

use std::sync::LazyLock;

use regex::Regex;

static PROJECT_FLAG: LazyLock<Regex> = LazyLock::new(|| flag_regex('+'));
static CONTEXT_FLAG: LazyLock<Regex> = LazyLock::new(|| flag_regex('@'));

fn flag_regex(flag: char) -> Regex {
    // The flag must open the text or follow a non-word character
    let pattern = format!(r"(?:^|[^A-Za-z0-9_]){}(\S+)", regex::escape(&flag.to_string()));
    Regex::new(&pattern).expect("flag pattern is valid")
}

/// Lowercased names of every `+project` in `text`.
pub fn find_projects(text: &str) -> Vec<String> {
    find_flags(&PROJECT_FLAG, text)
}

/// Lowercased names of every `@context` in `text`.
pub fn find_contexts(text: &str) -> Vec<String> {
    find_flags(&CONTEXT_FLAG, text)
}

/// A name needs at least two characters and must end in `[A-Za-z0-9_]`.
fn find_flags(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| {
            name.chars().count() >= 2
                && name
                    .chars()
                    .last()
                    .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        })
        .map(str::to_lowercase)
        .collect()
}
