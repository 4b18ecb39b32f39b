//! Date shape checks for header dates.

/// Check if `text` looks like a task date.
///
/// Accepts `YYYY?MM?DD` where `?` is one of `-`, `/` or `.`, the year starts
/// with `19` or `20`, the month is `01`-`12` and the day `01`-`31`. Calendar
/// validity (e.g. `02-31`) is not checked.
pub fn is_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 10 {
        return false;
    }

    if !is_separator(bytes[4]) || !is_separator(bytes[7]) {
        return false;
    }

    let (Some(century), Some(_), Some(month), Some(day)) = (
        two_digits(&bytes[0..2]),
        two_digits(&bytes[2..4]),
        two_digits(&bytes[5..7]),
        two_digits(&bytes[8..10]),
    ) else {
        return false;
    };

    matches!(century, 19 | 20) && (1..=12).contains(&month) && (1..=31).contains(&day)
}

#[inline]
fn is_separator(b: u8) -> bool {
    matches!(b, b'-' | b'/' | b'.')
}

fn two_digits(pair: &[u8]) -> Option<u8> {
    match pair {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => Some((a - b'0') * 10 + (b - b'0')),
        _ => None,
    }
}
