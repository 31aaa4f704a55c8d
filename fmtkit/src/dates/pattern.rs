//! Translation of `D MMM, YYYY`-style display patterns into chrono strftime.
//!
//! Text wrapped in `[...]` is copied literally. Characters that are not part
//! of a token are copied as-is, with `%` escaped.

use chrono::{DateTime, Utc};

// Longer tokens sharing a prefix must come first.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("d", "%w"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("m", "%-M"),
    ("ss", "%S"),
    ("s", "%-S"),
    ("SSS", "%3f"),
    ("A", "%p"),
    ("a", "%P"),
    ("ZZ", "%z"),
    ("Z", "%:z"),
];

/// Converts a display pattern to a chrono format string.
///
/// - `"D MMM, YYYY"` => `"%-d %b, %Y"`
/// - `"[Today is] dddd"` => `"Today is %A"`
pub fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(close) = rest.find(']') {
                push_literal(&mut out, &rest[1..close]);
                rest = &rest[close + 1..];
                continue;
            }
        }
        if let Some((token, strftime)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            out.push_str(strftime);
            rest = &rest[token.len()..];
            continue;
        }
        push_literal(&mut out, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn push_literal(out: &mut String, literal: &str) {
    for c in literal.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

/// Renders `dt` (in UTC) with a display pattern.
pub fn render(dt: &DateTime<Utc>, pattern: &str) -> String {
    dt.format(&to_strftime(pattern)).to_string()
}
