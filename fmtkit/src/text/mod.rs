//! Text case conversion and normalization.
//!
//! Every function here is total: `None` or an empty string yields `""`
//! (or `0` for the counters) instead of an error.

pub mod case;
pub mod html;
pub mod normalize;
pub mod rules;

pub use case::{
    camel_case, camel_case_to_sentence_case, capitalize, kebab_case, kebab_case_to_pascal_case,
    kebab_case_to_sentence_case, snake_case_to_sentence_case, ucwords,
};
pub use html::{count_words, count_words_from_html, strip_html, strip_tags};
pub use normalize::{normalize_accents, slugify};

/// First `end` characters of `value`.
///
/// - `"abcdef"`, 1 => `"a"`
/// - `"abc"`, 10 => `"abc"`
pub fn substring(value: Option<&str>, end: usize) -> String {
    value.map_or_else(String::new, |v| v.chars().take(end).collect())
}
