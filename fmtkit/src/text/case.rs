//! Case converters.
//!
//! Each converter is a fixed list of rewrite rules plus a final casing step.
//! Word characters and word boundaries are ASCII (`[A-Za-z0-9_]`), and only
//! `[A-Z]` counts as an upper-case boundary, so accented capitals are left
//! where they are.

use once_cell::sync::Lazy;

use super::rules::{apply_rules, upper_first, Rewrite, RewriteRule};

static CAMEL_RULES: Lazy<Vec<RewriteRule>> =
    Lazy::new(|| vec![RewriteRule::all(r"[^a-zA-Z0-9]+(.)", Rewrite::UpperGroup(1))]);

static KEBAB_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::all(r"([a-z])([A-Z])", Rewrite::Template("$1-$2")),
        RewriteRule::all(r"[\s_]+", Rewrite::Template("-")),
    ]
});

static KEBAB_TO_PASCAL_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::all(r"-([a-z])", Rewrite::UpperGroup(1)),
        RewriteRule::all(r"-([0-9])", Rewrite::Template("$1")),
        // First character of every ASCII word.
        RewriteRule::all(r"[A-Za-z0-9_]+", Rewrite::UpperFirst),
    ]
});

static SPACE_BEFORE_UPPER: Lazy<RewriteRule> =
    Lazy::new(|| RewriteRule::all(r"([A-Z])", Rewrite::Template(" $1")));

static SNAKE_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::all(r"_", Rewrite::Template(" ")),
        SPACE_BEFORE_UPPER.clone(),
    ]
});

static KEBAB_TO_SENTENCE_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::all(r"-([a-z])", Rewrite::UpperGroup(1)),
        RewriteRule::all(r"-([0-9])", Rewrite::Template(" $1")),
        SPACE_BEFORE_UPPER.clone(),
    ]
});

static WORD_STARTS: Lazy<RewriteRule> =
    Lazy::new(|| RewriteRule::all(r"[A-Za-z0-9_]+", Rewrite::UpperFirst));

static CAPITALIZE: Lazy<RewriteRule> =
    Lazy::new(|| RewriteRule::all(r"(?:^|\s)\S", Rewrite::UpperAll));

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Converts a phrase to camelCase.
///
/// - `"your string is dope"` => `"yourStringIsDope"`
/// - `"abcdEfgh"` => `"abcdefgh"` (input is lower-cased first)
/// - `"a b c d"` => `"aBCD"`
pub fn camel_case(value: Option<&str>) -> String {
    let Some(value) = non_empty(value) else {
        return String::new();
    };
    apply_rules(&CAMEL_RULES, &value.trim().to_lowercase())
}

/// Converts a string to kebab-case after trimming it.
///
/// - `"aBcD"` => `"a-bc-d"`
/// - `" 123 456 Efg "` => `"123-456-efg"`
pub fn kebab_case(value: Option<&str>) -> String {
    let Some(value) = non_empty(value) else {
        return String::new();
    };
    apply_rules(&KEBAB_RULES, value.trim()).to_lowercase()
}

/// Converts kebab-case to PascalCase.
///
/// - `"my-string-is-dope"` => `"MyStringIsDope"`
/// - `"123-456-efg"` => `"123456Efg"`
pub fn kebab_case_to_pascal_case(value: Option<&str>) -> String {
    let Some(value) = non_empty(value) else {
        return String::new();
    };
    apply_rules(&KEBAB_TO_PASCAL_RULES, value)
}

/// Converts camelCase to sentence case.
///
/// - `"myStringIsDope"` => `"My string is dope"`
/// - `"myStringIsDope"`, `capitalize_words` => `"My String Is Dope"`
///
/// Existing whitespace is kept, so `"aBcd Efg"` with `capitalize_words`
/// becomes `"A Bcd  Efg"`.
pub fn camel_case_to_sentence_case(value: Option<&str>, capitalize_words: bool) -> String {
    let Some(value) = non_empty(value) else {
        return String::new();
    };
    let spaced = SPACE_BEFORE_UPPER.apply(value);
    let spaced = spaced.trim();
    if capitalize_words {
        upper_first(spaced)
    } else {
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.as_str().to_lowercase().chars())
                .collect(),
            None => String::new(),
        }
    }
}

/// Converts snake_case to sentence case.
///
/// - `"my_string_is_dope"` => `"My string is dope"`
/// - `"abc_456_efg"`, `capitalize_words` => `"Abc 456 Efg"`
///
/// Nothing is lower-cased and the result is not trimmed.
pub fn snake_case_to_sentence_case(value: Option<&str>, capitalize_words: bool) -> String {
    let Some(value) = non_empty(value) else {
        return String::new();
    };
    let spaced = apply_rules(&SNAKE_RULES, value);
    if capitalize_words {
        WORD_STARTS.apply(&spaced).into_owned()
    } else {
        upper_first(&spaced)
    }
}

/// Converts kebab-case to sentence case.
///
/// - `"my-string-is-dope"` => `"My string is dope"`
/// - `"123-456-efg"`, `capitalize_words` => `"123 456 Efg"`
pub fn kebab_case_to_sentence_case(value: Option<&str>, capitalize_words: bool) -> String {
    let Some(value) = non_empty(value) else {
        return String::new();
    };
    let spaced = apply_rules(&KEBAB_TO_SENTENCE_RULES, value).to_lowercase();
    if capitalize_words {
        capitalize(Some(&spaced))
    } else {
        ucwords(Some(&spaced))
    }
}

/// Capitalizes the first character of every whitespace separated word, then trims.
/// The rest of each word is left as it is.
///
/// - `"abcd efgh"` => `"Abcd Efgh"`
/// - `"aBCD"` => `"ABCD"`
pub fn capitalize(value: Option<&str>) -> String {
    let Some(value) = non_empty(value) else {
        return String::new();
    };
    CAPITALIZE.apply(value).trim().to_string()
}

/// Capitalizes only the first character of the trimmed string.
///
/// - `"abcd efgh"` => `"Abcd efgh"`
/// - `" a B C D    "` => `"A B C D"`
pub fn ucwords(value: Option<&str>) -> String {
    upper_first(value.unwrap_or_default().trim())
}
