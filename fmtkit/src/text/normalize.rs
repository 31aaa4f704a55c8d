//! Accent folding and slug generation.

use once_cell::sync::Lazy;

use super::rules::{apply_rules, Rewrite, RewriteRule};

/// Source characters folded by [`normalize_accents`]; `ACCENT_TO` holds the
/// replacement at the same position.
pub const ACCENT_FROM: &str = "ãàáäâẽèéëêìíïîõòóöôùúüûñç·/_,:;";
pub const ACCENT_TO: &str = "aaaaaeeeeeiiiiooooouuuunc------";

// Run after the accent table: strip, collapse separators, trim hyphens.
static SLUG_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::all(r"[^A-Za-z0-9_\s-]", Rewrite::Template("")),
        RewriteRule::all(r"[\s_-]+", Rewrite::Template("-")),
        RewriteRule::all(r"^-+|-+$", Rewrite::Template("")),
    ]
});

/// Replaces accented Latin letters with plain ASCII and the punctuation
/// `· / _ , : ;` with hyphens.
///
/// The table is applied in order, one source character at a time.
pub fn normalize_accents(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    ACCENT_FROM
        .chars()
        .zip(ACCENT_TO.chars())
        .fold(value.to_string(), |acc, (from, to)| {
            if acc.contains(from) {
                acc.replace(from, to.encode_utf8(&mut [0; 4]))
            } else {
                acc
            }
        })
}

/// Turns arbitrary text into a URL-safe slug.
///
/// - `"iwef k[wef #mgt%"` => `"iwef-kwef-mgt"`
/// - `"iwef âẽèéë eded"` => `"iwef-aeeee-eded"`
///
/// The result only contains `[a-z0-9-]`, never starts or ends with a hyphen and
/// never holds two hyphens in a row. Slugifying a slug returns it unchanged.
pub fn slugify(value: Option<&str>) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return String::new(),
    };
    let lowered = value.to_lowercase();
    let folded = normalize_accents(Some(lowered.trim()));
    apply_rules(&SLUG_RULES, &folded)
}
