//! Tag stripping and word counting for HTML fragments.

use once_cell::sync::Lazy;

use super::rules::{apply_rules, Rewrite, RewriteRule};

static STRIP_TAGS_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::all(r"<[^>]+>", Rewrite::Template("")),
        // Redundant after the tag rule above.
        RewriteRule::all(r"(?i)<img[^>]*>", Rewrite::Template("")),
        RewriteRule::all(r"\s\s+", Rewrite::Template(" ")),
    ]
});

static STRIP_HTML_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::all(r"<[^>]+>", Rewrite::Template("")),
        RewriteRule::first(r" *\[[^\]]*\]", Rewrite::Template("")),
        RewriteRule::all(r"&nbsp;|<br>|<br />", Rewrite::Template("")),
        // Greedy and single-shot: removes from the first `&` to the last `;`
        // on that line, once.
        RewriteRule::first(r"&.*;", Rewrite::Template("")),
        RewriteRule::all(r"\s\s+", Rewrite::Template(" ")),
    ]
});

static HTML_WORD_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::all(r"</?[^>]+(?:>|$)", Rewrite::Template(" ")),
        RewriteRule::all(r"\.{2,}", Rewrite::Template(" ")),
        RewriteRule::all(r" {2,}", Rewrite::Template(" ")),
        RewriteRule::all(r"^\s*|\s*$", Rewrite::Template("")),
        RewriteRule::first(r"\n ", Rewrite::Template(" ")),
    ]
});

/// Removes every tag and collapses whitespace runs to one space. Not trimmed.
///
/// - `"<p>abcd</p>"` => `"abcd"`
pub fn strip_tags(html: Option<&str>) -> String {
    match html {
        Some(html) if !html.is_empty() => apply_rules(&STRIP_TAGS_RULES, html),
        _ => String::new(),
    }
}

/// Reduces an HTML fragment to trimmed plain text.
///
/// Besides tags this drops the first `[shortcode]`, `&nbsp;` and `<br>` literals,
/// and the first entity-like `&...;` span.
///
/// - `"<p>abcd &nbsp; karl</p>"` => `"abcd karl"`
/// - `"<p>abcd [shortcode] karl</p>"` => `"abcd karl"`
/// - `"<p>abcd <br/> &middot; karl</p>"` => `"abcd karl"`
pub fn strip_html(html: Option<&str>) -> String {
    match html {
        Some(html) if !html.is_empty() => apply_rules(&STRIP_HTML_RULES, html).trim().to_string(),
        _ => String::new(),
    }
}

/// Counts space separated words. Only the ASCII space splits words, so
/// `"a-b"` and `"a\tb"` are one word each.
pub fn count_words(value: Option<&str>) -> usize {
    value.map_or(0, |v| v.split(' ').filter(|w| !w.is_empty()).count())
}

/// Counts words in an HTML fragment; tags count as word separators.
///
/// - `"<p><span>f</span>a b</p>"` => 3
pub fn count_words_from_html(html: Option<&str>) -> usize {
    match html {
        Some(html) if !html.is_empty() => count_words(Some(&apply_rules(&HTML_WORD_RULES, html))),
        _ => 0,
    }
}
