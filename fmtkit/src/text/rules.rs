//! Ordered regex rewrite rules.
//!
//! Every text transformation in this crate is a list of [`RewriteRule`]s run
//! strictly in declaration order; each rule sees the output of the previous
//! one, so reordering a list changes its results.

use std::borrow::Cow;

use regex::{Captures, Regex, Replacer};

/// How many matches a rule rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    First,
}

/// What a match is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// A regex replacement template (`$1`, `${name}`, or plain text).
    Template(&'static str),
    /// The given capture group, upper-cased.
    UpperGroup(usize),
    /// The whole match with only its first character upper-cased.
    UpperFirst,
    /// The whole match, upper-cased.
    UpperAll,
}

#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    rewrite: Rewrite,
    scope: Scope,
}

impl RewriteRule {
    /// Builds a rule from a pattern known at compile time. Only the crate's
    /// static tables construct rules.
    ///
    /// # Panics
    /// If `pattern` is not a valid regex.
    pub(crate) fn new(pattern: &str, rewrite: Rewrite, scope: Scope) -> Self {
        RewriteRule {
            pattern: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid rewrite pattern '{}': {}", pattern, e)),
            rewrite,
            scope,
        }
    }

    pub(crate) fn all(pattern: &str, rewrite: Rewrite) -> Self {
        Self::new(pattern, rewrite, Scope::All)
    }

    pub(crate) fn first(pattern: &str, rewrite: Rewrite) -> Self {
        Self::new(pattern, rewrite, Scope::First)
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }

    pub fn apply<'h>(&self, input: &'h str) -> Cow<'h, str> {
        match self.rewrite {
            Rewrite::Template(template) => self.run(input, template),
            Rewrite::UpperGroup(group) => self.run(input, |caps: &Captures| {
                caps.get(group).map_or_else(String::new, |m| m.as_str().to_uppercase())
            }),
            Rewrite::UpperFirst => self.run(input, |caps: &Captures| upper_first(&caps[0])),
            Rewrite::UpperAll => self.run(input, |caps: &Captures| caps[0].to_uppercase()),
        }
    }

    fn run<'h, R: Replacer>(&self, input: &'h str, replacer: R) -> Cow<'h, str> {
        match self.scope {
            Scope::All => self.pattern.replace_all(input, replacer),
            Scope::First => self.pattern.replacen(input, 1, replacer),
        }
    }
}

/// Runs `rules` over `input` in order.
pub fn apply_rules(rules: &[RewriteRule], input: &str) -> String {
    rules
        .iter()
        .fold(input.to_string(), |acc, rule| rule.apply(&acc).into_owned())
}

/// Upper-cases the first character, leaving the rest untouched.
pub(crate) fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
