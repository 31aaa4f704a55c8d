// Singular/plural inflection
pub mod rules;

use once_cell::sync::Lazy;

use crate::text::rules::{upper_first, RewriteRule};
use rules::{IRREGULARS, PLURAL_RULES, SINGULAR_RULES, UNCOUNTABLES};

static ENGLISH: Lazy<EnglishInflector> = Lazy::new(EnglishInflector::default);

// Common trait for word inflectors
pub trait Inflector: Send + Sync {
    fn plural(&self, word: &str) -> String;
    fn singular(&self, word: &str) -> String;
}

/// Rule-based English inflection. The result takes the casing of the
/// input: `Person` => `People`, `BOX` => `BOXES`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishInflector;

impl EnglishInflector {
    fn inflect(
        word: &str,
        irregular: impl Fn(&str) -> Option<&'static str>,
        rules: &[RewriteRule],
    ) -> String {
        if word.is_empty() {
            return String::new();
        }
        let lower = word.to_lowercase();
        if UNCOUNTABLES.contains(&lower.as_str()) {
            return word.to_string();
        }
        if let Some(form) = irregular(&lower) {
            return restore_case(word, form);
        }
        match rules.iter().find(|rule| rule.is_match(&lower)) {
            Some(rule) => restore_case(word, &rule.apply(&lower)),
            None => word.to_string(),
        }
    }
}

impl Inflector for EnglishInflector {
    fn plural(&self, word: &str) -> String {
        Self::inflect(
            word,
            |lower| {
                IRREGULARS
                    .iter()
                    .find(|(one, many)| *one == lower || *many == lower)
                    .map(|(_, many)| *many)
            },
            &PLURAL_RULES,
        )
    }

    fn singular(&self, word: &str) -> String {
        Self::inflect(
            word,
            |lower| {
                IRREGULARS
                    .iter()
                    .find(|(one, many)| *one == lower || *many == lower)
                    .map(|(one, _)| *one)
            },
            &SINGULAR_RULES,
        )
    }
}

fn restore_case(source: &str, inflected: &str) -> String {
    let mut letters = source.chars().filter(|c| c.is_alphabetic()).peekable();
    let all_upper = letters.peek().is_some() && letters.all(char::is_uppercase);
    if all_upper && source.chars().count() > 1 {
        inflected.to_uppercase()
    } else if source.chars().next().is_some_and(char::is_uppercase) {
        upper_first(inflected)
    } else {
        inflected.to_string()
    }
}

/// `"man"` => `"men"`, `"cat"` => `"cats"`. `None` gives `""`.
pub fn plural(word: Option<&str>) -> String {
    word.map_or_else(String::new, |w| ENGLISH.plural(w))
}

/// `"men"` => `"man"`, `"cats"` => `"cat"`. `None` gives `""`.
pub fn singular(word: Option<&str>) -> String {
    word.map_or_else(String::new, |w| ENGLISH.singular(w))
}

/// The singular when `0 < count < 2`, otherwise the plural.
pub fn pluralize(word: Option<&str>, count: f64) -> String {
    if count > 0.0 && count < 2.0 {
        singular(word)
    } else {
        plural(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(Some("man")), "men");
        assert_eq!(plural(Some("men")), "men");
        assert_eq!(plural(Some("cat")), "cats");
        assert_eq!(plural(Some("abcd")), "abcds");
        assert_eq!(plural(None), "");
        assert_eq!(plural(Some("")), "");
    }

    #[test]
    fn test_singular() {
        assert_eq!(singular(Some("men")), "man");
        assert_eq!(singular(Some("man")), "man");
        assert_eq!(singular(Some("cats")), "cat");
        assert_eq!(singular(Some("abcds")), "abcd");
        assert_eq!(singular(None), "");
    }

    #[test]
    fn test_suffix_rules() {
        let en = EnglishInflector;
        assert_eq!(en.plural("city"), "cities");
        assert_eq!(en.plural("box"), "boxes");
        assert_eq!(en.plural("knife"), "knives");
        assert_eq!(en.plural("wolf"), "wolves");
        assert_eq!(en.plural("analysis"), "analyses");
        assert_eq!(en.plural("tomato"), "tomatoes");
        assert_eq!(en.plural("bus"), "buses");
        assert_eq!(en.plural("matrix"), "matrices");
        assert_eq!(en.singular("cities"), "city");
        assert_eq!(en.singular("knives"), "knife");
        assert_eq!(en.singular("wolves"), "wolf");
        assert_eq!(en.singular("boxes"), "box");
        assert_eq!(en.singular("movies"), "movie");
        assert_eq!(en.singular("glass"), "glass");
        assert_eq!(en.singular("status"), "status");
    }

    #[test]
    fn test_uncountables_are_unchanged() {
        let en = EnglishInflector;
        assert_eq!(en.plural("sheep"), "sheep");
        assert_eq!(en.singular("news"), "news");
        assert_eq!(en.plural("Information"), "Information");
    }

    #[test]
    fn test_case_is_restored() {
        let en = EnglishInflector;
        assert_eq!(en.plural("Person"), "People");
        assert_eq!(en.plural("BOX"), "BOXES");
        assert_eq!(en.singular("Cats"), "Cat");
        assert_eq!(en.plural("A"), "As");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(Some("cat"), 1.0), "cat");
        assert_eq!(pluralize(Some("cats"), 1.5), "cat");
        assert_eq!(pluralize(Some("cat"), 0.0), "cats");
        assert_eq!(pluralize(Some("cat"), 2.0), "cats");
        assert_eq!(pluralize(Some("man"), 3.0), "men");
        assert_eq!(pluralize(None, 1.0), "");
    }
}
