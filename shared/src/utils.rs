// Helpers shared by the date and number code paths in fmtkit.
use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+\.?[0-9]*$").unwrap());

/// Checks whether a string holds a (possibly negative) number.
///
/// - `"1234"`, `"-23"` => true
/// - `"123.4"` => false, unless `allow_float` is set
/// - `"123a"`, `""` => false
pub fn is_numeric(value: &str, allow_float: bool) -> bool {
    if value.is_empty() {
        return false;
    }
    if allow_float {
        DECIMAL.is_match(value)
    } else {
        INTEGER.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric_integers() {
        assert!(is_numeric("1", false));
        assert!(is_numeric("1234567890", false));
        assert!(is_numeric("-23", false));
        assert!(!is_numeric("abcd", false));
        assert!(!is_numeric("123a", false));
        assert!(!is_numeric("", false));
    }

    #[test]
    fn test_is_numeric_floats() {
        assert!(!is_numeric("123.4", false));
        assert!(is_numeric("123.4", true));
        assert!(is_numeric("123.", true));
        assert!(!is_numeric(".5", true));
        assert!(!is_numeric("1.2.3", true));
    }
}
