// Loose validators and truthiness checks
use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$").unwrap()
});

const PHONE_NOISE: &[char] = &['+', ' ', '(', ')', '-', '#', '_'];

const TRUE_WORDS: &[&str] = &["true", "t", "yes", "y", "on", "1"];
const FALSE_WORDS: &[&str] = &["false", "f", "no", "n", "off", "0"];

/// Loose phone check: after dropping `+ ( ) - # _` and spaces, what is left
/// must read as a number.
///
/// - `"+123456789"` => true
/// - `"p123456789"` => false
pub fn is_phone_number(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| !PHONE_NOISE.contains(c)).collect();
    let digits = digits.trim();
    digits.is_empty() || digits.parse::<f64>().is_ok_and(f64::is_finite)
}

/// - `"info@acelords.com"` => true
/// - `"info@acelordscom"` => false
pub fn is_email(value: Option<&str>) -> bool {
    value.is_some_and(|v| EMAIL.is_match(v))
}

/// Emptiness across strings, collections and JSON values.
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().map_or(true, IsEmpty::is_empty_value)
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

// Falsy scalars count as empty.
impl IsEmpty for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f == 0.0 || f.is_nan()),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

/// - `None`, `""`, `[]`, `{}` => true
/// - `"."`, `[1]`, `{"a": 4}` => false
pub fn is_empty<T: IsEmpty + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

/// Coerces a JSON value to a bool: strings in `true t yes y on 1`
/// (case-insensitive), the number 1, and `true` itself.
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::String(s) => TRUE_WORDS.contains(&s.trim().to_lowercase().as_str()),
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::Bool(b) => *b,
        _ => false,
    }
}

/// Whether [`to_boolean`] has a meaningful answer for `value`.
pub fn is_booleanable(value: &Value) -> bool {
    match value {
        Value::String(s) => {
            let word = s.trim().to_lowercase();
            TRUE_WORDS.contains(&word.as_str()) || FALSE_WORDS.contains(&word.as_str())
        }
        Value::Number(n) => matches!(n.as_f64(), Some(f) if f == 0.0 || f == 1.0),
        Value::Bool(_) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_phone_number() {
        assert!(is_phone_number("123456789"));
        assert!(is_phone_number("+123456789"));
        assert!(is_phone_number("0123456789"));
        assert!(is_phone_number("+1 (234) 567-89#0"));
        assert!(is_phone_number(""));
        assert!(!is_phone_number("p123456789"));
        assert!(!is_phone_number("~123456789"));
        assert!(!is_phone_number("inf"));
        assert!(!is_phone_number("+Infinity"));
        assert!(!is_phone_number("NaN"));
    }

    #[test]
    fn test_is_email() {
        assert!(is_email(Some("info@acelords.com")));
        assert!(is_email(Some("first.last@mail.example.co")));
        assert!(!is_email(Some("infoacelords.com")));
        assert!(!is_email(Some("info@acelordscom")));
        assert!(!is_email(Some("+123456789")));
        assert!(!is_email(Some("")));
        assert!(!is_email(None));
        assert!(!is_email(Some("jöhn@mail.com")));
    }

    #[test]
    fn test_is_empty_strings_and_collections() {
        assert!(is_empty(""));
        assert!(!is_empty("."));
        assert!(is_empty(&String::new()));
        assert!(is_empty(&None::<&str>));
        assert!(!is_empty(&Some("k")));
        assert!(is_empty(&Vec::<i32>::new()));
        assert!(!is_empty(&vec![1]));
        assert!(is_empty(&[] as &[u8]));
        assert!(is_empty(&HashMap::<String, i32>::new()));
        let mut map = BTreeMap::new();
        map.insert("a", 4);
        assert!(!is_empty(&map));
    }

    #[test]
    fn test_is_empty_json() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(is_empty(&json!(0)));
        assert!(is_empty(&json!(false)));
        assert!(!is_empty(&json!(["k"])));
        assert!(!is_empty(&json!({"a": 4})));
        assert!(!is_empty(&json!(3)));
    }

    #[test]
    fn test_to_boolean() {
        for truthy in [json!("true"), json!(" YES "), json!("on"), json!("1"), json!(1), json!(true)] {
            assert!(to_boolean(&truthy), "{}", truthy);
        }
        for falsy in [json!("false"), json!("no"), json!("maybe"), json!(2), json!(0), json!(false), json!(null), json!([1])] {
            assert!(!to_boolean(&falsy), "{}", falsy);
        }
    }

    #[test]
    fn test_is_booleanable() {
        for value in [json!("true"), json!("off"), json!("N"), json!("0"), json!(0), json!(1), json!(false)] {
            assert!(is_booleanable(&value), "{}", value);
        }
        for value in [json!("maybe"), json!(2), json!(null), json!({})] {
            assert!(!is_booleanable(&value), "{}", value);
        }
    }
}
