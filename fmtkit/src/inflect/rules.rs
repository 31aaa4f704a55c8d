// English inflection tables. Rule lists are tried in order and the first
// match wins, so specific endings sit above general ones.
use once_cell::sync::Lazy;

use crate::text::rules::{Rewrite, RewriteRule};

/// Singular/plural pairs that no suffix rule covers.
pub(crate) const IRREGULARS: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("move", "moves"),
    ("ox", "oxen"),
    ("person", "people"),
    ("sex", "sexes"),
    ("tooth", "teeth"),
    ("woman", "women"),
    ("zombie", "zombies"),
];

pub(crate) const UNCOUNTABLES: &[&str] = &[
    "deer",
    "equipment",
    "fish",
    "information",
    "jeans",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "species",
];

fn rule(pattern: &str, template: &'static str) -> RewriteRule {
    RewriteRule::first(pattern, Rewrite::Template(template))
}

pub(crate) static PLURAL_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        rule(r"(quiz)$", "${1}zes"),
        rule(r"([ml])ouse$", "${1}ice"),
        rule(r"(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
        rule(r"(x|ch|ss|sh)$", "${1}es"),
        rule(r"([^aeiouy]|qu)y$", "${1}ies"),
        rule(r"(hive)$", "${1}s"),
        rule(r"(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
        rule(r"sis$", "ses"),
        rule(r"([ti])um$", "${1}a"),
        rule(r"(buffal|ech|her|potat|tomat|volcan)o$", "${1}oes"),
        rule(r"(alia|bu|statu)s$", "${1}ses"),
        rule(r"(alumn|cact|fung|nucle|octop|radi|stimul|syllab|vir)us$", "${1}i"),
        rule(r"s$", "s"),
        rule(r"$", "s"),
    ]
});

pub(crate) static SINGULAR_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        rule(r"(quiz)zes$", "${1}"),
        rule(r"(matr)ices$", "${1}ix"),
        rule(r"(vert|ind)ices$", "${1}ex"),
        rule(r"(alias|bus|status)es$", "${1}"),
        rule(r"(alumn|cact|fung|nucle|octop|radi|stimul|syllab|vir)i$", "${1}us"),
        rule(r"(ax|cris|test)es$", "${1}is"),
        rule(r"(shoe)s$", "${1}"),
        rule(r"(o)es$", "${1}"),
        rule(r"([ml])ice$", "${1}ouse"),
        rule(r"(x|ch|ss|sh)es$", "${1}"),
        rule(r"(m)ovies$", "${1}ovie"),
        rule(r"([^aeiouy]|qu)ies$", "${1}y"),
        rule(r"([lr])ves$", "${1}f"),
        rule(r"(hive|tive)s$", "${1}"),
        rule(r"([^f])ves$", "${1}fe"),
        rule(r"(analy|ba|diagno|parenthe|progno|synop|the)ses$", "${1}sis"),
        rule(r"([ti])a$", "${1}um"),
        rule(r"(us|ss)$", "${1}"),
        rule(r"s$", ""),
    ]
});
