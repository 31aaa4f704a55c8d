// fmtkit library root
// Text, date and number formatting helpers for display code.

pub mod collections;
pub mod config;
pub mod dates;
pub mod error;
pub mod inflect;
pub mod numbers;
pub mod random;
pub mod text;
pub mod validate;

pub use config::{DateSettings, FormatSettings, NumberSettings};
pub use error::{FormatError, Result};
pub use shared::models::{DateInput, Numeric, PasswordOptions, TimeUnit};

pub use collections::insert_into_array;
pub use dates::{
    birthday_from_now, date_diff, days_diff, format_date, format_date_time, from_now,
    get_time_from_date, is_christmas_time, month_name_from_sql_index, ChristmasOptions,
    DateFormatter,
};
pub use inflect::{plural, pluralize, singular, EnglishInflector, Inflector};
pub use numbers::{
    format_currency, format_number, is_numeric, nth_number, number_format, ordinal_suffix,
    NumberFormatter,
};
pub use random::{generate_strong_password, random_elements, random_number, random_string};
pub use text::{
    camel_case, camel_case_to_sentence_case, capitalize, count_words, count_words_from_html,
    kebab_case, kebab_case_to_pascal_case, kebab_case_to_sentence_case, normalize_accents,
    slugify, snake_case_to_sentence_case, strip_html, strip_tags, substring, ucwords,
};
pub use validate::{is_booleanable, is_email, is_empty, is_phone_number, to_boolean, IsEmpty};
