//! Random numbers, strings, passwords and samples.
//!
//! Each helper has a `_with` variant taking the RNG, so callers (and tests)
//! can pass a seeded one; the plain versions use `rand::thread_rng()`.

use rand::seq::SliceRandom;
use rand::Rng;
use shared::models::PasswordOptions;

use crate::error::{FormatError, Result};

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

/// A value in `min..max`; `min` when the range is empty.
pub fn random_number(min: i64, max: i64) -> i64 {
    random_number_with(&mut rand::thread_rng(), min, max)
}

pub fn random_number_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

/// `len` ASCII letters, plus digits when `include_numbers` is set.
pub fn random_string(len: usize, include_numbers: bool) -> String {
    random_string_with(&mut rand::thread_rng(), len, include_numbers)
}

pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, len: usize, include_numbers: bool) -> String {
    let pool: Vec<u8> = if include_numbers {
        [LETTERS, DIGITS].concat()
    } else {
        LETTERS.to_vec()
    };
    (0..len).map(|_| pick(rng, &pool)).collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[u8]) -> char {
    char::from(pool[rng.gen_range(0..pool.len())])
}

/// Generates a password containing at least one character from every selected
/// class, padded from the combined pool to `options.length` and shuffled.
///
/// When more classes are selected than `length` allows, the result is one
/// character per class.
pub fn generate_strong_password(options: &PasswordOptions) -> Result<String> {
    generate_strong_password_with(&mut rand::thread_rng(), options)
}

pub fn generate_strong_password_with<R: Rng + ?Sized>(
    rng: &mut R,
    options: &PasswordOptions,
) -> Result<String> {
    if !options.include_lowercase {
        tracing::warn!("Generating a password without lowercase characters");
    }

    let classes: Vec<&[u8]> = [
        (options.include_lowercase, LOWERCASE),
        (options.include_uppercase, UPPERCASE),
        (options.include_numbers, DIGITS),
        (options.include_symbols, SYMBOLS),
    ]
    .into_iter()
    .filter_map(|(enabled, class)| enabled.then_some(class))
    .collect();

    if classes.is_empty() {
        if options.length == 0 {
            return Ok(String::new());
        }
        return Err(FormatError::NoCharacterClasses);
    }

    let mut password: Vec<char> = classes.iter().map(|class| pick(rng, class)).collect();
    let pool = classes.concat();
    while password.len() < options.length {
        password.push(pick(rng, &pool));
    }
    password.shuffle(rng);
    Ok(password.into_iter().collect())
}

/// Up to `take` distinct elements of `items`, in random order.
pub fn random_elements<T: Clone>(items: &[T], take: usize) -> Vec<T> {
    random_elements_with(&mut rand::thread_rng(), items, take)
}

pub fn random_elements_with<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], take: usize) -> Vec<T> {
    items
        .choose_multiple(rng, take.min(items.len()))
        .cloned()
        .collect()
}
