//! Whitespace and casing normalization.

/// Collapses runs of whitespace to single spaces and trims the ends.
///
/// Idempotent: applying it twice gives the same string.
#[must_use]
pub fn trim_extra_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims, collapses whitespace and capitalizes each word.
#[must_use]
pub fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Removes every numeric character.
#[must_use]
pub fn remove_digits(s: &str) -> String {
    s.chars().filter(|c| !c.is_numeric()).collect()
}

/// Collapses runs of the same character to a single occurrence.
#[must_use]
pub fn collapse_adjacent_duplicates(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = None;
    for c in s.chars() {
        if last != Some(c) {
            out.push(c);
        }
        last = Some(c);
    }
    out
}

/// Swaps the case of every cased character.
#[must_use]
pub fn swap_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Reverses word order, normalizing whitespace.
#[must_use]
pub fn reverse_words(s: &str) -> String {
    s.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive palindrome check over alphanumeric characters only.
///
/// Punctuation and spacing are ignored, so full sentences qualify.
#[must_use]
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}
