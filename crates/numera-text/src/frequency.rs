//! Word and character frequency counting.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

/// Counts whitespace-separated word occurrences.
#[must_use]
pub fn word_frequency(s: &str) -> FxHashMap<String, usize> {
    let mut counts = FxHashMap::default();
    for word in s.split_whitespace() {
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Counts character occurrences.
#[must_use]
pub fn char_frequency(s: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Number of whitespace-separated words.
#[must_use]
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Occurrences of `target` in `s`.
#[must_use]
pub fn char_count(s: &str, target: char) -> usize {
    s.chars().filter(|&c| c == target).count()
}

/// Counts the distinct vowels and distinct consonants in `s`, over
/// lowercased ASCII letters.
#[must_use]
pub fn unique_vowels_consonants(s: &str) -> (usize, usize) {
    let mut vowels = BTreeSet::new();
    let mut consonants = BTreeSet::new();
    for c in s.chars().flat_map(char::to_lowercase) {
        if matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') {
            vowels.insert(c);
        } else if c.is_ascii_alphabetic() {
            consonants.insert(c);
        }
    }
    (vowels.len(), consonants.len())
}
