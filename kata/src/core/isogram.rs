//! Isogram detection.

use std::collections::HashSet;

/// A word or phrase is an isogram when no letter repeats, ignoring case.
/// Spaces and hyphens (any non-alphabetic character) may repeat freely.
pub fn is_isogram(phrase: &str) -> bool {
    let mut seen = HashSet::new();
    phrase
        .chars()
        .filter(|ch| ch.is_alphabetic())
        .flat_map(char::to_lowercase)
        .all(|ch| seen.insert(ch))
}
