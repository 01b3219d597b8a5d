//! Pangram detection.

/// A sentence is a pangram when every letter `a`-`z` appears at least once,
/// ignoring case.
pub fn is_pangram(sentence: &str) -> bool {
    let mut seen = [false; 26];
    for ch in sentence.chars().filter(char::is_ascii_alphabetic) {
        seen[usize::from(ch.to_ascii_lowercase() as u8 - b'a')] = true;
    }
    seen.iter().all(|letter| *letter)
}
