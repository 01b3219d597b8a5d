//! Prefix and suffix vocabulary helpers.

use crate::core::essay_editor::split_trailing_punctuation;
use crate::error::{KataError, Result};

pub fn add_prefix_un(word: &str) -> String {
    format!("un{word}")
}

/// Build a word group: `["en", "close", "joy"]` becomes
/// `"en :: enclose :: enjoy"`. The first entry is the prefix.
pub fn make_word_groups(vocab_words: &[&str]) -> String {
    let Some((prefix, words)) = vocab_words.split_first() else {
        return String::new();
    };
    let mut group = prefix.to_string();
    for word in words {
        group.push_str(&format!(" :: {prefix}{word}"));
    }
    group
}

/// Remove a trailing `ness`, restoring a final `y` that was spelled `i`
/// (`heaviness` becomes `heavy`).
pub fn remove_suffix_ness(word: &str) -> String {
    let Some(root) = word.strip_suffix("ness") else {
        return word.to_string();
    };
    match root.strip_suffix('i') {
        Some(stem) => format!("{stem}y"),
        None => root.to_string(),
    }
}

/// Turn the adjective at `index` in `sentence` into a verb by appending `en`.
pub fn adjective_to_verb(sentence: &str, index: usize) -> Result<String> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let word = words.get(index).ok_or(KataError::WordIndex {
        index,
        len: words.len(),
    })?;
    let (stem, _) = split_trailing_punctuation(word);
    Ok(format!("{stem}en"))
}
