//! Small proofreading helpers for editing an essay.

/// Uppercase the first character of every whitespace-separated word.
pub fn capitalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn check_sentence_ending(sentence: &str) -> bool {
    sentence.ends_with('.')
}

/// Trim surrounding whitespace, but only when the sentence starts or ends with
/// a space.
pub fn clean_up_spacing(sentence: &str) -> String {
    if sentence.starts_with(' ') || sentence.ends_with(' ') {
        sentence.trim().to_string()
    } else {
        sentence.to_string()
    }
}

/// Replace whole-word occurrences of `old_word` with `new_word`.
///
/// A word followed by a single trailing punctuation mark still matches and
/// keeps its punctuation. Words are re-joined with single spaces.
pub fn replace_word_choice(sentence: &str, old_word: &str, new_word: &str) -> String {
    sentence
        .split_whitespace()
        .map(|word| match split_trailing_punctuation(word) {
            (stem, Some(mark)) if stem == old_word => format!("{new_word}{mark}"),
            (_, Some(_)) => word.to_string(),
            (stem, None) if stem == old_word => new_word.to_string(),
            (_, None) => word.to_string(),
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Split a word into its stem and a trailing non-alphanumeric character, if any.
pub(crate) fn split_trailing_punctuation(word: &str) -> (&str, Option<char>) {
    match word.char_indices().next_back() {
        Some((index, last)) if !last.is_alphanumeric() => (&word[..index], Some(last)),
        _ => (word, None),
    }
}
