//! Pig Latin translation of lowercase words.

const VOWELS: &str = "aeiou";
const VOWEL_SOUNDS: [&str; 7] = ["a", "e", "i", "o", "u", "xr", "yt"];

/// Translate each whitespace-separated word and join them with single spaces.
pub fn translate(text: &str) -> String {
    text.split_whitespace()
        .map(translate_word)
        .collect::<Vec<String>>()
        .join(" ")
}

fn translate_word(word: &str) -> String {
    if VOWEL_SOUNDS.iter().any(|sound| word.starts_with(sound)) {
        return format!("{word}ay");
    }

    let chars: Vec<char> = word.chars().collect();
    let mut split = chars.len();
    for (position, ch) in chars.iter().enumerate() {
        // "qu" travels with the consonant cluster in front of it.
        if *ch == 'q' && chars.get(position + 1) == Some(&'u') {
            split = position + 2;
            break;
        }
        if VOWELS.contains(*ch) || (*ch == 'y' && position > 0) {
            split = position;
            break;
        }
    }

    let (cluster, rest) = chars.split_at(split);
    let mut translated: String = rest.iter().chain(cluster).collect();
    translated.push_str("ay");
    translated
}
