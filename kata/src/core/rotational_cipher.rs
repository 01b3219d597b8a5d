//! Caesar rotation of ASCII letters.

/// Shift every ASCII letter in `text` by `key` places, wrapping within the
/// alphabet and keeping case. Other characters are copied unchanged.
pub fn rotate(text: &str, key: i32) -> String {
    let shift = key.rem_euclid(26) as u8;
    text.chars()
        .map(|ch| match ch {
            'a'..='z' => shift_letter(ch, b'a', shift),
            'A'..='Z' => shift_letter(ch, b'A', shift),
            _ => ch,
        })
        .collect()
}

fn shift_letter(ch: char, base: u8, shift: u8) -> char {
    char::from((ch as u8 - base + shift) % 26 + base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_by_zero_and_full_alphabet() {
        assert_eq!(rotate("a", 0), "a");
        assert_eq!(rotate("a", 26), "a");
    }

    #[test]
    fn wraps_around() {
        assert_eq!(rotate("n", 13), "a");
        assert_eq!(rotate("OMG", 5), "TRL");
    }

    #[test]
    fn keeps_punctuation_and_case() {
        assert_eq!(
            rotate("The quick brown fox jumps over the lazy dog.", 13),
            "Gur dhvpx oebja sbk whzcf bire gur ynml qbt."
        );
        assert_eq!(rotate("Let's eat, Grandma!", 21), "Gzo'n zvo, Bmviyhv!");
    }

    #[test]
    fn negative_key_reverses() {
        assert_eq!(rotate(&rotate("Hello", 7), -7), "Hello");
    }
}
