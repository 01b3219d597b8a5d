//! ISBN-10 validation.
//!
//! A candidate is normalized by removing every `-`; the remaining sequence must
//! hold exactly ten characters: nine ASCII digits followed by a check character
//! that is either a digit or `X`/`x` (value 10). The candidate is valid when
//! the weighted sum `Σ value(i) * (10 - i)` is divisible by 11.
//!
//! Whitespace is not stripped; it fails the digit checks like any other
//! character.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const LEN: usize = 10;
const MODULUS: u32 = 11;
const CHECK_X: u8 = 10;

/// Reason a candidate was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    #[error("expected 10 characters after removing hyphens, got {len}")]
    WrongLength { len: usize },

    #[error("character '{found}' at position {position} is not a digit")]
    NonDigit { position: usize, found: char },

    #[error("check character '{found}' must be a digit or 'X'")]
    InvalidCheckCharacter { found: char },

    #[error("checksum {checksum} is not divisible by 11")]
    ChecksumMismatch { checksum: u32 },
}

/// A validated ISBN-10. Stores the numeric value of each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Isbn10 {
    values: [u8; LEN],
}

impl Isbn10 {
    /// Validate `candidate` and report the first rule it breaks.
    pub fn parse(candidate: &str) -> Result<Self, IsbnError> {
        let normalized: Vec<char> = candidate.chars().filter(|ch| *ch != '-').collect();
        if normalized.len() != LEN {
            return Err(IsbnError::WrongLength {
                len: normalized.len(),
            });
        }

        let mut values = [0u8; LEN];
        for (position, ch) in normalized[..LEN - 1].iter().enumerate() {
            values[position] = ascii_digit(*ch).ok_or(IsbnError::NonDigit {
                position,
                found: *ch,
            })?;
        }

        let check = normalized[LEN - 1];
        values[LEN - 1] = match check {
            'X' | 'x' => CHECK_X,
            other => ascii_digit(other).ok_or(IsbnError::InvalidCheckCharacter { found: other })?,
        };

        let checksum = weighted_sum(&values);
        if checksum % MODULUS != 0 {
            return Err(IsbnError::ChecksumMismatch { checksum });
        }
        Ok(Self { values })
    }

    /// Weighted checksum of this ISBN (always a multiple of 11).
    pub fn checksum(&self) -> u32 {
        weighted_sum(&self.values)
    }
}

impl FromStr for Isbn10 {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Isbn10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            if *value == CHECK_X {
                f.write_str("X")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

/// Return whether `candidate` is a valid ISBN-10. Never panics.
pub fn is_valid(candidate: &str) -> bool {
    Isbn10::parse(candidate).is_ok()
}

fn ascii_digit(ch: char) -> Option<u8> {
    if ch.is_ascii_digit() {
        Some(ch as u8 - b'0')
    } else {
        None
    }
}

fn weighted_sum(values: &[u8; LEN]) -> u32 {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| u32::from(*value) * (LEN - position) as u32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_isbn() {
        assert!(is_valid("3-598-21508-8"));
    }

    #[test]
    fn rejects_single_digit_perturbation() {
        assert!(!is_valid("3-598-21507-8"));
        assert!(!is_valid("3-598-21508-9"));
    }

    #[test]
    fn check_character_x_counts_as_ten() {
        // 3*10 + 5*9 + 9*8 + 8*7 + 2*6 + 1*5 + 5*4 + 0*3 + 7*2 + 10 = 264 = 11 * 24
        let isbn = Isbn10::parse("359821507X").expect("valid");
        assert_eq!(isbn.checksum(), 264);
        assert!(is_valid("3-598-21507-X"));
    }

    #[test]
    fn lowercase_x_matches_uppercase() {
        assert_eq!(is_valid("359821507x"), is_valid("359821507X"));
        assert_eq!(
            Isbn10::parse("3-598-21507-x").expect("valid").to_string(),
            "359821507X"
        );
    }

    #[test]
    fn x_only_allowed_as_check_character() {
        assert_eq!(
            Isbn10::parse("3-598-2X507-9"),
            Err(IsbnError::NonDigit {
                position: 5,
                found: 'X'
            })
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Isbn10::parse("12345"),
            Err(IsbnError::WrongLength { len: 5 })
        );
        assert!(!is_valid(""));
        assert!(!is_valid("3-598-21508-88"));
        assert!(!is_valid("978-3-598-21508-8"));
    }

    #[test]
    fn rejects_letter_among_first_nine() {
        assert_eq!(
            Isbn10::parse("3-598-21A08-8"),
            Err(IsbnError::NonDigit {
                position: 6,
                found: 'A'
            })
        );
    }

    #[test]
    fn rejects_invalid_check_character() {
        assert_eq!(
            Isbn10::parse("3-598-21507-A"),
            Err(IsbnError::InvalidCheckCharacter { found: 'A' })
        );
    }

    #[test]
    fn rejects_checksum_mismatch() {
        assert!(matches!(
            Isbn10::parse("3-598-21508-9"),
            Err(IsbnError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn whitespace_is_not_stripped() {
        assert!(!is_valid(" 3598215088"));
        assert!(!is_valid("3598215088 "));
        assert!(!is_valid("3 598 21508 8"));
    }

    #[test]
    fn hyphen_placement_does_not_matter() {
        let digits = "3598215088";
        for split in 0..=digits.len() {
            let candidate = format!("{}-{}", &digits[..split], &digits[split..]);
            assert!(is_valid(&candidate), "{candidate}");
        }
        assert!(is_valid("--3-5-9-8-2-1-5-0-8-8--"));
    }

    #[test]
    fn multibyte_characters_count_as_single_characters() {
        assert_eq!(
            Isbn10::parse("359821508é"),
            Err(IsbnError::InvalidCheckCharacter { found: 'é' })
        );
    }
}
