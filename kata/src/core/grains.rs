//! Grains on a chessboard: each square doubles the previous one.

use crate::error::{KataError, Result};

const SQUARES: u32 = 64;

/// Grains on square `number` (1-based).
pub fn square(number: u32) -> Result<u64> {
    if !(1..=SQUARES).contains(&number) {
        return Err(KataError::OutOfRange {
            what: "square",
            value: number.to_string(),
            min: "1".to_string(),
            max: SQUARES.to_string(),
        });
    }
    Ok(1u64 << (number - 1))
}

/// Grains on the whole board: `2^64 - 1`.
pub fn total() -> u64 {
    u64::MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_squares() {
        assert_eq!(square(1), Ok(1));
        assert_eq!(square(16), Ok(32_768));
        assert_eq!(square(64), Ok(9_223_372_036_854_775_808));
    }

    #[test]
    fn out_of_range_squares() {
        assert!(square(0).is_err());
        assert!(square(65).is_err());
        assert_eq!(
            square(65).expect_err("out of range").to_string(),
            "square must be between 1 and 64, got 65"
        );
    }

    #[test]
    fn total_matches_sum_of_squares() {
        let sum: u64 = (1..=64).map(|n| square(n).expect("valid square")).sum();
        assert_eq!(total(), sum);
        assert_eq!(total(), 18_446_744_073_709_551_615);
    }
}
