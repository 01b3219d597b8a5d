//! Armstrong (narcissistic) numbers.

/// A number is an Armstrong number when it equals the sum of its digits each
/// raised to the number of digits.
pub fn is_armstrong_number(number: u64) -> bool {
    let digits: Vec<u32> = number
        .to_string()
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .collect();
    let width = digits.len() as u32;
    let sum: u128 = digits
        .iter()
        .map(|digit| u128::from(*digit).pow(width))
        .sum();
    sum == u128::from(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits_are_armstrong() {
        assert!(is_armstrong_number(0));
        assert!(is_armstrong_number(5));
    }

    #[test]
    fn two_digit_numbers_are_not() {
        assert!(!is_armstrong_number(10));
    }

    #[test]
    fn known_armstrong_numbers() {
        assert!(is_armstrong_number(153));
        assert!(is_armstrong_number(9_474));
        assert!(is_armstrong_number(9_926_315));
        assert!(!is_armstrong_number(100));
        assert!(!is_armstrong_number(9_475));
    }

    #[test]
    fn large_inputs_do_not_overflow() {
        assert!(!is_armstrong_number(u64::MAX));
        assert!(!is_armstrong_number(99_999_999_999_999_999));
    }
}
