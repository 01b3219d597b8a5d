//! Collatz conjecture step counting.

use crate::error::{KataError, Result};

/// Count the steps needed to reach 1: halve even numbers, map odd `n` to
/// `3n + 1`.
pub fn steps(number: i64) -> Result<u64> {
    if number <= 0 {
        return Err(KataError::NotPositive { value: number });
    }
    let mut current = number as u64;
    let mut count = 0;
    while current > 1 {
        current = if current % 2 == 0 {
            current / 2
        } else {
            current
                .checked_mul(3)
                .and_then(|tripled| tripled.checked_add(1))
                .ok_or(KataError::Overflow {
                    what: "collatz sequence",
                })?
        };
        count += 1;
    }
    Ok(count)
}
