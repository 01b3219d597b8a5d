//! Currency exchange arithmetic.

use crate::error::{KataError, Result};

/// Foreign currency received for `budget` at `exchange_rate`, rounded to cents.
///
/// Exact halves round to the even cent (`0.125` becomes `0.12`).
pub fn exchange_money(budget: f64, exchange_rate: f64) -> f64 {
    (budget / exchange_rate * 100.0).round_ties_even() / 100.0
}

pub fn get_change(budget: f64, exchanging_value: f64) -> f64 {
    budget - exchanging_value
}

pub fn get_value_of_bills(denomination: u64, number_of_bills: u64) -> Result<u64> {
    denomination
        .checked_mul(number_of_bills)
        .ok_or(KataError::Overflow { what: "bill value" })
}

pub fn get_number_of_bills(amount: f64, denomination: u64) -> Result<u64> {
    let amount = countable(amount)?;
    let denomination = nonzero(denomination)?;
    let bills = (amount / denomination).floor();
    // u64::MAX rounds up to 2^64 as f64, so anything at or above it is out of range.
    if bills >= u64::MAX as f64 {
        return Err(KataError::Overflow {
            what: "number of bills",
        });
    }
    Ok(bills as u64)
}

pub fn get_leftover_of_bills(amount: f64, denomination: u64) -> Result<f64> {
    let amount = countable(amount)?;
    let denomination = nonzero(denomination)?;
    Ok(amount.rem_euclid(denomination))
}

pub fn exchangeable_value(
    budget: f64,
    exchange_rate: f64,
    spread: u32,
    denomination: u64,
) -> Result<u64> {
    let rate_with_spread = exchange_rate * (1.0 + f64::from(spread) / 100.0);
    let foreign = budget / rate_with_spread;
    let bills = get_number_of_bills(foreign, denomination)?;
    get_value_of_bills(denomination, bills)
}

fn nonzero(denomination: u64) -> Result<f64> {
    if denomination == 0 {
        return Err(KataError::ZeroDenomination);
    }
    Ok(denomination as f64)
}

/// Amounts split into bills must be finite and non-negative.
fn countable(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(KataError::InvalidArgument {
            name: "amount",
            value: amount.to_string(),
            reason: "must be a finite, non-negative number".to_string(),
        });
    }
    Ok(amount)
}
