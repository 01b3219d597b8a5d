//! Nuclear reactor control conditions.

use std::fmt;

/// Efficiency band of a reactor relative to its theoretical maximum power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Efficiency {
    Green,
    Orange,
    Red,
    Black,
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Efficiency::Green => "green",
            Efficiency::Orange => "orange",
            Efficiency::Red => "red",
            Efficiency::Black => "black",
        })
    }
}

/// Fail-safe status derived from the thermal neutron production rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyStatus {
    Low,
    Normal,
    Danger,
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SafetyStatus::Low => "LOW",
            SafetyStatus::Normal => "NORMAL",
            SafetyStatus::Danger => "DANGER",
        })
    }
}

pub fn is_criticality_balanced(temperature: f64, neutrons_emitted: f64) -> bool {
    temperature < 800.0 && neutrons_emitted > 500.0 && temperature * neutrons_emitted < 500_000.0
}

pub fn reactor_efficiency(voltage: f64, current: f64, theoretical_max_power: f64) -> Efficiency {
    let efficiency = voltage * current / theoretical_max_power * 100.0;
    if efficiency >= 80.0 {
        Efficiency::Green
    } else if efficiency >= 60.0 {
        Efficiency::Orange
    } else if efficiency >= 30.0 {
        Efficiency::Red
    } else {
        Efficiency::Black
    }
}

/// `NORMAL` within 10% of `threshold`, otherwise `LOW` or `DANGER`.
pub fn fail_safe(temperature: f64, neutrons_produced_per_second: f64, threshold: f64) -> SafetyStatus {
    let rate = temperature * neutrons_produced_per_second;
    if rate < threshold * 0.9 {
        SafetyStatus::Low
    } else if rate <= threshold * 1.1 {
        SafetyStatus::Normal
    } else {
        SafetyStatus::Danger
    }
}
