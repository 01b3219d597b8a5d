//! Error type shared by the exercise functions and the catalog.
//!
//! Exercises that can reject their input return `Result<T, KataError>`.
//! Pure predicates (pangram, leap year, ...) never fail and return plain values.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KataError {
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("Only positive integers are allowed, got {value}")]
    NotPositive { value: i64 },

    #[error("arithmetic overflow while computing {what}")]
    Overflow { what: &'static str },

    #[error("unknown card '{0}' (expected 2-10, J, Q, K or A)")]
    UnknownCard(String),

    #[error("word index {index} out of range for sentence with {len} words")]
    WordIndex { index: usize, len: usize },

    #[error("denomination must be > 0")]
    ZeroDenomination,

    #[error("{exercise} expects {expected} argument(s), got {got}")]
    Arity {
        exercise: &'static str,
        expected: String,
        got: usize,
    },

    #[error("invalid argument {name}='{value}': {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, KataError>;
