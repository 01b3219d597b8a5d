//! Practice exercises as pure Rust functions.
//!
//! - **[`core`]**: the exercises themselves (ISBN-10 validation, ciphers,
//!   number puzzles, game rules). No I/O, fully testable in isolation.
//! - **[`catalog`]**: a name for every exercise plus text-in/text-out
//!   evaluation, shared by the `kata` CLI and the `eval` case harness.
//! - **[`config`]**: optional `kata.toml` settings for CLI output.

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod logging;

pub use crate::core::isbn::is_valid;
pub use crate::error::{KataError, Result};

/// Version of the kata crate, recorded alongside eval results.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
