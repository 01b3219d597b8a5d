//! Stable exit codes for kata CLI commands.

/// Command succeeded; every ISBN candidate was valid.
pub const OK: i32 = 0;
/// Command failed due to invalid arguments, config, or I/O errors.
pub const INVALID: i32 = 1;
/// `kata isbn` rejected at least one candidate.
pub const REJECTED: i32 = 2;
