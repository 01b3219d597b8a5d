//! Pure exercise implementations.
//!
//! Every function here is deterministic and free of I/O: arguments in, value
//! out. Fallible exercises return [`crate::error::KataError`].

pub mod affixes;
pub mod armstrong;
pub mod blackjack;
pub mod bob;
pub mod collatz;
pub mod currency_exchange;
pub mod essay_editor;
pub mod grains;
pub mod isbn;
pub mod isogram;
pub mod leap_year;
pub mod nuclear_reactor;
pub mod pacman;
pub mod pangram;
pub mod pig_latin;
pub mod raindrops;
pub mod rotational_cipher;
pub mod triangle;
