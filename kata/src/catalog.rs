//! Named catalog of every exercise.
//!
//! Each [`Exercise`] knows its topic, arity, and how to evaluate itself from
//! textual arguments. Results are rendered as text so the CLI and the eval
//! harness can print and compare them without knowing the concrete types.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::blackjack::{self, Card};
use crate::core::{
    affixes, armstrong, bob, collatz, currency_exchange, essay_editor, grains, isbn, isogram,
    leap_year, nuclear_reactor, pacman, pangram, pig_latin, raindrops, rotational_cipher, triangle,
};
use crate::error::{KataError, Result};

/// Exercise family, used to group `kata list` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Strings,
    Numbers,
    Booleans,
    Comparisons,
    Conditionals,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Topic::Strings => "strings",
            Topic::Numbers => "numbers",
            Topic::Booleans => "booleans",
            Topic::Comparisons => "comparisons",
            Topic::Conditionals => "conditionals",
        })
    }
}

/// Number of textual arguments an exercise accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(expected) => count == expected,
            Arity::AtLeast(min) => count >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(expected) => write!(f, "{expected}"),
            Arity::AtLeast(min) => write!(f, "at least {min}"),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    IsbnVerifier,
    Pangram,
    Isogram,
    RotationalCipher,
    CapitalizeTitle,
    CheckSentenceEnding,
    CleanUpSpacing,
    ReplaceWordChoice,
    AddPrefixUn,
    MakeWordGroups,
    RemoveSuffixNess,
    AdjectiveToVerb,
    CollatzSteps,
    ArmstrongNumber,
    GrainsSquare,
    GrainsTotal,
    ExchangeMoney,
    GetChange,
    GetValueOfBills,
    GetNumberOfBills,
    GetLeftoverOfBills,
    ExchangeableValue,
    LeapYear,
    Equilateral,
    Isosceles,
    Scalene,
    EatGhost,
    Score,
    Lose,
    Win,
    ValueOfCard,
    HigherCard,
    ValueOfAce,
    IsBlackjack,
    CanSplitPairs,
    CanDoubleDown,
    PigLatin,
    CriticalityBalanced,
    ReactorEfficiency,
    FailSafe,
    Raindrops,
    BobResponse,
}

impl Exercise {
    /// Every exercise, in catalog order.
    pub fn all() -> &'static [Exercise] {
        Exercise::value_variants()
    }

    /// Kebab-case name used on the command line and in case files.
    pub fn name(self) -> &'static str {
        match self {
            Exercise::IsbnVerifier => "isbn-verifier",
            Exercise::Pangram => "pangram",
            Exercise::Isogram => "isogram",
            Exercise::RotationalCipher => "rotational-cipher",
            Exercise::CapitalizeTitle => "capitalize-title",
            Exercise::CheckSentenceEnding => "check-sentence-ending",
            Exercise::CleanUpSpacing => "clean-up-spacing",
            Exercise::ReplaceWordChoice => "replace-word-choice",
            Exercise::AddPrefixUn => "add-prefix-un",
            Exercise::MakeWordGroups => "make-word-groups",
            Exercise::RemoveSuffixNess => "remove-suffix-ness",
            Exercise::AdjectiveToVerb => "adjective-to-verb",
            Exercise::CollatzSteps => "collatz-steps",
            Exercise::ArmstrongNumber => "armstrong-number",
            Exercise::GrainsSquare => "grains-square",
            Exercise::GrainsTotal => "grains-total",
            Exercise::ExchangeMoney => "exchange-money",
            Exercise::GetChange => "get-change",
            Exercise::GetValueOfBills => "get-value-of-bills",
            Exercise::GetNumberOfBills => "get-number-of-bills",
            Exercise::GetLeftoverOfBills => "get-leftover-of-bills",
            Exercise::ExchangeableValue => "exchangeable-value",
            Exercise::LeapYear => "leap-year",
            Exercise::Equilateral => "equilateral",
            Exercise::Isosceles => "isosceles",
            Exercise::Scalene => "scalene",
            Exercise::EatGhost => "eat-ghost",
            Exercise::Score => "score",
            Exercise::Lose => "lose",
            Exercise::Win => "win",
            Exercise::ValueOfCard => "value-of-card",
            Exercise::HigherCard => "higher-card",
            Exercise::ValueOfAce => "value-of-ace",
            Exercise::IsBlackjack => "is-blackjack",
            Exercise::CanSplitPairs => "can-split-pairs",
            Exercise::CanDoubleDown => "can-double-down",
            Exercise::PigLatin => "pig-latin",
            Exercise::CriticalityBalanced => "criticality-balanced",
            Exercise::ReactorEfficiency => "reactor-efficiency",
            Exercise::FailSafe => "fail-safe",
            Exercise::Raindrops => "raindrops",
            Exercise::BobResponse => "bob-response",
        }
    }

    pub fn topic(self) -> Topic {
        use Exercise as E;
        match self {
            E::IsbnVerifier
            | E::Pangram
            | E::Isogram
            | E::RotationalCipher
            | E::CapitalizeTitle
            | E::CheckSentenceEnding
            | E::CleanUpSpacing
            | E::ReplaceWordChoice
            | E::AddPrefixUn
            | E::MakeWordGroups
            | E::RemoveSuffixNess
            | E::AdjectiveToVerb => Topic::Strings,
            E::CollatzSteps
            | E::ArmstrongNumber
            | E::GrainsSquare
            | E::GrainsTotal
            | E::ExchangeMoney
            | E::GetChange
            | E::GetValueOfBills
            | E::GetNumberOfBills
            | E::GetLeftoverOfBills
            | E::ExchangeableValue => Topic::Numbers,
            E::LeapYear
            | E::Equilateral
            | E::Isosceles
            | E::Scalene
            | E::EatGhost
            | E::Score
            | E::Lose
            | E::Win => Topic::Booleans,
            E::ValueOfCard
            | E::HigherCard
            | E::ValueOfAce
            | E::IsBlackjack
            | E::CanSplitPairs
            | E::CanDoubleDown => Topic::Comparisons,
            E::PigLatin
            | E::CriticalityBalanced
            | E::ReactorEfficiency
            | E::FailSafe
            | E::Raindrops
            | E::BobResponse => Topic::Conditionals,
        }
    }

    /// Argument names, in order. Variadic exercises list their first name only.
    pub fn params(self) -> &'static [&'static str] {
        use Exercise as E;
        match self {
            E::IsbnVerifier => &["candidate"],
            E::Pangram | E::CheckSentenceEnding | E::CleanUpSpacing => &["sentence"],
            E::Isogram => &["phrase"],
            E::RotationalCipher => &["text", "key"],
            E::CapitalizeTitle => &["title"],
            E::ReplaceWordChoice => &["sentence", "old_word", "new_word"],
            E::AddPrefixUn | E::RemoveSuffixNess => &["word"],
            E::MakeWordGroups => &["prefix", "words..."],
            E::AdjectiveToVerb => &["sentence", "index"],
            E::CollatzSteps | E::ArmstrongNumber | E::GrainsSquare | E::Raindrops => &["number"],
            E::GrainsTotal => &[],
            E::ExchangeMoney => &["budget", "exchange_rate"],
            E::GetChange => &["budget", "exchanging_value"],
            E::GetValueOfBills => &["denomination", "number_of_bills"],
            E::GetNumberOfBills | E::GetLeftoverOfBills => &["amount", "denomination"],
            E::ExchangeableValue => &["budget", "exchange_rate", "spread", "denomination"],
            E::LeapYear => &["year"],
            E::Equilateral | E::Isosceles | E::Scalene => &["a", "b", "c"],
            E::EatGhost | E::Lose => &["power_pellet_active", "touching_ghost"],
            E::Score => &["touching_power_pellet", "touching_dot"],
            E::Win => &[
                "has_eaten_all_dots",
                "power_pellet_active",
                "touching_ghost",
            ],
            E::ValueOfCard => &["card"],
            E::HigherCard
            | E::ValueOfAce
            | E::IsBlackjack
            | E::CanSplitPairs
            | E::CanDoubleDown => &["card_one", "card_two"],
            E::PigLatin => &["text"],
            E::CriticalityBalanced => &["temperature", "neutrons_emitted"],
            E::ReactorEfficiency => &["voltage", "current", "theoretical_max_power"],
            E::FailSafe => &["temperature", "neutrons_produced_per_second", "threshold"],
            E::BobResponse => &["remark"],
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Exercise::MakeWordGroups => Arity::AtLeast(1),
            other => Arity::Exact(other.params().len()),
        }
    }

    pub fn summary(self) -> &'static str {
        use Exercise as E;
        match self {
            E::IsbnVerifier => "validate an ISBN-10 (hyphens allowed, X check digit)",
            E::Pangram => "does the sentence use every letter a-z",
            E::Isogram => "does the phrase avoid repeating letters",
            E::RotationalCipher => "Caesar-rotate ASCII letters by a key",
            E::CapitalizeTitle => "capitalize the first letter of every word",
            E::CheckSentenceEnding => "does the sentence end with a period",
            E::CleanUpSpacing => "trim surrounding whitespace from a padded sentence",
            E::ReplaceWordChoice => "replace a word, keeping trailing punctuation",
            E::AddPrefixUn => "prefix a word with 'un'",
            E::MakeWordGroups => "prefix every word of a group",
            E::RemoveSuffixNess => "strip a 'ness' suffix",
            E::AdjectiveToVerb => "turn the adjective at an index into a verb",
            E::CollatzSteps => "steps for the Collatz sequence to reach 1",
            E::ArmstrongNumber => "is the number an Armstrong number",
            E::GrainsSquare => "grains on a chessboard square (1-64)",
            E::GrainsTotal => "grains on the whole chessboard",
            E::ExchangeMoney => "foreign currency received for a budget",
            E::GetChange => "money left after exchanging",
            E::GetValueOfBills => "total value of a number of bills",
            E::GetNumberOfBills => "whole bills that fit into an amount",
            E::GetLeftoverOfBills => "amount left after taking whole bills",
            E::ExchangeableValue => "maximum bill value after the exchange spread",
            E::LeapYear => "is the year a Gregorian leap year",
            E::Equilateral => "are all three sides of a valid triangle equal",
            E::Isosceles => "are at least two sides of a valid triangle equal",
            E::Scalene => "are all sides of a valid triangle different",
            E::EatGhost => "can Pac-Man eat the ghost",
            E::Score => "does Pac-Man score",
            E::Lose => "does Pac-Man lose",
            E::Win => "does Pac-Man win",
            E::ValueOfCard => "blackjack value of a card",
            E::HigherCard => "higher-valued of two cards (both on a tie)",
            E::ValueOfAce => "value an incoming ace should take",
            E::IsBlackjack => "is the hand a natural blackjack",
            E::CanSplitPairs => "can the hand be split",
            E::CanDoubleDown => "can the hand double down",
            E::PigLatin => "translate text into Pig Latin",
            E::CriticalityBalanced => "is the reactor criticality balanced",
            E::ReactorEfficiency => "reactor efficiency band",
            E::FailSafe => "reactor fail-safe status",
            E::Raindrops => "raindrop sounds for the number's factors",
            E::BobResponse => "Bob's reply to a remark",
        }
    }

    /// Evaluate the exercise on textual arguments and render the result.
    pub fn evaluate(self, args: &[String]) -> Result<String> {
        let arity = self.arity();
        if !arity.accepts(args.len()) {
            return Err(KataError::Arity {
                exercise: self.name(),
                expected: arity.to_string(),
                got: args.len(),
            });
        }
        let args = Args {
            values: args,
            names: self.params(),
        };

        use Exercise as E;
        let output = match self {
            E::IsbnVerifier => isbn::is_valid(args.text(0)).to_string(),
            E::Pangram => pangram::is_pangram(args.text(0)).to_string(),
            E::Isogram => isogram::is_isogram(args.text(0)).to_string(),
            E::RotationalCipher => rotational_cipher::rotate(args.text(0), args.parse(1)?),
            E::CapitalizeTitle => essay_editor::capitalize_title(args.text(0)),
            E::CheckSentenceEnding => essay_editor::check_sentence_ending(args.text(0)).to_string(),
            E::CleanUpSpacing => essay_editor::clean_up_spacing(args.text(0)),
            E::ReplaceWordChoice => {
                essay_editor::replace_word_choice(args.text(0), args.text(1), args.text(2))
            }
            E::AddPrefixUn => affixes::add_prefix_un(args.text(0)),
            E::MakeWordGroups => {
                let words: Vec<&str> = args.values.iter().map(String::as_str).collect();
                affixes::make_word_groups(&words)
            }
            E::RemoveSuffixNess => affixes::remove_suffix_ness(args.text(0)),
            E::AdjectiveToVerb => affixes::adjective_to_verb(args.text(0), args.parse(1)?)?,
            E::CollatzSteps => collatz::steps(args.parse(0)?)?.to_string(),
            E::ArmstrongNumber => armstrong::is_armstrong_number(args.parse(0)?).to_string(),
            E::GrainsSquare => grains::square(args.parse(0)?)?.to_string(),
            E::GrainsTotal => grains::total().to_string(),
            E::ExchangeMoney => {
                currency_exchange::exchange_money(args.parse(0)?, args.parse(1)?).to_string()
            }
            E::GetChange => {
                currency_exchange::get_change(args.parse(0)?, args.parse(1)?).to_string()
            }
            E::GetValueOfBills => {
                currency_exchange::get_value_of_bills(args.parse(0)?, args.parse(1)?)?
                    .to_string()
            }
            E::GetNumberOfBills => {
                currency_exchange::get_number_of_bills(args.parse(0)?, args.parse(1)?)?
                    .to_string()
            }
            E::GetLeftoverOfBills => {
                currency_exchange::get_leftover_of_bills(args.parse(0)?, args.parse(1)?)?
                    .to_string()
            }
            E::ExchangeableValue => currency_exchange::exchangeable_value(
                args.parse(0)?,
                args.parse(1)?,
                args.parse(2)?,
                args.parse(3)?,
            )?
            .to_string(),
            E::LeapYear => leap_year::leap_year(args.parse(0)?).to_string(),
            E::Equilateral => triangle::equilateral(args.sides()?).to_string(),
            E::Isosceles => triangle::isosceles(args.sides()?).to_string(),
            E::Scalene => triangle::scalene(args.sides()?).to_string(),
            E::EatGhost => pacman::eat_ghost(args.parse(0)?, args.parse(1)?).to_string(),
            E::Score => pacman::score(args.parse(0)?, args.parse(1)?).to_string(),
            E::Lose => pacman::lose(args.parse(0)?, args.parse(1)?).to_string(),
            E::Win => pacman::win(args.parse(0)?, args.parse(1)?, args.parse(2)?).to_string(),
            E::ValueOfCard => blackjack::value_of_card(args.card(0)?).to_string(),
            E::HigherCard => blackjack::higher_card(args.card(0)?, args.card(1)?).to_string(),
            E::ValueOfAce => blackjack::value_of_ace(args.card(0)?, args.card(1)?).to_string(),
            E::IsBlackjack => blackjack::is_blackjack(args.card(0)?, args.card(1)?).to_string(),
            E::CanSplitPairs => {
                blackjack::can_split_pairs(args.card(0)?, args.card(1)?).to_string()
            }
            E::CanDoubleDown => {
                blackjack::can_double_down(args.card(0)?, args.card(1)?).to_string()
            }
            E::PigLatin => pig_latin::translate(args.text(0)),
            E::CriticalityBalanced => {
                nuclear_reactor::is_criticality_balanced(args.parse(0)?, args.parse(1)?)
                    .to_string()
            }
            E::ReactorEfficiency => nuclear_reactor::reactor_efficiency(
                args.parse(0)?,
                args.parse(1)?,
                args.parse(2)?,
            )
            .to_string(),
            E::FailSafe => {
                nuclear_reactor::fail_safe(args.parse(0)?, args.parse(1)?, args.parse(2)?)
                    .to_string()
            }
            E::Raindrops => raindrops::convert(args.parse(0)?),
            E::BobResponse => bob::response(args.text(0)).to_string(),
        };
        Ok(output)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positional arguments paired with their parameter names for error messages.
/// Arity has been checked before any accessor is called.
struct Args<'a> {
    values: &'a [String],
    names: &'static [&'static str],
}

impl Args<'_> {
    fn text(&self, index: usize) -> &str {
        &self.values[index]
    }

    fn name(&self, index: usize) -> &'static str {
        self.names.get(index).copied().unwrap_or("arg")
    }

    fn parse<T>(&self, index: usize) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let value = self.text(index);
        value
            .trim()
            .parse()
            .map_err(|err: T::Err| KataError::InvalidArgument {
                name: self.name(index),
                value: value.to_string(),
                reason: err.to_string(),
            })
    }

    fn card(&self, index: usize) -> Result<Card> {
        self.text(index).parse()
    }

    fn sides(&self) -> Result<[f64; 3]> {
        Ok([self.parse(0)?, self.parse(1)?, self.parse(2)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(exercise: Exercise, args: &[&str]) -> Result<String> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        exercise.evaluate(&args)
    }

    #[test]
    fn names_match_cli_and_serde_spelling() {
        for exercise in Exercise::all() {
            let from_cli = <Exercise as ValueEnum>::from_str(exercise.name(), false)
                .expect("clap name parses");
            assert_eq!(from_cli, *exercise);
            let from_serde: Exercise =
                serde_json::from_str(&format!("\"{}\"", exercise.name())).expect("serde name");
            assert_eq!(from_serde, *exercise);
        }
    }

    #[test]
    fn params_cover_arity() {
        for exercise in Exercise::all() {
            match exercise.arity() {
                Arity::Exact(count) => assert_eq!(exercise.params().len(), count, "{exercise}"),
                Arity::AtLeast(min) => assert!(exercise.params().len() > min, "{exercise}"),
            }
            assert!(!exercise.summary().is_empty());
        }
    }

    #[test]
    fn evaluates_isbn() {
        assert_eq!(eval(Exercise::IsbnVerifier, &["3-598-21508-8"]).unwrap(), "true");
        assert_eq!(eval(Exercise::IsbnVerifier, &["3-598-21508-9"]).unwrap(), "false");
    }

    #[test]
    fn evaluates_across_topics() {
        assert_eq!(eval(Exercise::RotationalCipher, &["OMG", "5"]).unwrap(), "TRL");
        assert_eq!(
            eval(Exercise::MakeWordGroups, &["en", "close", "joy"]).unwrap(),
            "en :: enclose :: enjoy"
        );
        assert_eq!(eval(Exercise::GrainsTotal, &[]).unwrap(), "18446744073709551615");
        assert_eq!(eval(Exercise::GetLeftoverOfBills, &["127.5", "20"]).unwrap(), "7.5");
        assert_eq!(eval(Exercise::Win, &["true", "false", "false"]).unwrap(), "true");
        assert_eq!(eval(Exercise::HigherCard, &["K", "10"]).unwrap(), "K, 10");
        assert_eq!(eval(Exercise::FailSafe, &["10", "901", "10000"]).unwrap(), "NORMAL");
        assert_eq!(eval(Exercise::BobResponse, &["WATCH OUT!"]).unwrap(), "Whoa, chill out!");
    }

    #[test]
    fn arity_mismatch_is_reported() {
        let err = eval(Exercise::RotationalCipher, &["only text"]).unwrap_err();
        assert_eq!(
            err,
            KataError::Arity {
                exercise: "rotational-cipher",
                expected: "2".to_string(),
                got: 1,
            }
        );
        assert!(eval(Exercise::MakeWordGroups, &[]).is_err());
    }

    #[test]
    fn invalid_argument_names_the_parameter() {
        let err = eval(Exercise::LeapYear, &["soon"]).unwrap_err();
        match err {
            KataError::InvalidArgument { name, value, .. } => {
                assert_eq!(name, "year");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn exercise_errors_propagate() {
        assert_eq!(
            eval(Exercise::CollatzSteps, &["0"]).unwrap_err(),
            KataError::NotPositive { value: 0 }
        );
        assert_eq!(
            eval(Exercise::ValueOfCard, &["Z"]).unwrap_err(),
            KataError::UnknownCard("Z".to_string())
        );
        assert!(eval(Exercise::GrainsSquare, &["65"]).is_err());
    }

    #[test]
    fn bill_arithmetic_at_u64_bounds_errors() {
        assert_eq!(
            eval(Exercise::GetValueOfBills, &["18446744073709551615", "1"]).unwrap(),
            "18446744073709551615"
        );
        assert_eq!(
            eval(Exercise::GetValueOfBills, &["18446744073709551615", "2"]).unwrap_err(),
            KataError::Overflow { what: "bill value" }
        );
        assert!(matches!(
            eval(Exercise::ExchangeableValue, &["1e30", "1", "0", "2"]),
            Err(KataError::Overflow { .. })
        ));
        assert!(matches!(
            eval(Exercise::GetNumberOfBills, &["-5", "10"]),
            Err(KataError::InvalidArgument { .. })
        ));
    }
}
