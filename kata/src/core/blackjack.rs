//! Blackjack hand evaluation for a two-card opening hand.

use std::fmt;
use std::str::FromStr;

use crate::error::KataError;

/// A playing card rank. Suits do not matter for these rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// Numeral card `2..=10`.
    Number(u8),
    Jack,
    Queen,
    King,
    Ace,
}

impl Card {
    pub fn is_ace(self) -> bool {
        self == Card::Ace
    }
}

impl FromStr for Card {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "J" => Ok(Card::Jack),
            "Q" => Ok(Card::Queen),
            "K" => Ok(Card::King),
            "A" => Ok(Card::Ace),
            other => match other.parse::<u8>() {
                Ok(rank @ 2..=10) => Ok(Card::Number(rank)),
                _ => Err(KataError::UnknownCard(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(rank) => write!(f, "{rank}"),
            Card::Jack => f.write_str("J"),
            Card::Queen => f.write_str("Q"),
            Card::King => f.write_str("K"),
            Card::Ace => f.write_str("A"),
        }
    }
}

/// Result of comparing two cards by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HigherCard {
    First(Card),
    Second(Card),
    Tie(Card, Card),
}

impl fmt::Display for HigherCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HigherCard::First(card) | HigherCard::Second(card) => write!(f, "{card}"),
            HigherCard::Tie(first, second) => write!(f, "{first}, {second}"),
        }
    }
}

/// Face cards are worth 10, an ace counts as 1, numerals their face value.
pub fn value_of_card(card: Card) -> u8 {
    match card {
        Card::Number(rank) => rank,
        Card::Jack | Card::Queen | Card::King => 10,
        Card::Ace => 1,
    }
}

pub fn higher_card(card_one: Card, card_two: Card) -> HigherCard {
    let (one, two) = (value_of_card(card_one), value_of_card(card_two));
    if one > two {
        HigherCard::First(card_one)
    } else if one < two {
        HigherCard::Second(card_two)
    } else {
        HigherCard::Tie(card_one, card_two)
    }
}

/// Value an incoming ace should take given the two cards already in hand.
pub fn value_of_ace(card_one: Card, card_two: Card) -> u8 {
    if card_one.is_ace() || card_two.is_ace() {
        return 1;
    }
    if value_of_card(card_one) + value_of_card(card_two) > 10 {
        1
    } else {
        11
    }
}

/// An ace together with a ten-valued card.
pub fn is_blackjack(card_one: Card, card_two: Card) -> bool {
    (card_one.is_ace() && value_of_card(card_two) == 10)
        || (card_two.is_ace() && value_of_card(card_one) == 10)
}

pub fn can_split_pairs(card_one: Card, card_two: Card) -> bool {
    value_of_card(card_one) == value_of_card(card_two)
}

pub fn can_double_down(card_one: Card, card_two: Card) -> bool {
    (9..=11).contains(&(value_of_card(card_one) + value_of_card(card_two)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(text: &str) -> Card {
        text.parse().expect("known card")
    }

    #[test]
    fn parses_ranks() {
        assert_eq!(card("10"), Card::Number(10));
        assert_eq!(card("K"), Card::King);
        assert_eq!(
            "1".parse::<Card>(),
            Err(KataError::UnknownCard("1".to_string()))
        );
        assert!("11".parse::<Card>().is_err());
        assert!("k".parse::<Card>().is_err());
    }

    #[test]
    fn card_values() {
        assert_eq!(value_of_card(card("2")), 2);
        assert_eq!(value_of_card(card("Q")), 10);
        assert_eq!(value_of_card(card("A")), 1);
    }

    #[test]
    fn higher_card_or_tie() {
        assert_eq!(higher_card(card("K"), card("2")), HigherCard::First(Card::King));
        assert_eq!(
            higher_card(card("4"), card("6")),
            HigherCard::Second(Card::Number(6))
        );
        let tie = higher_card(card("K"), card("10"));
        assert_eq!(tie, HigherCard::Tie(Card::King, Card::Number(10)));
        assert_eq!(tie.to_string(), "K, 10");
    }

    #[test]
    fn ace_value() {
        assert_eq!(value_of_ace(card("2"), card("3")), 11);
        assert_eq!(value_of_ace(card("5"), card("6")), 1);
        assert_eq!(value_of_ace(card("A"), card("2")), 1);
        assert_eq!(value_of_ace(card("K"), card("Q")), 1);
    }

    #[test]
    fn blackjack_hands() {
        assert!(is_blackjack(card("A"), card("K")));
        assert!(is_blackjack(card("10"), card("A")));
        assert!(!is_blackjack(card("A"), card("A")));
        assert!(!is_blackjack(card("10"), card("9")));
    }

    #[test]
    fn splitting_and_doubling() {
        assert!(can_split_pairs(card("Q"), card("K")));
        assert!(!can_split_pairs(card("10"), card("A")));
        assert!(can_double_down(card("A"), card("9")));
        assert!(can_double_down(card("5"), card("4")));
        assert!(!can_double_down(card("10"), card("2")));
    }
}
