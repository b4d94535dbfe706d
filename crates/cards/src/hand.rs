// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards Poker hand.
use serde::{Deserialize, Serialize};
use std::{fmt, str};

use crate::{Card, ParseError};

/// A five cards Poker hand.
///
/// A hand parses from a ten characters token, five card tokens with no
/// separators, and keeps its cards sorted by ascending rank, the order
/// used for its canonical text:
///
/// ```
/// # use showdown_cards::Hand;
/// let hand = "KD5C2H9DTC".parse::<Hand>().unwrap();
/// assert_eq!(hand.to_string(), "2H5C9DTCKD");
/// ```
///
/// The sort is stable, cards of equal rank keep their token order.
/// Duplicate card tokens are not rejected, the duplicates group like any
/// other cards of equal rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// The hand cards in ascending rank order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl str::FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Ascii only so that the two bytes slices below match characters.
        if s.len() != 10 || !s.is_ascii() {
            return Err(ParseError::InvalidHandToken(s.to_string()));
        }

        let mut cards = [
            s[0..2].parse::<Card>()?,
            s[2..4].parse::<Card>()?,
            s[4..6].parse::<Card>()?,
            s[6..8].parse::<Card>()?,
            s[8..10].parse::<Card>()?,
        ];

        cards.sort_by_key(|c| c.rank());

        Ok(Hand { cards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use rand::prelude::*;

    #[test]
    fn hand_parse_sorts_by_rank() {
        let hand = "KD5C2H9DTC".parse::<Hand>().unwrap();

        let ranks = hand.cards().iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            vec![Rank::Deuce, Rank::Five, Rank::Nine, Rank::Ten, Rank::King]
        );
        assert_eq!(hand.to_string(), "2H5C9DTCKD");
    }

    #[test]
    fn hand_sort_is_stable() {
        // The two fives keep their token order.
        let hand = "KD5C2H5DTC".parse::<Hand>().unwrap();
        assert_eq!(hand.to_string(), "2H5C5DTCKD");

        let hand = "KD5D2H5CTC".parse::<Hand>().unwrap();
        assert_eq!(hand.to_string(), "2H5D5CTCKD");
    }

    #[test]
    fn hand_parse_rejects_bad_lengths() {
        for token in ["", "9C", "9C8D7H6S", "9C8D7H6S5C4D", "9C8D7H6S5"] {
            assert_eq!(
                token.parse::<Hand>(),
                Err(ParseError::InvalidHandToken(token.to_string())),
                "{token:?}"
            );
        }
    }

    #[test]
    fn hand_parse_propagates_bad_cards() {
        assert_eq!(
            "9Z8D7H6S5C".parse::<Hand>(),
            Err(ParseError::InvalidCardToken("9Z".to_string()))
        );
        assert_eq!(
            "9C8D7H6S5X".parse::<Hand>(),
            Err(ParseError::InvalidCardToken("5X".to_string()))
        );
    }

    #[test]
    fn hand_parse_is_permutation_invariant() {
        let mut tokens = ["KD", "5C", "2H", "9D", "TC"];
        let expected = "KD5C2H9DTC".parse::<Hand>().unwrap();
        let mut rng = rand::rng();

        for _ in 0..100 {
            tokens.shuffle(&mut rng);
            let hand = tokens.concat().parse::<Hand>().unwrap();
            assert_eq!(hand, expected);
            assert_eq!(hand.to_string(), "2H5C9DTCKD");
        }
    }

    #[test]
    fn hand_accepts_duplicate_cards() {
        let hand = "7C7C2D3H4S".parse::<Hand>().unwrap();
        assert_eq!(hand.cards()[3], Card::new(Rank::Seven, Suit::Clubs));
        assert_eq!(hand.cards()[4], Card::new(Rank::Seven, Suit::Clubs));
    }
}
