// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str};
use thiserror::Error;

/// Errors from parsing cards and hands text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A card token with a rank or suit symbol outside the alphabets.
    #[error("invalid card token {0:?}")]
    InvalidCardToken(String),
    /// A hand token whose length is not exactly ten characters.
    #[error("invalid hand token {0:?}")]
    InvalidHandToken(String),
}

/// A Poker card.
///
/// A card pairs a [Rank] with a [Suit] and parses from a two characters
/// token, rank symbol first:
///
/// ```
/// # use showdown_cards::{Card, Rank, Suit};
/// let card = "KD".parse::<Card>().unwrap();
/// assert_eq!(card, Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(card.to_string(), "KD");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl str::FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbols = match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                (Rank::from_symbol(rank), Suit::from_symbol(suit))
            }
            _ => (None, None),
        };

        match symbols {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(ParseError::InvalidCardToken(s.to_string())),
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The rank face value, 2 for a deuce up to 14 for an ace.
    pub fn value(self) -> u32 {
        self as u32 + 2
    }

    /// The rank for a symbol in the `23456789TJQKA` alphabet.
    pub fn from_symbol(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no ordering, they only matter for flush detection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Clubs suit.
    Clubs,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// The suit for a symbol in the `DHCS` alphabet.
    pub fn from_symbol(c: char) -> Option<Suit> {
        let suit = match c {
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            _ => return None,
        };

        Some(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    const RANKS: &str = "23456789TJQKA";
    const SUITS: &str = "DHCS";

    #[test]
    fn card_parse() {
        let c = "KD".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::King, Suit::Diamonds));

        let c = "5S".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Five, Suit::Spades));

        let c = "TH".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Hearts));

        let c = "AC".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ace, Suit::Clubs));
    }

    #[test]
    fn card_parse_rejects_bad_tokens() {
        for token in ["9Z", "ZD", "1D", "0D", "9", "", "9CX", "Td", "tD"] {
            assert_eq!(
                token.parse::<Card>(),
                Err(ParseError::InvalidCardToken(token.to_string())),
                "{token:?}"
            );
        }
    }

    #[test]
    fn card_tokens_roundtrip() {
        let mut cards = HashSet::default();

        for rank in RANKS.chars() {
            for suit in SUITS.chars() {
                let token = format!("{rank}{suit}");
                let card = token.parse::<Card>().unwrap();
                assert_eq!(card.to_string(), token);
                cards.insert(card);
            }
        }

        // One distinct card for every token in the alphabets.
        assert_eq!(cards.len(), 52);
    }

    #[test]
    fn rank_order_and_value() {
        let ranks = RANKS
            .chars()
            .map(|c| Rank::from_symbol(c).unwrap())
            .collect::<Vec<_>>();

        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }

        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
    }
}
