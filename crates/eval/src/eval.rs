// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Hand, Rank};

/// The nine hand categories in increasing strength order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No matching ranks, no straight, no flush.
    HighCard,
    /// Two cards of one rank.
    Pair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and a pair of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks of one suit.
    StraightFlush,
}

impl HandRank {
    /// The category base weight, 100 for a high card up to 900 for a
    /// straight flush.
    ///
    /// A score adds at most 14 to the base, so any hand of a higher
    /// category outscores any hand of a lower one.
    pub fn base(self) -> u32 {
        (self as u32 + 1) * 100
    }

    /// The category display label.
    pub fn label(self) -> &'static str {
        match self {
            HandRank::HighCard => "HighCard",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Number of cards holding a rank in a hand.
#[derive(Debug, Clone, Copy)]
struct RankCount {
    rank: Rank,
    count: u8,
}

/// The value of a classified hand.
///
/// A value pairs the hand category with a score, the category base weight
/// plus the decisive rank value, so that the hand with the greater value
/// is the stronger hand.
///
/// Ties within a category are broken by the decisive rank only: two pairs
/// score by the higher pair, full houses by the trips rank, and kickers
/// are ignored everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    score: u32,
}

impl HandValue {
    /// Classifies a hand.
    pub fn eval(hand: &Hand) -> HandValue {
        let cards = hand.cards();
        let first_suit = cards[0].suit();

        let mut is_flush = true;
        let mut is_straight = true;
        let mut counts: Vec<RankCount> = Vec::with_capacity(Hand::SIZE);

        for (index, card) in cards.iter().enumerate() {
            if card.suit() != first_suit {
                is_flush = false;
            }

            if index > 0 {
                let step = card.rank().value() - cards[index - 1].rank().value();
                // An ace in last position may still close a wheel, the
                // spread check below settles it.
                if step != 1 && !(card.rank() == Rank::Ace && index == 4) {
                    is_straight = false;
                }
            }

            match counts.iter_mut().find(|rc| rc.rank == card.rank()) {
                Some(rc) => rc.count += 1,
                None => counts.push(RankCount {
                    rank: card.rank(),
                    count: 1,
                }),
            }
        }

        // All ranks distinct, the only shape that can hold a straight or a
        // flush; entries are in ascending rank order as the hand is sorted.
        if counts.len() == 5 {
            // Five consecutive ranks spread to 4, the wheel 2345A to 12.
            let spread = counts[4].rank.value() - counts[0].rank.value();
            let is_straight = is_straight && (spread == 4 || spread == 12);

            if is_straight {
                // The wheel plays as a five high straight.
                let top = if spread == 12 { Rank::Five } else { counts[4].rank };
                let rank = if is_flush {
                    HandRank::StraightFlush
                } else {
                    HandRank::Straight
                };
                return HandValue::new(rank, top);
            }

            let rank = if is_flush {
                HandRank::Flush
            } else {
                HandRank::HighCard
            };
            return HandValue::new(rank, counts[4].rank);
        }

        // One pair and three singles, kickers are ignored.
        if counts.len() == 4 {
            for rc in &counts {
                if rc.count == 2 {
                    return HandValue::new(HandRank::Pair, rc.rank);
                }
            }
        }

        // Trips and two singles, or two pairs and a single.
        if counts.len() == 3 {
            let mut high_pair = None;

            for rc in &counts {
                if rc.count == 3 {
                    return HandValue::new(HandRank::ThreeOfAKind, rc.rank);
                }

                if rc.count == 2 {
                    match high_pair {
                        None => high_pair = Some(rc.rank),
                        // The second pair is the higher one as entries come
                        // in ascending rank order.
                        Some(first) if rc.rank > first => {
                            return HandValue::new(HandRank::TwoPair, rc.rank);
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        // Quads and a single, or trips and a pair; the pair rank is not
        // part of a full house score.
        if counts.len() == 2 {
            for rc in &counts {
                if rc.count <= 2 {
                    continue;
                }

                if rc.count == 4 {
                    return HandValue::new(HandRank::FourOfAKind, rc.rank);
                }

                if rc.count == 3 {
                    return HandValue::new(HandRank::FullHouse, rc.rank);
                }
            }
        }

        // Five cards always group into 5, 4, 3, or 2 rank entries, all
        // returned above; reaching this point means the grouping is broken.
        debug_assert!(false, "no category for rank groups {counts:?}");
        HandValue::new(HandRank::HighCard, counts[counts.len() - 1].rank)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand score.
    pub fn score(&self) -> u32 {
        self.score
    }

    fn new(rank: HandRank, decisive: Rank) -> HandValue {
        HandValue {
            rank,
            score: rank.base() + decisive.value(),
        }
    }
}
