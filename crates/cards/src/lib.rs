// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to parse and format cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let card = "AH".parse::<Card>().unwrap();
//! assert_eq!(card, Card::new(Rank::Ace, Suit::Hearts));
//! ```
//!
//! and a [Hand] type that owns the five cards of a Poker hand in canonical
//! ascending rank order:
//!
//! ```
//! # use showdown_cards::Hand;
//! let hand = "KD5C2H9DTC".parse::<Hand>().unwrap();
//! assert_eq!(hand.to_string(), "2H5C9DTCKD");
//! ```
//!
//! Card tokens use the `23456789TJQKA` rank alphabet followed by the `DHCS`
//! suit alphabet, a hand token is five card tokens with no separators. Any
//! other text fails with a [ParseError].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseError, Rank, Suit};

mod hand;
pub use hand::Hand;
