// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand classifier.
//!
//! Classifies a five cards [Hand] into one of the nine standard categories
//! and computes a score that totally orders hands across and within
//! categories.
//!
//! To classify a hand parse it and use [HandValue] to get its category and
//! score:
//!
//! ```
//! # use showdown_eval::*;
//! let straight = "8C9DTH6S7D".parse::<Hand>().unwrap();
//! let flush = "2H8H9HJHKH".parse::<Hand>().unwrap();
//!
//! let v1 = HandValue::eval(&straight);
//! assert_eq!(v1.rank(), HandRank::Straight);
//! assert_eq!(v1.score(), 510);
//!
//! // Any flush outscores any straight.
//! let v2 = HandValue::eval(&flush);
//! assert!(v2 > v1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Hand, ParseError, Rank, Suit};
