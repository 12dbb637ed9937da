// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown five cards hand classifier.
//!
//! The classifier maps any five cards to a [Ranking], a hand category and a
//! dense tiebreak ordinal inside the category, so that comparing two rankings
//! is enough to decide a showdown. Hands are evaluated from their structure,
//! there are no precomputed tables, and a [HandCache] memoizes the rankings
//! for enumerations that classify millions of hands.
//!
//! To classify a hand and compare it with another:
//!
//! ```
//! # use showdown_eval::*;
//! let parse = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>())
//!         .collect::<Result<Vec<_>, _>>()
//!         .unwrap()
//! };
//!
//! let r1 = classify(&parse("KS KD 4C 4H 7S")).unwrap();
//! let r2 = classify(&parse("JC JD 2S 7H 9D")).unwrap();
//! assert_eq!(r1.category(), Category::TwoPair);
//! assert!(r1 > r2);
//!
//! // Best hands out of seven cards.
//! let best = best_hands(&parse("AS AD KS QS JS AC KD")).unwrap();
//! assert_eq!(best[0].ranking().category(), Category::FullHouse);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod best;
pub use best::{best_hands, best_ranking};

mod cache;
pub use cache::HandCache;

mod classify;
pub use classify::classify;

mod hand;
pub use hand::Hand;

pub mod ordinal;
pub use ordinal::combinatorial_rank;

mod ranking;
pub use ranking::{Category, Ranking};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Error, Rank, Suit};
