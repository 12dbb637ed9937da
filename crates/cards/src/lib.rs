// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let ts = "10 S".parse::<Card>().unwrap();
//! assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! and a [Deck] type that holds the cards that have not been dealt and
//! iterates its k-cards subsets, for example to iterate all the turn and
//! river cards after a flop:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let dealt = ["AS", "AD", "KS", "QS", "JS"]
//!     .into_iter()
//!     .map(|c| c.parse::<Card>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let deck = Deck::default().without(&dealt).unwrap();
//! let mut counter = 0;
//! deck.for_each(2, |runout| {
//!     assert_eq!(runout.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_081);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number
//! of tasks, the closure `task_id` can be used to store per task data to
//! reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use showdown_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit};

mod deck;
pub use deck::Deck;

mod error;
pub use error::Error;

pub mod subsets;
pub use subsets::for_each_subset;
