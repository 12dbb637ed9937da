// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown equity engines.
//!
//! The engines enumerate every completion of the board at a [Street], and for
//! the single player engine every opponent holding, to compute how often a
//! hand wins or splits the pot.
//!
//! ```
//! # use std::collections::BTreeMap;
//! # use showdown_cards::{Card, Deck};
//! # use showdown_equity::*;
//! let parse = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>())
//!         .collect::<Result<Vec<_>, _>>()
//!         .unwrap()
//! };
//!
//! let board = parse("QS JS 2C 3D");
//! let (p1, p2) = (parse("AH KH"), parse("AC KD"));
//! let deck = Deck::default()
//!     .without(&[board.clone(), p1.clone(), p2.clone()].concat())
//!     .unwrap();
//!
//! let mut seats = BTreeMap::new();
//! seats.insert(Seat::new(1).unwrap(), [p1[0], p1[1]]);
//! seats.insert(Seat::new(2).unwrap(), [p2[0], p2[1]]);
//! let active = seats.keys().copied().collect::<SeatSet>();
//!
//! // Same cards, every runout splits the pot.
//! let outcomes = multi_equity(&deck, &board, &seats, &active, Street::Turn).unwrap();
//! assert_eq!(outcomes.probability(&active), 100.0);
//! assert_eq!(active.to_string(), "1 & 2");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::Error;

mod multi;
pub use multi::{Outcomes, multi_equity};

mod runout;

mod seat;
pub use seat::{Seat, SeatSet};

mod solo;
pub use solo::{HeadsUp, heads_up, solo_equity};

mod street;
pub use street::Street;
