// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Errors raised when building cards or dealing them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The rank or suit token is not a valid card token.
    #[error("invalid card rank '{rank}' suit '{suit}'")]
    InvalidCard {
        /// The rank token.
        rank: String,
        /// The suit token.
        suit: String,
    },
    /// The card is not in the deck, it may have been dealt already.
    #[error("card {0} is not in the deck")]
    CardNotFound(Card),
    /// A card has been dealt twice.
    #[error("card {0} has already been dealt")]
    DuplicateCard(Card),
    /// Not enough cards to build a hand or complete an enumeration.
    #[error("needed {needed} cards but only {available} available")]
    InsufficientCards {
        /// The number of cards needed.
        needed: usize,
        /// The number of cards available.
        available: usize,
    },
    /// More cards than a hand can use.
    #[error("expected at most {max} cards, found {found}")]
    TooManyCards {
        /// The maximum number of cards.
        max: usize,
        /// The number of cards given.
        found: usize,
    },
}
