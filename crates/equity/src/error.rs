// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity errors.
use thiserror::Error;

use crate::{Seat, Street};

/// Errors raised by the equity engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A cards or deck error.
    #[error(transparent)]
    Cards(#[from] showdown_cards::Error),
    /// The number of board cards does not match the street.
    #[error("the {street} needs {expected} board cards, found {found}")]
    BoardMismatch {
        /// The street.
        street: Street,
        /// The number of board cards for the street.
        expected: usize,
        /// The number of board cards given.
        found: usize,
    },
    /// All the seats have folded.
    #[error("no active seats")]
    NoActiveSeats,
    /// An active seat has no hole cards.
    #[error("seat {0} has no hole cards")]
    UnknownSeat(Seat),
    /// A seat number outside 1..=9.
    #[error("invalid seat number {0}, seats are numbered 1 to 9")]
    InvalidSeat(u8),
}
