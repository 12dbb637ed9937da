// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table seats and sets of seats.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::Error;

/// A table seat.
///
/// Players sit at seats 1 to 9, the seat 0 is reserved for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// The board seat.
    pub const BOARD: Seat = Seat(0);

    /// The maximum number of players at a table.
    pub const MAX_PLAYERS: usize = 9;

    /// Creates a player seat, the number must be in 1..=9.
    pub fn new(number: u8) -> Result<Seat, Error> {
        if (1..=Self::MAX_PLAYERS as u8).contains(&number) {
            Ok(Seat(number))
        } else {
            Err(Error::InvalidSeat(number))
        }
    }

    /// The seat number.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Checks if this is the board seat.
    pub fn is_board(&self) -> bool {
        *self == Self::BOARD
    }

    /// Iterator over the player seats.
    pub fn players() -> impl DoubleEndedIterator<Item = Seat> {
        (1..=Self::MAX_PLAYERS as u8).map(Seat)
    }
}

impl TryFrom<u8> for Seat {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Seat::new(number)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of seats backed by a bitmask.
///
/// Sets are ordered by size and then by seats, so the single seat sets come
/// first in seat order followed by the splits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatSet(u16);

impl SeatSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set with one seat.
    pub fn single(seat: Seat) -> Self {
        Self(1 << seat.0)
    }

    /// Adds a seat to the set.
    pub fn insert(&mut self, seat: Seat) {
        self.0 |= 1 << seat.0;
    }

    /// Removes a seat from the set.
    pub fn remove(&mut self, seat: Seat) {
        self.0 &= !(1 << seat.0);
    }

    /// Checks if the set contains a seat.
    pub fn contains(&self, seat: Seat) -> bool {
        self.0 & (1 << seat.0) != 0
    }

    /// The number of seats in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterator over the seats in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Seat> + '_ {
        (0..=Seat::MAX_PLAYERS as u8)
            .filter(|n| self.0 & (1 << n) != 0)
            .map(Seat)
    }
}

impl FromIterator<Seat> for SeatSet {
    fn from_iter<I: IntoIterator<Item = Seat>>(iter: I) -> Self {
        let mut set = SeatSet::new();
        for seat in iter {
            set.insert(seat);
        }
        set
    }
}

impl PartialOrd for SeatSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeatSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.iter().cmp(other.iter()))
    }
}

/// Formats the seats as "1 & 2" or with a serial comma as "1, 2, & 3".
impl fmt::Display for SeatSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.len();
        for (idx, seat) in self.iter().enumerate() {
            match idx {
                0 => write!(f, "{seat}")?,
                _ if idx + 1 < len => write!(f, ", {seat}")?,
                _ if len == 2 => write!(f, " & {seat}")?,
                _ => write!(f, ", & {seat}")?,
            }
        }

        Ok(())
    }
}
