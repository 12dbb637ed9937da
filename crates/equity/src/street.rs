// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting streets.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The street at which the equity is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Three board cards known, two to come.
    Flop,
    /// Four board cards known, one to come.
    Turn,
    /// The board is complete.
    River,
}

impl Street {
    /// All the streets in dealing order.
    pub const ALL: [Street; 3] = [Street::Flop, Street::Turn, Street::River];

    /// The number of board cards known at this street.
    pub fn board_len(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// The number of board cards still to come.
    pub fn to_come(&self) -> usize {
        5 - self.board_len()
    }

    /// The street with the given number of board cards.
    pub fn from_board_len(len: usize) -> Option<Street> {
        Self::ALL.into_iter().find(|s| s.board_len() == len)
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{s}")
    }
}
