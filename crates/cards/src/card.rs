// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::Error;

/// A Poker card.
///
/// A card is a rank and suit pair packed in a byte with the rank index in the
/// high nibble and the suit index in the low nibble:
///
/// ```text
///   +--------+
///   |rrrr00ss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (spades=0,diamonds=1,clubs=2,hearts=3)
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 4) | suit as u8)
    }

    /// Create a card from a rank token and a suit token, e.g. `"10"` and `"S"`.
    pub fn from_tokens(rank: &str, suit: &str) -> Result<Card, Error> {
        match (rank.parse::<Rank>(), suit.parse::<Suit>()) {
            (Ok(r), Ok(s)) => Ok(Card::new(r, s)),
            _ => Err(Error::InvalidCard {
                rank: rank.to_string(),
                suit: suit.to_string(),
            }),
        }
    }

    /// This card unique id in 0..52.
    pub fn id(&self) -> u8 {
        (self.0 >> 4) * 4 + (self.0 & 0x3)
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0 => Suit::Spades,
            1 => Suit::Diamonds,
            2 => Suit::Clubs,
            _ => Suit::Hearts,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.rank_bits() as usize]
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        self.0 >> 4
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        self.0 & 0x3
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Parses cards written as `"10 S"`, `"10S"`, `"TS"` or `"k h"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut tokens = s.split_whitespace();

        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(rank), Some(suit), None) => Card::from_tokens(rank, suit),
            (Some(token), None, None) => {
                // The suit is the last char, that may be a multi-byte symbol.
                let split = token
                    .char_indices()
                    .last()
                    .map(|(idx, _)| idx)
                    .unwrap_or_default();
                let (rank, suit) = token.split_at(split);
                Card::from_tokens(rank, suit)
            }
            _ => Err(Error::InvalidCard {
                rank: s.to_string(),
                suit: String::new(),
            }),
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank numeric value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => {
                return Err(Error::InvalidCard {
                    rank: s.to_string(),
                    suit: String::new(),
                });
            }
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Clubs suit.
    Clubs = 2,
    /// Hearts suit.
    Hearts = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s.to_ascii_uppercase().as_str() {
            "S" | "\u{2660}" => Suit::Spades,
            "D" | "\u{2666}" => Suit::Diamonds,
            "C" | "\u{2663}" => Suit::Clubs,
            "H" | "\u{2665}" => Suit::Hearts,
            _ => {
                return Err(Error::InvalidCard {
                    rank: String::new(),
                    suit: s.to_string(),
                });
            }
        };

        Ok(suit)
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts].into_iter()
    }
}
