// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and rankings.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// The ace high straight flush.
    RoyalFlush,
}

impl Category {
    /// All categories from the weakest to the strongest.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// The number of distinct tiebreaks in this category.
    ///
    /// The tiebreaks of a category are the range `0..self.tiebreaks()`.
    pub fn tiebreaks(&self) -> u16 {
        match self {
            Category::HighCard => 1_277,
            Category::OnePair => 2_860,
            Category::TwoPair => 858,
            Category::ThreeOfAKind => 858,
            Category::Straight => 10,
            Category::Flush => 8,
            Category::FullHouse => 156,
            Category::FourOfAKind => 156,
            Category::StraightFlush => 9,
            Category::RoyalFlush => 1,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// The ranking of a five cards hand.
///
/// Rankings compare by category first and then by tiebreak, the tiebreak is a
/// dense ordinal inside the category so that two hands with equal ranking
/// split the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ranking {
    category: Category,
    tiebreak: u16,
}

impl Ranking {
    /// Creates a ranking.
    ///
    /// Panics if the tiebreak is out of the category range.
    pub fn new(category: Category, tiebreak: u16) -> Self {
        assert!(
            tiebreak < category.tiebreaks(),
            "tiebreak {tiebreak} out of range for {category}"
        );

        Self { category, tiebreak }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The tiebreak ordinal inside the category.
    pub fn tiebreak(&self) -> u16 {
        self.tiebreak
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.tiebreak)
    }
}
