// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards hand.
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use showdown_cards::{Card, Error};

use crate::{
    classify::{check_cards, rank_distinct},
    ranking::Ranking,
};

/// A five cards hand with its ranking.
///
/// Hands compare by ranking only, two hands with different cards and the same
/// ranking are equal and split the pot.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hand {
    cards: [Card; 5],
    ranking: Ranking,
}

impl Hand {
    /// Creates a hand from five distinct cards.
    pub fn new(cards: [Card; 5]) -> Result<Self, Error> {
        check_cards(&cards, 5, 5)?;
        Ok(Self::from_distinct(cards))
    }

    /// Creates a hand from cards that have already been checked.
    pub(crate) fn from_distinct(cards: [Card; 5]) -> Self {
        Self {
            cards,
            ranking: rank_distinct(&cards),
        }
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand ranking.
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = Error;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        check_cards(cards, 5, 5)?;
        let mut hand = [cards[0]; 5];
        hand.copy_from_slice(cards);
        Ok(Self::from_distinct(hand))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.ranking == other.ranking
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranking.cmp(&other.ranking)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3, c4, c5] = self.cards;
        write!(f, "{c1} {c2} {c3} {c4} {c5}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn hand(s: &str) -> Hand {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        Hand::try_from(cards.as_slice()).unwrap()
    }

    #[test]
    fn hands_compare_by_ranking() {
        let h1 = hand("JC JD 2S 7H 9D");
        let h2 = hand("JH JS 2C 7D 9C");
        assert_eq!(h1, h2);
        assert_ne!(h1.cards(), h2.cards());

        let h3 = hand("KS KD 4C 4H 7S");
        assert!(h3 > h1);
        assert_eq!(h3.ranking().category(), Category::TwoPair);
    }

    #[test]
    fn hand_errors() {
        let ks = "KS".parse::<Card>().unwrap();
        let qs = "QS".parse::<Card>().unwrap();
        assert_eq!(
            Hand::new([ks, qs, ks, qs, ks]).unwrap_err(),
            Error::DuplicateCard(ks)
        );

        let short = [ks, qs];
        assert!(matches!(
            Hand::try_from(&short[..]),
            Err(Error::InsufficientCards { .. })
        ));
    }

    #[test]
    fn hand_to_string() {
        assert_eq!(hand("TS JS QS KS AS").to_string(), "TS JS QS KS AS");
    }
}
