// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Memoized hand classification.
use ahash::AHashMap;

use showdown_cards::Card;

use crate::{
    classify::{pattern, rank_pattern},
    ranking::Ranking,
};

/// A cache of classified hands.
///
/// A ranking depends only on the sorted ranks of the hand and whether it is a
/// flush, so all the hands with the same pattern share a cache entry. There
/// are fewer than 7,500 patterns, equity enumerations classify millions of
/// hands so most lookups hit the cache.
#[derive(Debug, Default, Clone)]
pub struct HandCache {
    rankings: AHashMap<u32, Ranking>,
}

impl HandCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.rankings.len()
    }

    /// Checks if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }

    /// Ranks five distinct cards.
    ///
    /// Panics if the cards are not distinct.
    #[inline]
    pub fn ranking(&mut self, cards: &[Card; 5]) -> Ranking {
        let (ranks, flush) = pattern(cards);
        let key = ranks
            .iter()
            .fold(flush as u32, |key, &r| (key << 4) | r as u32);

        *self
            .rankings
            .entry(key)
            .or_insert_with(|| rank_pattern(ranks, flush))
    }

    /// Returns the best ranking of the 21 five cards hands in seven distinct
    /// cards.
    ///
    /// Panics if the cards are not distinct.
    pub fn best_of_seven(&mut self, cards: &[Card; 7]) -> Ranking {
        let [c0, c1, c2, c3, c4, _, _] = *cards;
        let mut best = self.ranking(&[c0, c1, c2, c3, c4]);
        let mut hand = [c0; 5];

        // Each hand leaves out two of the seven cards.
        for skip1 in 0..7 {
            for skip2 in (skip1 + 1)..7 {
                let mut pos = 0;
                for (idx, &card) in cards.iter().enumerate() {
                    if idx != skip1 && idx != skip2 {
                        hand[pos] = card;
                        pos += 1;
                    }
                }

                best = best.max(self.ranking(&hand));
            }
        }

        best
    }
}
