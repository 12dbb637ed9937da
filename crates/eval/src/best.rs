// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hands selection.
use std::cmp::Ordering;

use showdown_cards::{Card, Error, for_each_subset};

use crate::{
    cache::HandCache,
    classify::check_cards,
    hand::Hand,
    ranking::Ranking,
};

/// Returns all the best five cards hands from five to seven known cards.
///
/// Every five cards subset of the known cards is classified, the hands tied
/// for the highest ranking are returned in enumeration order. Returns
/// [Error::InsufficientCards] with fewer than five cards and
/// [Error::TooManyCards] with more than seven.
///
/// ```
/// # use showdown_cards::Card;
/// # use showdown_eval::{Category, best_hands};
/// let known = ["AS", "AD", "KS", "QS", "JS", "TS", "2C"]
///     .into_iter()
///     .map(|c| c.parse::<Card>())
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// let best = best_hands(&known).unwrap();
/// assert_eq!(best.len(), 1);
/// assert_eq!(best[0].ranking().category(), Category::RoyalFlush);
/// ```
pub fn best_hands(known: &[Card]) -> Result<Vec<Hand>, Error> {
    check_cards(known, 5, 7)?;

    let mut best: Vec<Hand> = Vec::new();
    for_each_subset(known, 5, |cards| {
        let mut five = [cards[0]; 5];
        five.copy_from_slice(cards);
        let hand = Hand::from_distinct(five);

        match best.first().map(|b| hand.cmp(b)) {
            None | Some(Ordering::Greater) => {
                best.clear();
                best.push(hand);
            }
            Some(Ordering::Equal) => best.push(hand),
            Some(Ordering::Less) => {}
        }
    });

    Ok(best)
}

/// Returns the best ranking from five to seven known cards using a cache.
pub fn best_ranking(known: &[Card], cache: &mut HandCache) -> Result<Ranking, Error> {
    check_cards(known, 5, 7)?;

    if let Ok(seven) = <&[Card; 7]>::try_from(known) {
        return Ok(cache.best_of_seven(seven));
    }

    let mut best = None;
    for_each_subset(known, 5, |cards| {
        let mut five = [cards[0]; 5];
        five.copy_from_slice(cards);
        best = best.max(Some(cache.ranking(&five)));
    });

    best.ok_or(Error::InsufficientCards {
        needed: 5,
        available: known.len(),
    })
}
