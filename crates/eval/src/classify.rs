// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
//!
//! The classifier maps the sorted ranks of a hand and its flush flag to a
//! [Ranking] by testing the category predicates in strict precedence order,
//! the first predicate that matches gives the ranking.
use showdown_cards::{Card, Error};

use crate::{
    ordinal::{Ordinal, combinatorial_rank},
    ranking::{Category, Ranking},
};

/// The ten straights ranks from the wheel to the broadway.
const STRAIGHTS: [[u8; 5]; 10] = [
    [0, 1, 2, 3, 12],
    [0, 1, 2, 3, 4],
    [1, 2, 3, 4, 5],
    [2, 3, 4, 5, 6],
    [3, 4, 5, 6, 7],
    [4, 5, 6, 7, 8],
    [5, 6, 7, 8, 9],
    [6, 7, 8, 9, 10],
    [7, 8, 9, 10, 11],
    [8, 9, 10, 11, 12],
];

/// The broadway straight index.
const BROADWAY: u16 = 9;

/// A category predicate.
type Predicate = fn(&Shape) -> Option<Ranking>;

/// The category predicates from the strongest category to the weakest.
const PRECEDENCE: [Predicate; 9] = [
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    one_pair,
    high_card,
];

/// Classifies exactly five cards.
///
/// Returns [Error::InsufficientCards] or [Error::TooManyCards] if there are
/// not five cards and [Error::DuplicateCard] if a card appears twice.
///
/// ```
/// # use showdown_cards::Card;
/// # use showdown_eval::{Category, classify};
/// let cards = ["10 S", "J S", "Q S", "K S", "A S"]
///     .into_iter()
///     .map(|c| c.parse::<Card>())
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// let ranking = classify(&cards).unwrap();
/// assert_eq!(ranking.category(), Category::RoyalFlush);
/// ```
pub fn classify(cards: &[Card]) -> Result<Ranking, Error> {
    check_cards(cards, 5, 5)?;
    Ok(rank_distinct(cards))
}

/// Checks that there are between min and max distinct cards.
pub(crate) fn check_cards(cards: &[Card], min: usize, max: usize) -> Result<(), Error> {
    if cards.len() < min {
        return Err(Error::InsufficientCards {
            needed: min,
            available: cards.len(),
        });
    }

    if cards.len() > max {
        return Err(Error::TooManyCards {
            max,
            found: cards.len(),
        });
    }

    for (idx, card) in cards.iter().enumerate() {
        if cards[..idx].contains(card) {
            return Err(Error::DuplicateCard(*card));
        }
    }

    Ok(())
}

/// Returns the sorted ranks of five cards and whether they are a flush.
#[inline]
pub(crate) fn pattern(cards: &[Card]) -> ([u8; 5], bool) {
    debug_assert_eq!(cards.len(), 5);

    let mut ranks = [0u8; 5];
    for (r, c) in ranks.iter_mut().zip(cards) {
        *r = c.rank_bits();
    }
    ranks.sort_unstable();

    let suit = cards[0].suit_bits();
    let flush = cards.iter().all(|c| c.suit_bits() == suit);

    (ranks, flush)
}

/// Ranks five distinct cards.
///
/// Panics if the cards are not distinct, callers check the cards first.
pub(crate) fn rank_distinct(cards: &[Card]) -> Ranking {
    let (ranks, flush) = pattern(cards);
    rank_pattern(ranks, flush)
}

/// Ranks a sorted ranks pattern.
pub(crate) fn rank_pattern(ranks: [u8; 5], flush: bool) -> Ranking {
    let shape = Shape::new(ranks, flush);
    PRECEDENCE
        .iter()
        .find_map(|matches| matches(&shape))
        .unwrap_or_else(|| panic!("Invalid hand ranks {ranks:?}"))
}

/// The shape of a hand used by the category predicates.
#[derive(Debug)]
struct Shape {
    /// The ranks in ascending order.
    ranks: [u8; 5],
    /// All cards have the same suit.
    flush: bool,
    /// (count, rank) groups with the largest count first and then the highest rank.
    groups: [(u8, u8); 5],
    /// Number of groups.
    len: usize,
}

impl Shape {
    fn new(ranks: [u8; 5], flush: bool) -> Self {
        let mut counts = [0u8; 13];
        for r in ranks {
            counts[r as usize] += 1;
        }

        let mut groups = [(0, 0); 5];
        let mut len = 0;
        for (rank, &count) in counts.iter().enumerate().rev() {
            if count > 0 {
                groups[len] = (count, rank as u8);
                len += 1;
            }
        }

        // Stable sort keeps higher ranks first for equal counts.
        groups[..len].sort_by(|a, b| b.0.cmp(&a.0));

        Self {
            ranks,
            flush,
            groups,
            len,
        }
    }

    fn groups(&self) -> &[(u8, u8)] {
        &self.groups[..self.len]
    }

    /// The position of this hand straight from the wheel (0) to broadway (9).
    fn straight(&self) -> Option<u16> {
        STRAIGHTS
            .iter()
            .position(|run| run == &self.ranks)
            .map(|idx| idx as u16)
    }
}

fn straight_flush(s: &Shape) -> Option<Ranking> {
    if !s.flush {
        return None;
    }

    s.straight().map(|idx| {
        if idx == BROADWAY {
            Ranking::new(Category::RoyalFlush, 0)
        } else {
            Ranking::new(Category::StraightFlush, idx)
        }
    })
}

fn four_of_a_kind(s: &Shape) -> Option<Ranking> {
    match s.groups() {
        &[(4, quad), (1, kicker)] => {
            let ord = Ordinal::default().then(&[quad]).then(&[kicker]);
            Some(Ranking::new(Category::FourOfAKind, ord.value()))
        }
        _ => None,
    }
}

fn full_house(s: &Shape) -> Option<Ranking> {
    match s.groups() {
        &[(3, trips), (2, pair)] => {
            let ord = Ordinal::default().then(&[trips]).then(&[pair]);
            Some(Ranking::new(Category::FullHouse, ord.value()))
        }
        _ => None,
    }
}

/// Flushes rank by their highest card only, from seven high to ace high.
fn flush(s: &Shape) -> Option<Ranking> {
    if s.flush && s.straight().is_none() {
        Some(Ranking::new(Category::Flush, (s.ranks[4] - 5) as u16))
    } else {
        None
    }
}

fn straight(s: &Shape) -> Option<Ranking> {
    if s.flush {
        return None;
    }

    s.straight().map(|idx| Ranking::new(Category::Straight, idx))
}

fn three_of_a_kind(s: &Shape) -> Option<Ranking> {
    match s.groups() {
        &[(3, trips), (1, k1), (1, k2)] => {
            let ord = Ordinal::default().then(&[trips]).then(&[k2, k1]);
            Some(Ranking::new(Category::ThreeOfAKind, ord.value()))
        }
        _ => None,
    }
}

fn two_pair(s: &Shape) -> Option<Ranking> {
    match s.groups() {
        &[(2, high), (2, low), (1, kicker)] => {
            let ord = Ordinal::default().then(&[low, high]).then(&[kicker]);
            Some(Ranking::new(Category::TwoPair, ord.value()))
        }
        _ => None,
    }
}

fn one_pair(s: &Shape) -> Option<Ranking> {
    match s.groups() {
        &[(2, pair), (1, k1), (1, k2), (1, k3)] => {
            let ord = Ordinal::default().then(&[pair]).then(&[k3, k2, k1]);
            Some(Ranking::new(Category::OnePair, ord.value()))
        }
        _ => None,
    }
}

fn high_card(s: &Shape) -> Option<Ranking> {
    if s.flush || s.len != 5 || s.straight().is_some() {
        return None;
    }

    Some(Ranking::new(
        Category::HighCard,
        no_straight_ordinal(&s.ranks),
    ))
}

/// Ordinal of five distinct ranks that are not a straight, the straights are
/// skipped so that the ordinals are contiguous.
fn no_straight_ordinal(ranks: &[u8; 5]) -> u16 {
    let rank = combinatorial_rank(ranks, 13);
    let below = STRAIGHTS
        .iter()
        .filter(|run| combinatorial_rank(&run[..], 13) < rank)
        .count() as u32;
    (rank - below) as u16
}
