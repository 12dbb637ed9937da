// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Multi players showdown outcomes.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::BTreeMap, ops::AddAssign};

use showdown_cards::{Card, Deck, subsets::nck};
use showdown_eval::HandCache;

use crate::{
    Error, Seat, SeatSet, Street,
    runout::{check_deal, complete_board, for_each_runout},
};

/// The showdown outcomes of all the runouts at a street.
///
/// Each runout is won by the set of seats holding the best hand, a set with
/// more than one seat is a split pot. When the board alone ties the best hand
/// the set also holds [Seat::BOARD].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcomes {
    counts: BTreeMap<SeatSet, u64>,
    total: u64,
}

impl Outcomes {
    /// The number of runouts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The number of distinct winning sets.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Checks if no runout has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The number of runouts won by exactly this set of seats.
    pub fn count(&self, winners: &SeatSet) -> u64 {
        self.counts.get(winners).copied().unwrap_or_default()
    }

    /// The percentage of runouts won by exactly this set of seats.
    pub fn probability(&self, winners: &SeatSet) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(winners) as f64 * 100.0 / self.total as f64
        }
    }

    /// The percentage of runouts a seat wins without splitting the pot with
    /// another player.
    pub fn win_probability(&self, seat: Seat) -> f64 {
        if seat.is_board() {
            return 0.0;
        }

        let mut winners = SeatSet::single(seat);
        let alone = self.probability(&winners);
        winners.insert(Seat::BOARD);
        alone + self.probability(&winners)
    }

    /// Iterator over the winning sets and their percentage, single seats
    /// first and then the splits.
    pub fn iter(&self) -> impl Iterator<Item = (SeatSet, f64)> + '_ {
        self.counts
            .keys()
            .map(|winners| (*winners, self.probability(winners)))
    }

    /// Iterator over the winning sets and their runouts count.
    pub fn counts(&self) -> impl Iterator<Item = (SeatSet, u64)> + '_ {
        self.counts.iter().map(|(winners, count)| (*winners, *count))
    }

    fn record(&mut self, winners: SeatSet) {
        *self.counts.entry(winners).or_default() += 1;
        self.total += 1;
    }
}

impl AddAssign for Outcomes {
    fn add_assign(&mut self, rhs: Self) {
        for (winners, count) in rhs.counts {
            *self.counts.entry(winners).or_default() += count;
        }

        self.total += rhs.total;
    }
}

/// Enumerates all the board runouts at a street and records the seats that
/// win each showdown.
///
/// The `seats` map has the hole cards of all the seats, folded ones included,
/// and the `active` set has the seats that are still in the hand. The deck
/// must not contain any hole or board card.
///
/// The board alone is the floor hand, a seat can only match or beat it. When
/// the board plays the winners are all the active seats and [Seat::BOARD].
pub fn multi_equity(
    deck: &Deck,
    board: &[Card],
    seats: &BTreeMap<Seat, [Card; 2]>,
    active: &SeatSet,
    street: Street,
) -> Result<Outcomes, Error> {
    if seats.contains_key(&Seat::BOARD) || active.contains(Seat::BOARD) {
        return Err(Error::InvalidSeat(Seat::BOARD.number()));
    }

    if active.is_empty() {
        return Err(Error::NoActiveSeats);
    }

    let players = active
        .iter()
        .map(|seat| {
            seats
                .get(&seat)
                .map(|&hole| (seat, hole))
                .ok_or(Error::UnknownSeat(seat))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let hole = seats.values().flatten().copied().collect::<Vec<_>>();
    check_deal(deck, board, &hole, street, 0)?;

    let to_come = street.to_come();
    debug!(
        "Showdown of {} players on the {street}: {} runouts",
        players.len(),
        nck(deck.count(), to_come)
    );

    let tasks = for_each_runout(
        deck,
        to_come,
        || (Outcomes::default(), HandCache::new()),
        |(outcomes, cache), runout| {
            let full = complete_board(board, runout);
            let [b1, b2, b3, b4, b5] = full;

            let floor = cache.ranking(&full);
            let mut best = floor;
            let mut winners = SeatSet::new();
            for &(seat, [h1, h2]) in &players {
                let ranking = cache.best_of_seven(&[h1, h2, b1, b2, b3, b4, b5]);
                match ranking.cmp(&best) {
                    Ordering::Greater => {
                        best = ranking;
                        winners = SeatSet::single(seat);
                    }
                    Ordering::Equal => winners.insert(seat),
                    Ordering::Less => {}
                }
            }

            if best == floor {
                winners.insert(Seat::BOARD);
            }

            outcomes.record(winners);
        },
    );

    let mut total = Outcomes::default();
    for (outcomes, _) in tasks {
        total += outcomes;
    }

    for (winners, p) in total.iter() {
        debug!("Seats {winners} win {p:.3}% on the {street}");
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect()
    }

    fn seat(n: u8) -> Seat {
        Seat::new(n).unwrap()
    }

    fn set(seats: &[u8]) -> SeatSet {
        seats
            .iter()
            .map(|&n| if n == 0 { Seat::BOARD } else { seat(n) })
            .collect()
    }

    fn table(holes: &[&str]) -> BTreeMap<Seat, [Card; 2]> {
        holes
            .iter()
            .enumerate()
            .map(|(idx, hole)| {
                let hole = cards(hole);
                (seat(idx as u8 + 1), [hole[0], hole[1]])
            })
            .collect()
    }

    fn deck_for(seats: &BTreeMap<Seat, [Card; 2]>, board: &[Card]) -> Deck {
        let dealt = seats
            .values()
            .flatten()
            .chain(board)
            .copied()
            .collect::<Vec<_>>();
        Deck::default().without(&dealt).unwrap()
    }

    #[test]
    fn aces_against_kings_on_the_flop() {
        // The sevens have folded, their cards are out of the deck.
        let seats = table(&["AS AD", "KH KD", "7C 7H"]);
        let board = cards("2C 8D 9H");
        let deck = deck_for(&seats, &board);

        let outcomes = multi_equity(&deck, &board, &seats, &set(&[1, 2]), Street::Flop).unwrap();
        assert_eq!(outcomes.total(), 903);
        assert_eq!(outcomes.count(&set(&[1])), 824);
        assert_eq!(outcomes.count(&set(&[2])), 79);
        assert_eq!(outcomes.len(), 2);
        assert!((outcomes.win_probability(seat(1)) - 91.251).abs() < 1e-3);
        assert_eq!(outcomes.win_probability(seat(3)), 0.0);
    }

    #[test]
    fn three_players_on_the_turn() {
        let seats = table(&["AS AD", "KH KD", "7C 7H"]);
        let board = cards("2C 8D 9H JS");
        let deck = deck_for(&seats, &board);

        let outcomes = multi_equity(&deck, &board, &seats, &set(&[1, 2]), Street::Turn).unwrap();
        assert_eq!(outcomes.total(), 42);
        assert_eq!(outcomes.counts().collect::<Vec<_>>(), [(set(&[1]), 40), (set(&[2]), 2)]);

        let outcomes =
            multi_equity(&deck, &board, &seats, &set(&[1, 2, 3]), Street::Turn).unwrap();
        assert_eq!(
            outcomes.counts().collect::<Vec<_>>(),
            [(set(&[1]), 34), (set(&[2]), 2), (set(&[3]), 6)]
        );
    }

    #[test]
    fn same_hand_always_splits() {
        let seats = table(&["AH KH", "AC KD"]);
        let board = cards("QS JS 2C 3D");
        let deck = deck_for(&seats, &board);

        let outcomes = multi_equity(&deck, &board, &seats, &set(&[1, 2]), Street::Turn).unwrap();
        assert_eq!(outcomes.total(), 44);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes.probability(&set(&[1, 2])), 100.0);
        assert_eq!(outcomes.win_probability(seat(1)), 0.0);
    }

    #[test]
    fn board_plays_for_everyone() {
        let seats = table(&["2H 3H", "4C 5C", "6D 7D"]);
        let board = cards("TS JH QC KD AS");
        let deck = deck_for(&seats, &board);

        let active = set(&[1, 2, 3]);
        let outcomes = multi_equity(&deck, &board, &seats, &active, Street::River).unwrap();

        let mut everyone = active;
        everyone.insert(Seat::BOARD);
        assert_eq!(outcomes.iter().collect::<Vec<_>>(), [(everyone, 100.0)]);
        assert_eq!(outcomes.probability(&active), 0.0);
    }

    #[test]
    fn players_split_without_the_board() {
        // Both players make the broadway with their own ace and king.
        let seats = table(&["AH KH", "AC KD"]);
        let board = cards("QS JS TC 3D 4D");
        let deck = deck_for(&seats, &board);

        let outcomes = multi_equity(&deck, &board, &seats, &set(&[1, 2]), Street::River).unwrap();
        assert_eq!(outcomes.counts().collect::<Vec<_>>(), [(set(&[1, 2]), 1)]);
        assert!(outcomes.iter().all(|(winners, _)| !winners.contains(Seat::BOARD)));
    }

    #[test]
    fn board_flush_splits_with_the_same_top_card() {
        // A fifth heart gives a king high flush on the board, the three of
        // hearts does not improve it.
        let seats = table(&["AS AD", "3H 4C"]);
        let board = cards("2H 5H 9H KH");
        let deck = deck_for(&seats, &board);

        let outcomes = multi_equity(&deck, &board, &seats, &set(&[1, 2]), Street::Turn).unwrap();
        assert_eq!(outcomes.total(), 44);
        assert_eq!(
            outcomes.counts().collect::<Vec<_>>(),
            [(set(&[2]), 36), (set(&[0, 1, 2]), 8)]
        );
        assert_eq!(outcomes.win_probability(seat(1)), 0.0);
    }

    #[test]
    fn single_active_seat_wins_everything() {
        let seats = table(&["2H 3H", "AC AD"]);
        let board = cards("TS JH QC KD");
        let deck = deck_for(&seats, &board);

        let outcomes = multi_equity(&deck, &board, &seats, &set(&[1]), Street::Turn).unwrap();
        assert!((outcomes.win_probability(seat(1)) - 100.0).abs() < 1e-9);
        assert_eq!(outcomes.total(), 44);

        // Most rivers leave the broadway draw on the board unbeaten.
        assert_eq!(
            outcomes.counts().collect::<Vec<_>>(),
            [(set(&[1]), 6), (set(&[0, 1]), 38)]
        );
    }

    #[test]
    fn random_deals_sum_to_100() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let num_seats = rng.random_range(2..=9);
            let street = Street::ALL[rng.random_range(1..3)];

            let mut seats = BTreeMap::new();
            for n in 1..=num_seats {
                let hole = [deck.deal().unwrap(), deck.deal().unwrap()];
                seats.insert(seat(n), hole);
            }

            let board = (0..street.board_len())
                .filter_map(|_| deck.deal())
                .collect::<Vec<_>>();

            let active = seats
                .keys()
                .copied()
                .filter(|s| s.number() == 1 || rng.random_bool(0.7))
                .collect::<SeatSet>();

            let outcomes = multi_equity(&deck, &board, &seats, &active, street).unwrap();
            let runouts = nck(deck.count(), street.to_come()) as u64;
            assert_eq!(outcomes.total(), runouts);
            assert_eq!(outcomes.counts().map(|(_, c)| c).sum::<u64>(), runouts);

            let sum = outcomes.iter().map(|(_, p)| p).sum::<f64>();
            assert!((sum - 100.0).abs() < 1e-9);

            for (winners, _) in outcomes.iter() {
                assert!(!winners.is_empty());
                assert!(winners.iter().all(|s| s.is_board() || active.contains(s)));

                // The board ties only when every active seat ties.
                if winners.contains(Seat::BOARD) {
                    assert!(active.iter().all(|s| winners.contains(s)));
                }
            }

            let wins = active.iter().map(|s| outcomes.win_probability(s)).sum::<f64>();
            assert!(wins <= 100.0 + 1e-9);

            if street == Street::River {
                assert_eq!(outcomes.len(), 1);
                assert_eq!(outcomes.iter().next().unwrap().1, 100.0);
            }
        }
    }

    #[test]
    fn seat_errors() {
        let seats = table(&["AS AD", "KH KD"]);
        let board = cards("2C 8D 9H");
        let deck = deck_for(&seats, &board);

        assert_eq!(
            multi_equity(&deck, &board, &seats, &SeatSet::new(), Street::Flop),
            Err(Error::NoActiveSeats)
        );
        assert_eq!(
            multi_equity(&deck, &board, &seats, &set(&[1, 4]), Street::Flop),
            Err(Error::UnknownSeat(seat(4)))
        );
        assert_eq!(
            multi_equity(&deck, &board, &seats, &SeatSet::single(Seat::BOARD), Street::Flop),
            Err(Error::InvalidSeat(0))
        );

        let mut with_board = seats.clone();
        with_board.insert(Seat::BOARD, [cards("3C")[0], cards("4C")[0]]);
        assert_eq!(
            multi_equity(&deck, &board, &with_board, &set(&[1]), Street::Flop),
            Err(Error::InvalidSeat(0))
        );
    }

    #[test]
    fn deal_errors() {
        let seats = table(&["AS AD", "KH KD", "7C 7H"]);
        let board = cards("2C 8D 9H");

        // The folded seat cards are still in the deck.
        let deck = Deck::default()
            .without(&cards("AS AD KH KD 2C 8D 9H"))
            .unwrap();
        assert!(matches!(
            multi_equity(&deck, &board, &seats, &set(&[1, 2]), Street::Flop),
            Err(Error::Cards(showdown_cards::Error::DuplicateCard(_)))
        ));

        let deck = deck_for(&seats, &board);
        assert!(matches!(
            multi_equity(&deck, &board, &seats, &set(&[1, 2]), Street::River),
            Err(Error::BoardMismatch { .. })
        ));
    }
}
