// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Single opponent equity.
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use showdown_cards::{Card, Deck, for_each_subset, subsets::nck};
use showdown_eval::HandCache;

use crate::{
    Error, Street,
    runout::{check_deal, complete_board, for_each_runout},
};

/// The tally of a player against one random opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadsUp {
    wins_or_ties: u64,
    comparisons: u64,
}

impl HeadsUp {
    /// The number of comparisons the player won or tied.
    pub fn wins_or_ties(&self) -> u64 {
        self.wins_or_ties
    }

    /// The number of comparisons.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// The probability in [0, 1] that the player wins or ties against one
    /// opponent.
    pub fn probability(&self) -> f64 {
        if self.comparisons == 0 {
            0.0
        } else {
            self.wins_or_ties as f64 / self.comparisons as f64
        }
    }

    /// The percentage of winning or tying against all the opponents, rounded
    /// to three decimals.
    ///
    /// The opponents are treated as independent so the single opponent
    /// probability is raised to the number of opponents. This overestimates
    /// the equity as the opponents share the same deck.
    pub fn against(&self, opponents: u32) -> f64 {
        let exp = i32::try_from(opponents).unwrap_or(i32::MAX);
        let p = self.probability().powi(exp) * 100.0;
        (p * 1000.0).round() / 1000.0
    }
}

impl AddAssign for HeadsUp {
    fn add_assign(&mut self, rhs: Self) {
        self.wins_or_ties += rhs.wins_or_ties;
        self.comparisons += rhs.comparisons;
    }
}

/// Enumerates all the board runouts and opponent holdings at a street and
/// counts how often the hole cards win or tie.
///
/// The deck must not contain the hole and board cards.
pub fn heads_up(
    deck: &Deck,
    board: &[Card],
    hole: [Card; 2],
    street: Street,
) -> Result<HeadsUp, Error> {
    check_deal(deck, board, &hole, street, 2)?;

    let to_come = street.to_come();
    debug!(
        "Heads up on the {street}: {} runouts, {} opponent holdings each",
        nck(deck.count(), to_come),
        nck(deck.count() - to_come, 2)
    );

    let tallies = for_each_runout(
        deck,
        to_come,
        || (HeadsUp::default(), HandCache::new(), Vec::<Card>::new()),
        |(tally, cache, rest), runout| {
            let [b1, b2, b3, b4, b5] = complete_board(board, runout);
            let [h1, h2] = hole;
            let player = cache.best_of_seven(&[h1, h2, b1, b2, b3, b4, b5]);

            rest.clear();
            rest.extend(deck.cards().iter().filter(|c| !runout.contains(c)));

            for_each_subset(rest, 2, |opp| {
                let opponent = cache.best_of_seven(&[opp[0], opp[1], b1, b2, b3, b4, b5]);
                tally.comparisons += 1;
                if player >= opponent {
                    tally.wins_or_ties += 1;
                }
            });
        },
    );

    let mut total = HeadsUp::default();
    for (tally, _, _) in tallies {
        total += tally;
    }

    debug!(
        "Heads up on the {street}: {} wins or ties in {} comparisons",
        total.wins_or_ties, total.comparisons
    );

    Ok(total)
}

/// Returns the percentage, rounded to three decimals, of winning or tying
/// against a number of opponents at a street.
///
/// ```
/// # use showdown_cards::{Card, Deck};
/// # use showdown_equity::{Street, solo_equity};
/// let parse = |s: &str| s.split_whitespace().map(|c| c.parse::<Card>().unwrap()).collect::<Vec<_>>();
/// let hole = parse("AS AD");
/// let board = parse("KS QS JS 2H 3C");
/// let deck = Deck::default().without(&[hole.clone(), board.clone()].concat()).unwrap();
///
/// let equity = solo_equity(&deck, &board, [hole[0], hole[1]], 1, Street::River).unwrap();
/// assert_eq!(equity, 83.535);
/// ```
pub fn solo_equity(
    deck: &Deck,
    board: &[Card],
    hole: [Card; 2],
    opponents: u32,
    street: Street,
) -> Result<f64, Error> {
    let equity = heads_up(deck, board, hole, street)?.against(opponents);
    debug!("Equity against {opponents} opponents on the {street}: {equity}%");
    Ok(equity)
}
