// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity reports.
use showdown_equity::{Outcomes, Seat, SeatSet};
use showdown_eval::Hand;

/// Formats a percentage rounded to three decimals.
pub fn percent(p: f64) -> String {
    format!("{}%", (p * 1000.0).round() / 1000.0)
}

/// The report lines of a multi players showdown.
///
/// There is a line for each active seat with the probability of winning the
/// whole pot, followed by a line for each split between players. A split
/// holding the board seat is the board playing for everyone.
pub fn multi_lines(outcomes: &Outcomes, active: &SeatSet) -> Vec<String> {
    let mut lines = active
        .iter()
        .map(|seat| format!("Player {seat}: {}", percent(outcomes.win_probability(seat))))
        .collect::<Vec<_>>();

    let players = |winners: &SeatSet| winners.iter().filter(|s| !s.is_board()).count();
    for (winners, p) in outcomes.iter().filter(|(winners, _)| players(winners) > 1) {
        let line = if winners.contains(Seat::BOARD) {
            format!("Split Pot Between Everyone: {}", percent(p))
        } else {
            format!("Split Pot between Players {winners}: {}", percent(p))
        };

        lines.push(line);
    }

    lines
}

/// The report line of a classified hand.
pub fn hand_line(hand: &Hand) -> String {
    format!("{hand}: {}", hand.ranking())
}
