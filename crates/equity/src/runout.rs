// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Board runouts enumeration.
use showdown_cards::{Card, Deck};

use crate::{Error, Street};

/// Checks the cards of an equity enumeration.
///
/// The board must match the street, the hole and board cards must be out of
/// the deck and dealt once, and the deck must have enough cards for the board
/// runouts plus `extra` cards.
pub(crate) fn check_deal(
    deck: &Deck,
    board: &[Card],
    hole: &[Card],
    street: Street,
    extra: usize,
) -> Result<(), Error> {
    if board.len() != street.board_len() {
        return Err(Error::BoardMismatch {
            street,
            expected: street.board_len(),
            found: board.len(),
        });
    }

    let dealt = hole.iter().chain(board).copied().collect::<Vec<_>>();
    deck.check_dealt(&dealt)?;

    let needed = street.to_come() + extra;
    if deck.count() < needed {
        return Err(showdown_cards::Error::InsufficientCards {
            needed,
            available: deck.count(),
        }
        .into());
    }

    Ok(())
}

/// Builds the five board cards from the known cards and a runout.
///
/// Panics if the board is empty or the cards are not five.
pub(crate) fn complete_board(board: &[Card], runout: &[Card]) -> [Card; 5] {
    let mut full = [board[0]; 5];
    full[..board.len()].copy_from_slice(board);
    full[board.len()..].copy_from_slice(runout);
    full
}

/// Calls `f` for each k-cards runout from the deck and returns the state of
/// each task, the states are created with `init`.
#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_runout<S, I, F>(deck: &Deck, k: usize, init: I, f: F) -> Vec<S>
where
    S: Send,
    I: Fn() -> S,
    F: Fn(&mut S, &[Card]) + Send + Sync,
{
    let mut state = init();
    deck.for_each(k, |runout| f(&mut state, runout));
    vec![state]
}

/// Calls `f` for each k-cards runout from the deck and returns the state of
/// each task, the states are created with `init`.
///
/// The runouts are split across the available cores, each task locks only its
/// own state so the locks are never contended.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_runout<S, I, F>(deck: &Deck, k: usize, init: I, f: F) -> Vec<S>
where
    S: Send,
    I: Fn() -> S,
    F: Fn(&mut S, &[Card]) + Send + Sync,
{
    use parking_lot::Mutex;
    use std::{num::NonZero, thread};

    let num_tasks = thread::available_parallelism()
        .map(NonZero::get)
        .unwrap_or(1);

    let states = (0..num_tasks)
        .map(|_| Mutex::new(init()))
        .collect::<Vec<_>>();

    deck.par_for_each(num_tasks, k, |task_id, runout| {
        let mut state = states[task_id].lock();
        f(&mut state, runout);
    });

    log::trace!("Enumerated {k} cards runouts with {num_tasks} tasks");

    states.into_iter().map(Mutex::into_inner).collect()
}
