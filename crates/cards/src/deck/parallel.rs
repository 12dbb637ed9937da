// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel subsets iteration.
use std::thread;

use super::Deck;
use crate::{Card, subsets};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards subset.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of cards of length k, each task visits a contiguous range
    /// of subsets so per task state can be indexed by the task identifier.
    ///
    /// Panics if k > 7 or num_tasks is zero.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!(k <= subsets::MAX_K, "0 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        if k > n {
            return;
        }

        let num_subsets = subsets::nck(n, k);
        let per_task = num_subsets.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * per_task;
                if start >= num_subsets {
                    break;
                }

                let count = per_task.min(num_subsets - start);
                let f = &f;
                s.spawn(move || {
                    let mut h = self.cards[..k].to_vec();
                    subsets::for_each_ksubset(n, k, start, count, |p| {
                        for (idx, &pos) in p.iter().enumerate() {
                            h[idx] = self.cards[pos];
                        }

                        f(task_id, &h);
                    });
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn par_for_each_visits_all_subsets() {
        const NUM_TASKS: usize = 4;

        let deck = Deck::default()
            .without(&[
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Ace, Suit::Diamonds),
            ])
            .unwrap();

        let counters = (0..NUM_TASKS)
            .map(|_| AtomicU64::new(0))
            .collect::<Vec<_>>();

        deck.par_for_each(NUM_TASKS, 3, |task_id, cards| {
            assert_eq!(cards.len(), 3);
            counters[task_id].fetch_add(1, Ordering::Relaxed);
        });

        let total = counters
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .sum::<u64>();
        assert_eq!(total, 19_600);
    }

    #[test]
    fn par_for_each_matches_serial() {
        let deck = Deck::default();
        let serial = ids_sum(&deck, 1);
        let parallel = ids_sum(&deck, 7);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn par_for_each_more_tasks_than_subsets() {
        let deck = Deck::default();
        let calls = AtomicU64::new(0);

        deck.par_for_each(8, 0, |task_id, cards| {
            assert_eq!(task_id, 0);
            assert!(cards.is_empty());
            calls.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    /// Sums the card ids of each 2-cards subset.
    fn ids_sum(deck: &Deck, num_tasks: usize) -> u64 {
        let sum = AtomicU64::new(0);
        deck.par_for_each(num_tasks, 2, |_, cards| {
            let ids = cards.iter().map(|c| c.id() as u64).sum::<u64>();
            sum.fetch_add(ids, Ordering::Relaxed);
        });
        sum.load(Ordering::Relaxed)
    }
}
