// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example classify_all5
// ...
// Total hands      2598960
//
// High Card:       1302540
// Pair:            1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// Royal Flush:     4
// ```

use std::time::Instant;

use showdown_eval::*;

fn main() {
    // Classify all 2.6M hands, then again through the cache.
    let now = Instant::now();
    let mut counts = [0usize; 10];

    Deck::default().for_each(5, |hand| {
        if let Ok(ranking) = classify(hand) {
            counts[ranking.category() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}", total as f64 / elapsed);

    let now = Instant::now();
    let mut cache = HandCache::new();
    Deck::default().for_each(5, |hand| {
        if let Ok(hand) = <&[Card; 5]>::try_from(hand) {
            cache.ranking(hand);
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    println!("Cached:          {:.3}s ({} patterns)\n", elapsed, cache.len());

    for category in Category::ALL {
        let label = format!("{category}:");
        println!("{label:<17}{}", counts[category as usize]);
    }
}
