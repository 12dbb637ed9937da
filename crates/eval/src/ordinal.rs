// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dense ordinals for kicker patterns.
//!
//! A hand tiebreak is built from groups of ranks, most significant group
//! first. Each group is a set of distinct ranks drawn from the ranks not used
//! by the previous groups and is numbered with its colexicographic rank, that
//! compares sets by their highest rank first like poker kickers do. The group
//! numbers are combined as a mixed radix number so that the result is a
//! gap-free ordinal.
use showdown_cards::subsets::nck;

/// The number of ranks.
const RANKS: u8 = 13;

/// Returns the colexicographic rank of a set of distinct values in
/// `0..domain`, given in ascending order.
///
/// The rank is the sum of `C(values[i], i + 1)` and maps the `C(domain, k)`
/// k-sets to `0..C(domain, k)` preserving their order.
pub fn combinatorial_rank(values: &[u8], domain: u8) -> u32 {
    debug_assert!(values.windows(2).all(|w| w[0] < w[1]));
    debug_assert!(values.iter().all(|&v| v < domain));

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| nck(v as usize, i + 1) as u32)
        .sum()
}

/// A mixed radix ordinal built from groups of ranks.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Ordinal {
    value: u32,
    taken: u16,
}

impl Ordinal {
    /// Appends a group of distinct ranks, in ascending order, that are not in
    /// any of the previous groups.
    pub fn then(mut self, ranks: &[u8]) -> Self {
        let domain = RANKS - self.taken.count_ones() as u8;

        // Renumber the ranks skipping the taken ones.
        let mut compact = [0u8; 5];
        for (c, &r) in compact.iter_mut().zip(ranks) {
            debug_assert!(self.taken & (1 << r) == 0);
            *c = r - (self.taken & ((1 << r) - 1)).count_ones() as u8;
        }

        let k = ranks.len();
        let radix = nck(domain as usize, k) as u32;
        self.value = self.value * radix + combinatorial_rank(&compact[..k], domain);

        for &r in ranks {
            self.taken |= 1 << r;
        }

        self
    }

    /// The ordinal value.
    pub fn value(&self) -> u16 {
        self.value as u16
    }
}
