// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Binomial coefficients and k-subsets iteration.

/// The largest subset size supported by the iteration functions.
pub const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; MAX_K + 1]; 53] {
    let mut t = [[0u32; MAX_K + 1]; 53];
    let mut n = 0;

    while n <= 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && n > 0 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; MAX_K + 1]; 53] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= 7");
    NCKS[n][k] as usize
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
pub(crate) fn nth_ksubset(mut n: usize, k: usize) -> [usize; MAX_K] {
    assert!(k <= MAX_K);

    let mut out = [0; MAX_K];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// Calls the given closure for count k-subsets of 0..n in colexicographic
/// order starting from the nth k-subset.
pub(crate) fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n || count == 0 {
        return;
    }

    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];

    let ks = nth_ksubset(nth, k);
    c[1..=k].copy_from_slice(&ks[..k]);
    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// Calls the `f` closure for each k-subset of `items`.
///
/// A zero k calls `f` once with an empty slice, a k larger than the number of
/// items never calls `f`. Panics if k > 7.
pub fn for_each_subset<T, F>(items: &[T], k: usize, mut f: F)
where
    T: Copy,
    F: FnMut(&[T]),
{
    let n = items.len();
    if k > n {
        return;
    }

    let mut subset = items[..k].to_vec();
    for_each_ksubset(n, k, 0, nck(n, k), |p| {
        for (idx, &pos) in p.iter().enumerate() {
            subset[idx] = items[pos];
        }

        f(&subset);
    });
}
