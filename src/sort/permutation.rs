// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Turning a permutation into the fewest pairwise swaps that realize it.
//!
//! A permutation here is a slice `perm` of length `n` holding each of
//! `0..n` exactly once. It is read in gather form: position `i` ends up
//! holding the element that currently sits at `perm[i]`.
//!
//! Every permutation splits into disjoint cycles, and a cycle of length
//! `k` takes exactly `k - 1` swaps, so the minimum is `n - cycles`
//! (counting fixed points as cycles of length one).

use crate::error::Error;
use crate::error::Result;

/// True if `perm` holds every value in `0..perm.len()` exactly once.
pub fn is_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    for &p in perm {
        if p >= perm.len() || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    return true;
}

/// Number of disjoint cycles in `perm`, fixed points included.
///
/// `perm` must be a valid permutation.
pub fn count_cycles(perm: &[usize]) -> usize {
    let mut visited = vec![false; perm.len()];
    let mut cycles = 0;
    for start in 0..perm.len() {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut cur = start;
        while !visited[cur] {
            visited[cur] = true;
            cur = perm[cur];
        }
    }
    return cycles;
}

/// Decompose `perm` into a minimal sequence of transpositions.
///
/// Applying the returned swaps in order to the original arrangement
/// produces the arrangement `perm` describes. The identity yields no swaps.
pub fn decompose(perm: &[usize]) -> Result<Vec<(usize, usize)>> {
    if !is_permutation(perm) {
        return Err(Error::InvalidPermutation { perm: perm.to_vec() });
    }

    let n = perm.len();
    let mut visited = vec![false; n];
    let mut swaps = Vec::with_capacity(n);

    for start in 0..n {
        if visited[start] {
            continue;
        }
        if perm[start] == start {
            visited[start] = true;
            continue;
        }
        // Walk the cycle. Marking the start first means the walk stops on
        // the last member, whose image is the start.
        let mut cur = start;
        visited[cur] = true;
        while !visited[perm[cur]] {
            swaps.push((cur, perm[cur]));
            cur = perm[cur];
            visited[cur] = true;
        }
    }

    return Ok(swaps);
}

/// Apply `swaps` to `values` in order.
pub fn apply<T>(values: &mut [T], swaps: &[(usize, usize)]) {
    for &(a, b) in swaps {
        values.swap(a, b);
    }
}
