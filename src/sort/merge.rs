// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Mergesort expressed entirely through compares and swaps.
//!
//! A merge wants to move every element of a range to a new place at once,
//! but the only way to move anything is a pairwise swap. So the merge is
//! first simulated with comparisons, producing a permutation of the range,
//! and that permutation is then carried out with the fewest swaps.

use super::permutation::decompose;
use crate::error::Result;
use crate::sequence::Sortable;

pub fn mergesort<S: Sortable + ?Sized>(seq: &mut S) -> Result<()> {
    let n = seq.len();
    if n < 2 {
        return Ok(());
    }
    return mergesort_range(seq, 0, n - 1);
}

/// Sort the inclusive range `[left, right]`.
pub fn mergesort_range<S: Sortable + ?Sized>(seq: &mut S, left: usize, right: usize) -> Result<()> {
    if left >= right {
        return Ok(());
    }
    let mid = (left + right) / 2;
    mergesort_range(seq, left, mid)?;
    mergesort_range(seq, mid + 1, right)?;
    return merge(seq, left, mid, right);
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`.
fn merge<S: Sortable + ?Sized>(seq: &mut S, left: usize, mid: usize, right: usize) -> Result<()> {
    // perm[k] is the offset, relative to `left`, of the element that
    // belongs at `left + k` once merged.
    let mut perm = Vec::with_capacity(right - left + 1);
    let mut next_left = left;
    let mut next_right = mid + 1;
    while next_left <= mid || next_right <= right {
        let take_left = if next_left > mid {
            false
        } else if next_right > right {
            true
        } else {
            // Ties take the left run, keeping the merge stable.
            !seq.less_than(next_right, next_left)
        };
        if take_left {
            perm.push(next_left - left);
            next_left += 1;
        } else {
            perm.push(next_right - left);
            next_right += 1;
        }
    }

    for (a, b) in decompose(&perm)? {
        seq.swap(a + left, b + left);
    }
    return Ok(());
}
