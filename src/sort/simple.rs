// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Quadratic sorts built from adjacent or single exchanges.

use crate::sequence::Sortable;

/// Repeated adjacent passes; the upper bound shrinks by one each pass.
pub fn bubblesort<S: Sortable + ?Sized>(seq: &mut S) {
    let n = seq.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if seq.less_than(j + 1, j) {
                seq.swap(j, j + 1);
            }
        }
    }
}

/// Find the minimum of the remainder and swap it into place.
/// Always performs exactly `n - 1` swaps.
pub fn selectionsort<S: Sortable + ?Sized>(seq: &mut S) {
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_j = i;
        for j in i..n {
            if seq.less_than(j, min_j) {
                min_j = j;
            }
        }
        seq.swap(i, min_j);
    }
}

pub fn insertionsort<S: Sortable + ?Sized>(seq: &mut S) {
    let n = seq.len();
    for i in 1..n {
        let mut j = i;
        while j > 0 && seq.less_than(j, j - 1) {
            seq.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Alternate odd and even adjacent passes until a full round swaps nothing.
pub fn odd_even_sort<S: Sortable + ?Sized>(seq: &mut S) {
    let n = seq.len();
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for parity in 0..=1 {
            let mut i = parity;
            while i + 1 < n {
                if seq.less_than(i + 1, i) {
                    seq.swap(i + 1, i);
                    sorted = false;
                }
                i += 2;
            }
        }
    }
}

/// Bidirectional bubble sort. Each pass pulls the active range in to the
/// last position it swapped.
pub fn cocktail_sort<S: Sortable + ?Sized>(seq: &mut S) {
    let n = seq.len();
    if n < 2 {
        return;
    }

    let mut left = 0;
    let mut right = n - 1;
    while left < right {
        let mut new_right = right - 1;
        for i in left..right {
            if seq.less_than(i + 1, i) {
                seq.swap(i + 1, i);
                new_right = i;
            }
        }
        right = new_right;

        let mut new_left = left + 1;
        let mut i = right;
        while i > left {
            if seq.less_than(i, i - 1) {
                seq.swap(i, i - 1);
                new_left = i;
            }
            i -= 1;
        }
        left = new_left;
    }
}
