// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Bitonic mergesort: a fixed network of compare-and-swap steps.
//!
//! Stage `s` merges neighbouring blocks of size `s`, alternating ascending
//! and descending, so each pair of blocks forms a bitonic run of size `2s`
//! for the next stage. The last stage merges the whole sequence ascending.

use crate::error::Error;
use crate::error::Result;
use crate::sequence::Sortable;

/// Sort a sequence whose length is a power of two.
///
/// Lengths 0 and 1 are already sorted. Any other length that is not a
/// power of two is rejected before anything is compared.
pub fn bitonic_mergesort<S: Sortable + ?Sized>(seq: &mut S) -> Result<()> {
    let n = seq.len();
    if n < 2 {
        return Ok(());
    }
    check_len(n)?;

    let mut size = 2;
    while size <= n {
        let mut start = 0;
        while start < n {
            bitonic_merge(seq, true, start, size);
            if start + size < n {
                bitonic_merge(seq, false, start + size, size);
            }
            start += 2 * size;
        }
        size *= 2;
    }
    return Ok(());
}

/// Reject lengths the network cannot handle.
pub fn check_len(n: usize) -> Result<()> {
    if n > 1 && !n.is_power_of_two() {
        return Err(Error::invalid(format!(
            "bitonic mergesort needs a power of two length, got {}",
            n
        )));
    }
    return Ok(());
}

/// Merge the bitonic block of `len` elements starting at `left` into
/// ascending (`up`) or descending order.
fn bitonic_merge<S: Sortable + ?Sized>(seq: &mut S, up: bool, left: usize, len: usize) {
    let mut step = len / 2;
    while step > 0 {
        let mut i = 0;
        while i < len {
            for j in i..i + step {
                let a = left + j;
                let b = left + j + step;
                let out_of_order = if up {
                    seq.compare(a, b).is_gt()
                } else {
                    seq.compare(a, b).is_lt()
                };
                if out_of_order {
                    seq.swap(a, b);
                }
            }
            i += 2 * step;
        }
        step /= 2;
    }
}
