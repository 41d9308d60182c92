// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Heapsort over an arbitrary inclusive sub-range.

use crate::sequence::Sortable;

pub fn heapsort<S: Sortable + ?Sized>(seq: &mut S) {
    let n = seq.len();
    if n < 2 {
        return;
    }
    heapsort_range(seq, 0, n - 1);
}

/// Sort `[left, right]` in place, leaving everything outside untouched.
///
/// The heap is rooted at `left`; the children of `root` sit at
/// `left + 2 * (root - left) + 1` and `+ 2`.
pub fn heapsort_range<S: Sortable + ?Sized>(seq: &mut S, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let n = right - left + 1;

    // Build a max-heap bottom up.
    let mut start = left + n / 2;
    while start > left {
        start -= 1;
        sift_down(seq, left, start, right);
    }

    // Move the max to the end and restore the heap on what remains.
    let mut end = right;
    while end > left {
        seq.swap(end, left);
        end -= 1;
        sift_down(seq, left, left, end);
    }
}

fn sift_down<S: Sortable + ?Sized>(seq: &mut S, base: usize, start: usize, end: usize) {
    let mut root = start;
    loop {
        let left_child = base + 2 * (root - base) + 1;
        let right_child = left_child + 1;
        if left_child > end {
            return;
        }

        let mut largest = root;
        if seq.less_than(largest, left_child) {
            largest = left_child;
        }
        if right_child <= end && seq.less_than(largest, right_child) {
            largest = right_child;
        }
        if largest == root {
            return;
        }
        seq.swap(root, largest);
        root = largest;
    }
}
