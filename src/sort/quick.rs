// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Quicksort, and introsort which bounds it by falling back to heapsort.

use rand::Rng;

use super::heap::heapsort_range;
use super::pivot::PivotStrategy;
use super::pivot::partition;
use crate::sequence::Sortable;

pub fn quicksort<S, R>(seq: &mut S, strategy: PivotStrategy, rng: &mut R)
where
    S: Sortable + ?Sized,
    R: Rng + ?Sized,
{
    let n = seq.len();
    if n < 2 {
        return;
    }
    quicksort_range(seq, strategy, 0, n - 1, rng);
}

/// Sort the inclusive range `[left, right]`.
pub fn quicksort_range<S, R>(seq: &mut S, strategy: PivotStrategy, left: usize, right: usize, rng: &mut R)
where
    S: Sortable + ?Sized,
    R: Rng + ?Sized,
{
    if left >= right {
        return;
    }
    let pivot = partition(seq, strategy, left, right, rng);
    if pivot > left {
        quicksort_range(seq, strategy, left, pivot - 1, rng);
    }
    quicksort_range(seq, strategy, pivot + 1, right, rng);
}

/// Recursion depth allowed before introsort gives up on partitioning:
/// `2 * floor(log2(n))`.
pub fn max_depth(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    return 2 * n.ilog2() as usize;
}

pub fn introsort<S, R>(seq: &mut S, strategy: PivotStrategy, rng: &mut R)
where
    S: Sortable + ?Sized,
    R: Rng + ?Sized,
{
    let n = seq.len();
    if n < 2 {
        return;
    }
    introsort_range(seq, strategy, 0, n - 1, max_depth(n), rng);
}

/// Quicksort on `[left, right]` with a depth budget. Each level spends one;
/// a range reached with none left is heapsorted instead.
pub fn introsort_range<S, R>(
    seq: &mut S,
    strategy: PivotStrategy,
    left: usize,
    right: usize,
    depth: usize,
    rng: &mut R,
) where
    S: Sortable + ?Sized,
    R: Rng + ?Sized,
{
    if left >= right {
        return;
    }
    if depth == 0 {
        heapsort_range(seq, left, right);
        return;
    }
    let pivot = partition(seq, strategy, left, right, rng);
    if pivot > left {
        introsort_range(seq, strategy, left, pivot - 1, depth - 1, rng);
    }
    introsort_range(seq, strategy, pivot + 1, right, depth - 1, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Trace;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn max_depth_is_twice_floor_log2() {
        assert_eq!(max_depth(0), 0);
        assert_eq!(max_depth(1), 0);
        assert_eq!(max_depth(2), 2);
        assert_eq!(max_depth(7), 4);
        assert_eq!(max_depth(8), 6);
        assert_eq!(max_depth(1000), 18);
    }

    #[test]
    fn quicksort_every_strategy() {
        let values = [5, -3, 8, 8, 0, 12, 7, 1, 1, 9, -3];
        let mut expected = values.to_vec();
        expected.sort();
        for strategy in PivotStrategy::ALL {
            let mut trace = Trace::new(&values);
            quicksort(&mut trace, strategy, &mut StdRng::seed_from_u64(11));
            assert_eq!(trace.values(), expected.as_slice(), "{}", strategy);
        }
    }

    #[test]
    fn introsort_every_strategy() {
        let values: Vec<i32> = (0..64).map(|i| (i * 37) % 64).collect();
        let expected: Vec<i32> = (0..64).collect();
        for strategy in PivotStrategy::ALL {
            let mut trace = Trace::new(&values);
            introsort(&mut trace, strategy, &mut StdRng::seed_from_u64(5));
            assert_eq!(trace.values(), expected.as_slice(), "{}", strategy);
        }
    }

    #[test]
    fn zero_depth_falls_back_to_heapsort() {
        let values = [4, 3, 2, 1];
        let mut intro = Trace::new(&values);
        introsort_range(&mut intro, PivotStrategy::First, 0, 3, 0, &mut StdRng::seed_from_u64(0));
        let mut heap = Trace::new(&values);
        heapsort_range(&mut heap, 0, 3);
        assert_eq!(intro.actions(), heap.actions());
    }

    #[test]
    fn introsort_bounds_adversarial_input() {
        // Sorted input is quadratic for a `first` pivot quicksort.
        let values: Vec<i32> = (0..256).collect();
        let mut quick = Trace::new(&values);
        quicksort(&mut quick, PivotStrategy::First, &mut StdRng::seed_from_u64(0));
        let mut intro = Trace::new(&values);
        introsort(&mut intro, PivotStrategy::First, &mut StdRng::seed_from_u64(0));
        assert_eq!(intro.values(), values.as_slice());
        assert!(intro.comparisons() < quick.comparisons() / 2);
    }
}
