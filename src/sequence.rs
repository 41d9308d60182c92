// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The two primitives every sort is written against.
//!
//! A sort never touches the data directly. It asks a [`Sortable`] to
//! compare two positions or to swap them, and each request is recorded
//! as an [`Action`]. That record is what lets a sort run to completion
//! synchronously while its effect is replayed later, one step at a time.

use std::cmp::Ordering;

/// A recorded comparison or swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Compare(usize, usize),
    Swap(usize, usize),
}

impl Action {
    /// The two positions the action touches.
    pub fn indices(&self) -> (usize, usize) {
        return match *self {
            Action::Compare(i, j) => (i, j),
            Action::Swap(i, j) => (i, j),
        };
    }
}

/// Highlight state of a single position in a rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Default,
    Comparing,
    Swapping,
}

/// A sequence that can only be inspected and rearranged one pair at a time.
///
/// Indices outside `0..len()` are a programming error; implementations
/// panic rather than returning an error.
pub trait Sortable {
    /// Number of elements. Fixed for the lifetime of the sequence.
    fn len(&self) -> usize;

    /// Compare the elements at `i` and `j`, recording the comparison.
    fn compare(&mut self, i: usize, j: usize) -> Ordering;

    /// Exchange the elements at `i` and `j`, recording the swap.
    fn swap(&mut self, i: usize, j: usize);

    /// True if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// True if the element at `i` is strictly less than the one at `j`.
    fn less_than(&mut self, i: usize, j: usize) -> bool {
        return self.compare(i, j) == Ordering::Less;
    }
}

/// Order two values, treating incomparable ones (NaN) as equal.
pub(crate) fn order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    return a.partial_cmp(b).unwrap_or(Ordering::Equal);
}

pub(crate) fn check_index(i: usize, len: usize) {
    assert!(i < len, "index {} out of range for sequence of length {}", i, len);
}

/// A [`Sortable`] that keeps its actions in memory and never renders.
///
/// Useful wherever only the logical result and the action log matter.
#[derive(Clone, Debug, Default)]
pub struct Trace<T> {
    values: Vec<T>,
    actions: Vec<Action>,
}

impl<T: Copy + PartialOrd> Trace<T> {
    pub fn new(values: &[T]) -> Trace<T> {
        return Trace {
            values: values.to_vec(),
            actions: Vec::new(),
        };
    }

    pub fn values(&self) -> &[T] {
        return &self.values;
    }

    pub fn actions(&self) -> &[Action] {
        return &self.actions;
    }

    /// Number of recorded swaps.
    pub fn swaps(&self) -> usize {
        return self.actions.iter().filter(|a| matches!(a, Action::Swap(..))).count();
    }

    /// Number of recorded comparisons.
    pub fn comparisons(&self) -> usize {
        return self.actions.len() - self.swaps();
    }
}

impl<T: Copy + PartialOrd> Sortable for Trace<T> {
    fn len(&self) -> usize {
        return self.values.len();
    }

    fn compare(&mut self, i: usize, j: usize) -> Ordering {
        check_index(i, self.values.len());
        check_index(j, self.values.len());
        self.actions.push(Action::Compare(i, j));
        return order(&self.values[i], &self.values[j]);
    }

    fn swap(&mut self, i: usize, j: usize) {
        check_index(i, self.values.len());
        check_index(j, self.values.len());
        self.actions.push(Action::Swap(i, j));
        self.values.swap(i, j);
    }
}

/// Apply the swaps in `actions` to `values`, in order. Comparisons are skipped.
pub fn replay<T>(values: &mut [T], actions: &[Action]) {
    for action in actions {
        if let Action::Swap(i, j) = *action {
            values.swap(i, j);
        }
    }
}
