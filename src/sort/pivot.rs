// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Pivot selection and the Lomuto partition built on it.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::sequence::Sortable;

/// How a partition picks its pivot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotStrategy {
    First,
    Last,
    Middle,
    Random,
    #[default]
    Median3,
}

impl PivotStrategy {
    pub const ALL: [PivotStrategy; 5] = [
        PivotStrategy::First,
        PivotStrategy::Last,
        PivotStrategy::Middle,
        PivotStrategy::Random,
        PivotStrategy::Median3,
    ];

    pub fn name(&self) -> &'static str {
        return match self {
            PivotStrategy::First => "first",
            PivotStrategy::Last => "last",
            PivotStrategy::Middle => "middle",
            PivotStrategy::Random => "random",
            PivotStrategy::Median3 => "median3",
        };
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl FromStr for PivotStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<PivotStrategy, Error> {
        return PivotStrategy::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::invalid(format!("unknown pivot strategy `{}`", s)));
    }
}

/// `(left + right) / 2`, rounding halves up.
fn midpoint(left: usize, right: usize) -> usize {
    return (left + right + 1) / 2;
}

/// Pick a pivot index in `[left, right]`.
///
/// Only `median3` compares anything, and only when the range holds more
/// than two elements; with two, either end partitions correctly.
pub fn choose_pivot<S, R>(
    seq: &mut S,
    strategy: PivotStrategy,
    left: usize,
    right: usize,
    rng: &mut R,
) -> usize
where
    S: Sortable + ?Sized,
    R: Rng + ?Sized,
{
    debug_assert!(left <= right);
    return match strategy {
        PivotStrategy::First => left,
        PivotStrategy::Last => right,
        PivotStrategy::Middle => midpoint(left, right),
        PivotStrategy::Random => rng.gen_range(left..=right),
        PivotStrategy::Median3 => median3(seq, left, right),
    };
}

fn median3<S: Sortable + ?Sized>(seq: &mut S, left: usize, right: usize) -> usize {
    if right - left == 1 {
        return left;
    }

    // LMR, RML -> M
    // RLM, MLR -> L
    // LRM, MRL -> R
    let middle = midpoint(left, right);
    let lm = seq.less_than(left, middle);
    let mr = seq.less_than(middle, right);
    if lm == mr {
        return middle;
    }
    let lr = seq.less_than(left, right);
    if lm {
        return if lr { right } else { left };
    }
    return if lr { left } else { right };
}

/// Partition `[left, right]` around a pivot chosen by `strategy`.
///
/// Returns the pivot's final position `p`: everything before `p` is less
/// than the pivot, everything after is greater or equal.
pub fn partition<S, R>(
    seq: &mut S,
    strategy: PivotStrategy,
    left: usize,
    right: usize,
    rng: &mut R,
) -> usize
where
    S: Sortable + ?Sized,
    R: Rng + ?Sized,
{
    let chosen = choose_pivot(seq, strategy, left, right, rng);
    seq.swap(chosen, right);

    let mut pivot = left;
    for i in left..right {
        if seq.less_than(i, right) {
            if i != pivot {
                seq.swap(i, pivot);
            }
            pivot += 1;
        }
    }
    seq.swap(right, pivot);

    return pivot;
}
