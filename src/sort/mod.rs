// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The sorting algorithms, and the one place they are looked up by name.
//!
//! Every algorithm is plain synchronous code against [`Sortable`]. None of
//! them knows whether its compares and swaps are being animated.

pub mod bitonic;
pub mod heap;
pub mod merge;
pub mod permutation;
pub mod pivot;
pub mod quick;
pub mod simple;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::error::Result;
use crate::sequence::Sortable;

pub use pivot::PivotStrategy;

/// Every algorithm the crate can animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bubblesort,
    Selectionsort,
    Insertionsort,
    OddEvenSort,
    CocktailSort,
    Quicksort,
    Mergesort,
    Heapsort,
    Introsort,
    BitonicMergesort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Bubblesort,
        Algorithm::Selectionsort,
        Algorithm::Insertionsort,
        Algorithm::OddEvenSort,
        Algorithm::CocktailSort,
        Algorithm::Quicksort,
        Algorithm::Mergesort,
        Algorithm::Heapsort,
        Algorithm::Introsort,
        Algorithm::BitonicMergesort,
    ];

    pub fn name(&self) -> &'static str {
        return match self {
            Algorithm::Bubblesort => "bubblesort",
            Algorithm::Selectionsort => "selectionsort",
            Algorithm::Insertionsort => "insertionsort",
            Algorithm::OddEvenSort => "odd_even_sort",
            Algorithm::CocktailSort => "cocktail_sort",
            Algorithm::Quicksort => "quicksort",
            Algorithm::Mergesort => "mergesort",
            Algorithm::Heapsort => "heapsort",
            Algorithm::Introsort => "introsort",
            Algorithm::BitonicMergesort => "bitonic_mergesort",
        };
    }

    /// True for the algorithms that take a pivot strategy.
    pub fn needs_pivot(&self) -> bool {
        return matches!(self, Algorithm::Quicksort | Algorithm::Introsort);
    }

    /// Check that this algorithm can sort a sequence of length `n`.
    pub fn check_len(&self, n: usize) -> Result<()> {
        return match self {
            Algorithm::BitonicMergesort => bitonic::check_len(n),
            _ => Ok(()),
        };
    }

    /// Sort `seq` to completion.
    ///
    /// `pivot` and `rng` are only consulted by quicksort and introsort,
    /// and `rng` only for [`PivotStrategy::Random`].
    pub fn run<S, R>(self, seq: &mut S, pivot: PivotStrategy, rng: &mut R) -> Result<()>
    where
        S: Sortable + ?Sized,
        R: Rng + ?Sized,
    {
        self.check_len(seq.len())?;
        if self.needs_pivot() {
            tracing::debug!(algorithm = %self, %pivot, len = seq.len(), "sorting");
        } else {
            tracing::debug!(algorithm = %self, len = seq.len(), "sorting");
        }

        match self {
            Algorithm::Bubblesort => simple::bubblesort(seq),
            Algorithm::Selectionsort => simple::selectionsort(seq),
            Algorithm::Insertionsort => simple::insertionsort(seq),
            Algorithm::OddEvenSort => simple::odd_even_sort(seq),
            Algorithm::CocktailSort => simple::cocktail_sort(seq),
            Algorithm::Quicksort => quick::quicksort(seq, pivot, rng),
            Algorithm::Mergesort => merge::mergesort(seq)?,
            Algorithm::Heapsort => heap::heapsort(seq),
            Algorithm::Introsort => quick::introsort(seq, pivot, rng),
            Algorithm::BitonicMergesort => bitonic::bitonic_mergesort(seq)?,
        }

        tracing::debug!(algorithm = %self, "sorted");
        return Ok(());
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Algorithm> {
        return Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::invalid(format!("unknown algorithm `{}`", s)));
    }
}
