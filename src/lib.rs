// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Animsort - comparison sorts replayed one compare or swap at a time.
//!
//! Sorts are ordinary synchronous functions over [`sequence::Sortable`].
//! Run one against an [`animated::AnimatedSequence`] and it finishes
//! immediately on the logical data, while every compare and swap it made
//! is queued and replayed on a periodic tick for a renderer to draw.
//!
//! # Quick Start
//!
//! ```
//! use animsort::sequence::Trace;
//! use animsort::sort::Algorithm;
//! use animsort::sort::PivotStrategy;
//!
//! let mut seq = Trace::new(&[5, 3, 8, 1]);
//! let algorithm: Algorithm = "introsort".parse().unwrap();
//! algorithm.run(&mut seq, PivotStrategy::Median3, &mut rand::thread_rng()).unwrap();
//!
//! assert_eq!(seq.values(), &[1, 3, 5, 8]);
//! assert!(!seq.actions().is_empty());
//! ```

pub mod animated;
pub mod config;
pub mod error;
pub mod render;
pub mod schedule;
pub mod sequence;
pub mod sort;

pub use error::Error;
pub use error::Result;
