//! AFL fuzz harness for the sorting algorithms
//!
//! This harness checks, for arbitrary inputs:
//! 1. Sortedness: every algorithm leaves the values in ascending order
//! 2. Permutation: the sorted values are the input multiset, nothing lost
//! 3. Replay: applying the recorded swaps to the input reproduces the output
//!
//! Input layout: byte 0 picks the algorithm, byte 1 the pivot strategy,
//! byte 2 seeds the random pivot, and the rest are the values.

use afl::fuzz;
use rand::SeedableRng;
use rand::rngs::StdRng;

use animsort::sequence::Trace;
use animsort::sequence::replay;
use animsort::sort::Algorithm;
use animsort::sort::PivotStrategy;

/// A fuzz case decoded from raw bytes.
#[derive(Debug, Clone)]
struct FuzzCase {
    algorithm: Algorithm,
    pivot: PivotStrategy,
    seed: u8,
    values: Vec<u8>,
}

impl FuzzCase {
    fn from_bytes(bytes: &[u8]) -> Option<FuzzCase> {
        if bytes.len() < 3 {
            return None;
        }
        let algorithm = Algorithm::ALL[bytes[0] as usize % Algorithm::ALL.len()];
        let pivot = PivotStrategy::ALL[bytes[1] as usize % PivotStrategy::ALL.len()];
        let mut values = bytes[3..].to_vec();

        // Bitonic only takes powers of two; trim down to the nearest one.
        if algorithm == Algorithm::BitonicMergesort && values.len() > 1 {
            let keep = 1 << values.len().ilog2();
            values.truncate(keep);
        }

        return Some(FuzzCase {
            algorithm,
            pivot,
            seed: bytes[2],
            values,
        });
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some(case) = FuzzCase::from_bytes(data) else {
            return;
        };

        let mut trace = Trace::new(&case.values);
        let mut rng = StdRng::seed_from_u64(case.seed as u64);
        case.algorithm
            .run(&mut trace, case.pivot, &mut rng)
            .expect("fuzz input is always a valid length");

        let mut expected = case.values.clone();
        expected.sort();
        assert_eq!(
            trace.values(), expected.as_slice(),
            "{} with {} pivot did not sort {:?}",
            case.algorithm, case.pivot, case.values
        );

        let mut replayed = case.values.clone();
        replay(&mut replayed, trace.actions());
        assert_eq!(replayed.as_slice(), trace.values(), "replay diverged from logical result");
    });
}
