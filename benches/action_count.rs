// Action count report - how many compares and swaps each algorithm records

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use animsort::sequence::Trace;
use animsort::sort::Algorithm;
use animsort::sort::PivotStrategy;

fn count(algorithm: Algorithm, pivot: PivotStrategy, values: &[i32]) -> (usize, usize) {
    let mut trace = Trace::new(values);
    let mut rng = StdRng::seed_from_u64(1);
    algorithm.run(&mut trace, pivot, &mut rng).unwrap();
    return (trace.comparisons(), trace.swaps());
}

fn report(label: &str, values: &[i32]) {
    println!("\n=== {} ({} values) ===", label, values.len());
    println!("{:<20} {:>12} {:>12} {:>12}", "algorithm", "compares", "swaps", "ticks");
    for algorithm in Algorithm::ALL {
        let (compares, swaps) = count(algorithm, PivotStrategy::Median3, values);
        println!(
            "{:<20} {:>12} {:>12} {:>12}",
            algorithm.name(), compares, swaps, compares + swaps
        );
    }
}

fn main() {
    let size = 256;
    let ordered: Vec<i32> = (0..size).collect();

    let mut shuffled = ordered.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(42));
    report("shuffled", &shuffled);

    let reversed: Vec<i32> = ordered.iter().rev().copied().collect();
    report("reversed", &reversed);
    report("sorted", &ordered);

    let few_unique: Vec<i32> = shuffled.iter().map(|v| v % 4).collect();
    report("four distinct values", &few_unique);

    // Pivot choice only matters to the partitioning sorts.
    println!("\n=== pivot strategies on reversed input ===");
    println!("{:<20} {:>10} {:>12} {:>12}", "algorithm", "pivot", "compares", "swaps");
    for algorithm in [Algorithm::Quicksort, Algorithm::Introsort] {
        for pivot in PivotStrategy::ALL {
            let (compares, swaps) = count(algorithm, pivot, &reversed);
            println!("{:<20} {:>10} {:>12} {:>12}", algorithm.name(), pivot.name(), compares, swaps);
        }
    }
}
