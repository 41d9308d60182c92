// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Tests for replaying a sort through an animated sequence.

use std::io;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use animsort::Error;
use animsort::animated::AnimatedSequence;
use animsort::render::Frame;
use animsort::render::FrameRecorder;
use animsort::render::Renderer;
use animsort::schedule::ManualTicker;
use animsort::schedule::ThreadScheduler;
use animsort::sequence::Action;
use animsort::sequence::Color;
use animsort::sequence::Sortable;
use animsort::sequence::Trace;
use animsort::sort::Algorithm;
use animsort::sort::PivotStrategy;

// =============================================================================
// Test helpers
// =============================================================================

const INTERVAL: Duration = Duration::from_millis(10);

fn animated(values: &[i32]) -> (AnimatedSequence<i32>, ManualTicker, FrameRecorder<i32>) {
    let recorder = FrameRecorder::new();
    let mut ticker = ManualTicker::new();
    let seq = AnimatedSequence::new(values, recorder.clone(), &mut ticker, INTERVAL).unwrap();
    return (seq, ticker, recorder);
}

fn drain(seq: &AnimatedSequence<i32>, ticker: &ManualTicker) -> usize {
    let mut ticks = 0;
    while seq.pending() > 0 {
        assert!(ticker.tick().unwrap());
        ticks += 1;
    }
    return ticks;
}

/// Fails on the `fail_at`-th render (0 is the initial render).
struct FailingRenderer {
    renders: usize,
    fail_at: usize,
}

impl Renderer<i32> for FailingRenderer {
    fn render(&mut self, _values: &[i32], _colors: &[Color]) -> io::Result<()> {
        let n = self.renders;
        self.renders += 1;
        if n == self.fail_at {
            return Err(io::Error::other("surface lost"));
        }
        return Ok(());
    }
}

// =============================================================================
// Construction and ticking
// =============================================================================

#[test]
fn construction_renders_initial_state_once() {
    let (seq, ticker, recorder) = animated(&[3, 1, 2]);
    assert_eq!(recorder.len(), 1);
    let frame = recorder.last().unwrap();
    assert_eq!(frame.values, vec![3, 1, 2]);
    assert!(frame.highlighted().is_empty());
    assert_eq!(seq.len(), 3);
    assert!(ticker.is_scheduled());
}

#[test]
fn sorting_finishes_before_anything_is_shown() {
    let (mut seq, _ticker, recorder) = animated(&[3, 1, 2]);
    Algorithm::Bubblesort
        .run(&mut seq, PivotStrategy::First, &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert_eq!(seq.values(), &[1, 2, 3]);
    assert!(seq.pending() > 0);
    assert_eq!(recorder.len(), 1);
}

#[test]
fn each_tick_replays_exactly_one_action() {
    let values = [4, 2, 5, 1, 3];
    let (mut seq, ticker, recorder) = animated(&values);
    let mut trace = Trace::new(&values);
    Algorithm::Insertionsort
        .run(&mut seq, PivotStrategy::First, &mut StdRng::seed_from_u64(0))
        .unwrap();
    Algorithm::Insertionsort
        .run(&mut trace, PivotStrategy::First, &mut StdRng::seed_from_u64(0))
        .unwrap();

    let ticks = drain(&seq, &ticker);
    assert_eq!(ticks, trace.actions().len());

    let frames = recorder.frames();
    assert_eq!(frames.len(), 1 + trace.actions().len());

    let mut display = values.to_vec();
    for (action, frame) in trace.actions().iter().zip(&frames[1..]) {
        let (i, j) = action.indices();
        let expected_color = match action {
            Action::Compare(..) => Color::Comparing,
            Action::Swap(..) => {
                display.swap(i, j);
                Color::Swapping
            }
        };
        assert_eq!(frame.values, display, "after {:?}", action);
        assert_eq!(frame.colors[i], expected_color);
        assert_eq!(frame.colors[j], expected_color);
        let mut touched = vec![i, j];
        touched.dedup();
        touched.sort();
        assert_eq!(frame.highlighted(), touched);
    }
    assert_eq!(display, seq.values());
}

#[test]
fn idle_ticks_rerender_final_frame() {
    let (mut seq, ticker, recorder) = animated(&[2, 1]);
    seq.swap(0, 1);
    drain(&seq, &ticker);
    let before = recorder.len();
    ticker.tick_n(3).unwrap();
    let frames = recorder.frames();
    assert_eq!(frames.len(), before + 3);
    let idle: Vec<&Frame<i32>> = frames[before..].iter().collect();
    for frame in idle {
        assert_eq!(frame.values, vec![1, 2]);
        assert!(frame.highlighted().is_empty());
    }
}

#[test]
fn compare_reports_sign_and_records() {
    let (mut seq, _ticker, _recorder) = animated(&[5, 1, 5]);
    assert!(seq.compare(0, 1).is_gt());
    assert!(seq.compare(1, 0).is_lt());
    assert!(seq.compare(0, 2).is_eq());
    assert!(seq.less_than(1, 2));
    assert_eq!(seq.pending(), 4);
}

#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_swap_panics() {
    let (mut seq, _ticker, _recorder) = animated(&[1, 2]);
    seq.swap(0, 5);
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn cancel_stops_rendering() {
    let (mut seq, ticker, recorder) = animated(&[3, 2, 1]);
    seq.swap(0, 2);
    seq.cancel().unwrap();
    seq.cancel().unwrap();
    assert!(seq.is_cancelled());
    assert!(!ticker.tick().unwrap());

    // The logical data is still usable.
    seq.swap(0, 1);
    assert!(seq.less_than(1, 0));
    assert_eq!(seq.values(), &[2, 1, 3]);
    assert!(!ticker.tick().unwrap());
    assert_eq!(recorder.len(), 1);
}

#[test]
fn dropping_the_sequence_stops_ticking() {
    let (seq, ticker, _recorder) = animated(&[1]);
    drop(seq);
    assert!(!ticker.is_scheduled());
}

// =============================================================================
// Renderer failures
// =============================================================================

#[test]
fn initial_render_failure_fails_construction() {
    let mut ticker = ManualTicker::new();
    let renderer = FailingRenderer { renders: 0, fail_at: 0 };
    let result = AnimatedSequence::new(&[1, 2], renderer, &mut ticker, INTERVAL);
    assert!(matches!(result, Err(Error::Render(_))));
    assert!(!ticker.is_scheduled());
}

#[test]
fn tick_render_failure_reaches_the_caller() {
    let mut ticker = ManualTicker::new();
    let renderer = FailingRenderer { renders: 0, fail_at: 2 };
    let mut seq = AnimatedSequence::new(&[2, 1], renderer, &mut ticker, INTERVAL).unwrap();
    seq.swap(0, 1);
    assert!(ticker.tick().unwrap());
    assert!(matches!(ticker.tick(), Err(Error::Render(_))));
}

#[test]
fn thread_tick_failure_is_reported_by_cancel() {
    let mut scheduler = ThreadScheduler::new();
    let renderer = FailingRenderer { renders: 0, fail_at: 1 };
    let mut seq = AnimatedSequence::new(&[2, 1], renderer, &mut scheduler, Duration::from_millis(1)).unwrap();
    let deadline = Instant::now() + Duration::from_secs(5);
    while !seq.is_cancelled() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(1));
    }
    assert!(matches!(seq.cancel(), Err(Error::Render(_))));
    assert!(seq.cancel().is_ok());
}

// =============================================================================
// Thread scheduler end to end
// =============================================================================

#[test]
fn thread_scheduler_replays_whole_sort() {
    let values = [9, 4, 7, 1, 8, 2, 6, 3, 5, 0];
    let recorder = FrameRecorder::new();
    let mut scheduler = ThreadScheduler::new();
    let mut seq = AnimatedSequence::new(&values, recorder.clone(), &mut scheduler, Duration::from_millis(1)).unwrap();
    Algorithm::Mergesort
        .run(&mut seq, PivotStrategy::First, &mut StdRng::seed_from_u64(0))
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    while seq.pending() > 0 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(2));
    }
    // One more tick so the frame for the last action has been drawn.
    thread::sleep(Duration::from_millis(20));
    seq.cancel().unwrap();

    assert_eq!(seq.pending(), 0);
    let last = recorder.last().unwrap();
    assert_eq!(last.values, (0..10).collect::<Vec<i32>>());
}

// =============================================================================
// Convergence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After every queued action is replayed, the display copy equals the
    /// logical copy, and no frame ever highlights more than two positions.
    #[test]
    fn display_converges_to_logical(
        values in prop::collection::vec(-50i32..50, 0..40),
        algorithm in prop::sample::select(Algorithm::ALL.to_vec()),
        pivot in prop::sample::select(PivotStrategy::ALL.to_vec()),
    ) {
        prop_assume!(algorithm != Algorithm::BitonicMergesort || values.len() < 2 || values.len().is_power_of_two());
        let (mut seq, ticker, recorder) = animated(&values);
        algorithm.run(&mut seq, pivot, &mut StdRng::seed_from_u64(4)).unwrap();
        let ticks = drain(&seq, &ticker);

        let frames = recorder.frames();
        prop_assert_eq!(frames.len(), ticks + 1);
        prop_assert!(frames.iter().all(|f| f.highlighted().len() <= 2));
        prop_assert_eq!(frames.last().unwrap().values.as_slice(), seq.values());
    }
}
