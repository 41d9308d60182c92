// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! A sequence whose rearrangement is replayed visually after the fact.
//!
//! An [`AnimatedSequence`] keeps two copies of the data. The logical copy
//! is updated immediately by `compare`/`swap`, so a sort can run straight
//! through as ordinary synchronous code. Every call is also pushed onto a
//! queue of [`Action`]s. A periodic tick pops one action at a time, applies
//! it to the display copy, and hands the display copy to a [`Renderer`]
//! with the touched positions highlighted for exactly one frame.
//!
//! The queue is a single-producer, single-consumer channel: the sorting
//! side only sends, the tick side only receives. The display copy and the
//! colors live entirely inside the tick, so nothing is shared mutably.
//!
//! ```
//! use std::time::Duration;
//! use animsort::animated::AnimatedSequence;
//! use animsort::render::FrameRecorder;
//! use animsort::schedule::ManualTicker;
//! use animsort::sort::Algorithm;
//!
//! let recorder = FrameRecorder::new();
//! let mut ticker = ManualTicker::new();
//! let mut seq = AnimatedSequence::new(&[3, 1, 2], recorder.clone(), &mut ticker, Duration::from_millis(10)).unwrap();
//!
//! Algorithm::Insertionsort.run(&mut seq, Default::default(), &mut rand::thread_rng()).unwrap();
//! assert_eq!(seq.values(), &[1, 2, 3]);
//!
//! // Nothing has been replayed yet; drain the queue one tick at a time.
//! while seq.pending() > 0 {
//!     ticker.tick().unwrap();
//! }
//! assert_eq!(recorder.last().unwrap().values, vec![1, 2, 3]);
//! ```

use std::cmp::Ordering;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossbeam_channel::Sender;

use crate::error::Error;
use crate::error::Result;
use crate::render::Renderer;
use crate::schedule::Scheduler;
use crate::schedule::TickHandle;
use crate::sequence::Action;
use crate::sequence::Color;
use crate::sequence::Sortable;
use crate::sequence::check_index;
use crate::sequence::order;

/// The tick side of an animated sequence: the display copy, its colors,
/// the receiving end of the action queue, and the renderer.
pub(crate) struct Playback<T, R> {
    display: Vec<T>,
    colors: Vec<Color>,
    actions: Receiver<Action>,
    renderer: R,
}

impl<T: Copy, R: Renderer<T>> Playback<T, R> {
    /// Replay at most one action and render the result.
    ///
    /// With nothing queued this re-renders the current frame unchanged.
    pub(crate) fn step(&mut self) -> Result<()> {
        let Ok(action) = self.actions.try_recv() else {
            return self.draw();
        };

        let (i, j) = action.indices();
        match action {
            Action::Compare(..) => {
                self.colors[i] = Color::Comparing;
                self.colors[j] = Color::Comparing;
            }
            Action::Swap(..) => {
                self.colors[i] = Color::Swapping;
                self.colors[j] = Color::Swapping;
                self.display.swap(i, j);
            }
        }

        let drawn = self.draw();
        self.colors[i] = Color::Default;
        self.colors[j] = Color::Default;
        return drawn;
    }

    fn draw(&mut self) -> Result<()> {
        return self.renderer.render(&self.display, &self.colors).map_err(Error::Render);
    }
}

/// A sequence whose compares and swaps are replayed on a periodic tick.
pub struct AnimatedSequence<T> {
    values: Vec<T>,
    actions: Sender<Action>,
    handle: Box<dyn TickHandle>,
}

impl<T> AnimatedSequence<T>
where
    T: Copy + PartialOrd + Send + 'static,
{
    /// Copy `values`, render them once, and start ticking every `interval`.
    ///
    /// Fails only if that first render fails or the scheduler cannot start.
    pub fn new<R, S>(
        values: &[T],
        mut renderer: R,
        scheduler: &mut S,
        interval: Duration,
    ) -> Result<AnimatedSequence<T>>
    where
        R: Renderer<T> + Send + 'static,
        S: Scheduler + ?Sized,
    {
        let colors = vec![Color::Default; values.len()];
        renderer.render(values, &colors).map_err(Error::Render)?;

        let (sender, receiver) = crossbeam_channel::unbounded();
        let mut playback = Playback {
            display: values.to_vec(),
            colors,
            actions: receiver,
            renderer,
        };
        let handle = scheduler.schedule(Box::new(move || playback.step()), interval)?;

        tracing::debug!(
            len = values.len(),
            interval_ms = interval.as_millis() as u64,
            "animated sequence started"
        );
        return Ok(AnimatedSequence {
            values: values.to_vec(),
            actions: sender,
            handle,
        });
    }
}

impl<T> AnimatedSequence<T> {
    /// The logical data, with every swap so far already applied.
    pub fn values(&self) -> &[T] {
        return &self.values;
    }

    /// Actions recorded but not yet replayed.
    pub fn pending(&self) -> usize {
        return self.actions.len();
    }

    /// Stop ticking. Actions still queued are never replayed.
    ///
    /// Calling this again is a no-op. The first call reports a renderer
    /// failure that stopped the tick early, if any. After cancelling, the
    /// logical data can still be compared and swapped, but nothing more is
    /// rendered and ticking cannot be restarted.
    pub fn cancel(&mut self) -> Result<()> {
        if !self.handle.is_cancelled() {
            tracing::debug!(pending = self.pending(), "cancelling animated sequence");
        }
        return self.handle.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        return self.handle.is_cancelled();
    }

    fn record(&self, action: Action) {
        // Once the tick is gone the receiver is dropped and actions are
        // simply discarded.
        let _ = self.actions.send(action);
    }
}

impl<T: Copy + PartialOrd> Sortable for AnimatedSequence<T> {
    fn len(&self) -> usize {
        return self.values.len();
    }

    fn compare(&mut self, i: usize, j: usize) -> Ordering {
        check_index(i, self.values.len());
        check_index(j, self.values.len());
        self.record(Action::Compare(i, j));
        return order(&self.values[i], &self.values[j]);
    }

    fn swap(&mut self, i: usize, j: usize) {
        check_index(i, self.values.len());
        check_index(j, self.values.len());
        self.record(Action::Swap(i, j));
        self.values.swap(i, j);
    }
}

impl<T> Drop for AnimatedSequence<T> {
    fn drop(&mut self) {
        if let Err(error) = self.handle.cancel() {
            tracing::warn!(%error, "tick had already failed");
        }
    }
}
