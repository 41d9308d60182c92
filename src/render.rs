// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Renderers: where a frame of values and highlight colors ends up.

use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use crate::sequence::Color;

/// Paints one frame. `colors` always has the same length as `values`.
pub trait Renderer<T> {
    fn render(&mut self, values: &[T], colors: &[Color]) -> io::Result<()>;
}

/// A single rendered frame, as captured by [`FrameRecorder`].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<T> {
    pub values: Vec<T>,
    pub colors: Vec<Color>,
}

impl<T> Frame<T> {
    /// Positions that are highlighted in this frame.
    pub fn highlighted(&self) -> Vec<usize> {
        return self
            .colors
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != Color::Default)
            .map(|(i, _)| i)
            .collect();
    }
}

/// Keeps every frame it is asked to render.
///
/// Clones share the same storage, so one clone can be handed to an
/// animated sequence while another is kept to inspect the frames.
#[derive(Clone, Debug)]
pub struct FrameRecorder<T> {
    frames: Arc<Mutex<Vec<Frame<T>>>>,
}

impl<T: Clone> FrameRecorder<T> {
    pub fn new() -> FrameRecorder<T> {
        return FrameRecorder {
            frames: Arc::new(Mutex::new(Vec::new())),
        };
    }

    /// A copy of all frames rendered so far.
    pub fn frames(&self) -> Vec<Frame<T>> {
        return self.lock().clone();
    }

    /// Number of frames rendered so far.
    pub fn len(&self) -> usize {
        return self.lock().len();
    }

    pub fn is_empty(&self) -> bool {
        return self.lock().is_empty();
    }

    /// The most recent frame, if any.
    pub fn last(&self) -> Option<Frame<T>> {
        return self.lock().last().cloned();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Frame<T>>> {
        return self.frames.lock().unwrap_or_else(|e| e.into_inner());
    }
}

impl<T: Clone> Default for FrameRecorder<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Clone> Renderer<T> for FrameRecorder<T> {
    fn render(&mut self, values: &[T], colors: &[Color]) -> io::Result<()> {
        self.lock().push(Frame {
            values: values.to_vec(),
            colors: colors.to_vec(),
        });
        return Ok(());
    }
}

const RESET: &str = "\x1b[0m";

fn ansi(color: Color) -> &'static str {
    return match color {
        Color::Default => "\x1b[90m",
        Color::Comparing => "\x1b[34m",
        Color::Swapping => "\x1b[31m",
    };
}

/// Draws each value as a horizontal bar of block characters, one row per
/// position, redrawing in place from the top-left corner.
///
/// Bars grow from a zero baseline: positive values to its right, negative
/// values to its left. With no negative values the baseline is the left
/// edge.
pub struct TerminalRenderer<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TerminalRenderer<W> {
    /// `width` is the length in cells of the longest bar.
    pub fn new(out: W, width: usize) -> TerminalRenderer<W> {
        return TerminalRenderer {
            out,
            width: width.max(1),
        };
    }

    pub fn into_inner(self) -> W {
        return self.out;
    }

    /// Column of the zero baseline and cells per unit of value.
    fn baseline(&self, min: f64, max: f64) -> (usize, f64) {
        let low = min.min(0.0);
        let high = max.max(0.0);
        let span = high - low;
        if span <= 0.0 || !span.is_finite() {
            return (0, 0.0);
        }
        let scale = self.width as f64 / span;
        let zero = (-low * scale).round() as usize;
        return (zero.min(self.width), scale);
    }

    /// Bar length for `value`, at least one cell and at most `room`.
    fn bar_len(value: f64, scale: f64, room: usize) -> usize {
        let scaled = (value.abs() * scale).round();
        if !scaled.is_finite() {
            return 1;
        }
        return (scaled as usize).clamp(1, room.max(1));
    }
}

impl<T, W> Renderer<T> for TerminalRenderer<W>
where
    T: Copy + Into<f64>,
    W: Write,
{
    fn render(&mut self, values: &[T], colors: &[Color]) -> io::Result<()> {
        let numbers: Vec<f64> = values.iter().map(|v| (*v).into()).collect();
        let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
        let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let (zero, scale) = self.baseline(min, max);

        let mut frame = String::new();
        frame.push_str("\x1b[H");
        for (value, color) in numbers.iter().zip(colors) {
            let len = if *value < 0.0 {
                let len = Self::bar_len(*value, scale, zero);
                frame.push_str(&" ".repeat(zero.saturating_sub(len)));
                len
            } else {
                frame.push_str(&" ".repeat(zero));
                Self::bar_len(*value, scale, self.width - zero)
            };
            frame.push_str(ansi(*color));
            frame.push_str(&"█".repeat(len));
            frame.push_str(RESET);
            frame.push_str("\x1b[K\n");
        }
        self.out.write_all(frame.as_bytes())?;
        return self.out.flush();
    }
}
