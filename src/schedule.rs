// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Periodic callbacks.
//!
//! A [`Scheduler`] takes a tick function and an interval and keeps calling
//! the function until the returned [`TickHandle`] is cancelled. Ticks are
//! never closer together than the interval, but no tighter timing is
//! promised.
//!
//! - [`ThreadScheduler`] runs ticks on a dedicated thread.
//! - [`ManualTicker`] runs a tick only when asked, which makes playback
//!   fully deterministic in tests.

use std::io;
use std::sync::Arc;
use std::sync::Condvar;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;
use std::time::Instant;

use crate::error::Error;
use crate::error::Result;

/// The function a scheduler calls on every tick.
pub type Tick = Box<dyn FnMut() -> Result<()> + Send>;

/// Controls a scheduled tick.
pub trait TickHandle: Send {
    /// Stop further ticks. Safe to call more than once.
    ///
    /// Reports the error that stopped the tick early, if there was one.
    fn cancel(&mut self) -> Result<()>;

    fn is_cancelled(&self) -> bool;
}

pub trait Scheduler {
    fn schedule(&mut self, tick: Tick, interval: Duration) -> Result<Box<dyn TickHandle>>;
}

// =============================================================================
// Thread scheduler
// =============================================================================

struct Signal {
    cancelled: AtomicBool,
    notify: (Mutex<()>, Condvar),
}

impl Signal {
    fn new() -> Signal {
        return Signal {
            cancelled: AtomicBool::new(false),
            notify: (Mutex::new(()), Condvar::new()),
        };
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        let (lock, cvar) = &self.notify;
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        cvar.notify_all();
    }

    fn is_cancelled(&self) -> bool {
        return self.cancelled.load(Ordering::Acquire);
    }

    /// Sleep for `duration` or until cancelled. Returns true if cancelled.
    fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &self.notify;
        let mut guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        let start = Instant::now();
        loop {
            if self.is_cancelled() {
                return true;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            let (next, _) = cvar
                .wait_timeout(guard, duration - elapsed)
                .unwrap_or_else(|e| e.into_inner());
            guard = next;
        }
    }
}

/// Runs each scheduled tick on its own named thread.
#[derive(Clone, Debug)]
pub struct ThreadScheduler {
    name: String,
}

impl ThreadScheduler {
    pub fn new() -> ThreadScheduler {
        return ThreadScheduler {
            name: "animsort-tick".to_string(),
        };
    }

    /// Use `name` for threads spawned by this scheduler.
    pub fn with_name(name: impl Into<String>) -> ThreadScheduler {
        return ThreadScheduler { name: name.into() };
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        return Self::new();
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&mut self, mut tick: Tick, interval: Duration) -> Result<Box<dyn TickHandle>> {
        let signal = Arc::new(Signal::new());
        let observed = Arc::clone(&signal);

        let thread = thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || -> Result<()> {
                loop {
                    if observed.wait_timeout(interval) {
                        return Ok(());
                    }
                    if let Err(error) = tick() {
                        tracing::error!(%error, "tick failed, no further ticks will run");
                        observed.cancelled.store(true, Ordering::Release);
                        return Err(error);
                    }
                }
            })?;

        tracing::debug!(thread = %self.name, interval_ms = interval.as_millis() as u64, "tick scheduled");
        return Ok(Box::new(ThreadHandle {
            signal,
            thread: Some(thread),
        }));
    }
}

struct ThreadHandle {
    signal: Arc<Signal>,
    thread: Option<JoinHandle<Result<()>>>,
}

impl TickHandle for ThreadHandle {
    fn cancel(&mut self) -> Result<()> {
        self.signal.cancel();
        let Some(thread) = self.thread.take() else {
            return Ok(());
        };
        tracing::debug!("tick cancelled");
        return match thread.join() {
            Ok(result) => result,
            Err(_) => Err(Error::Io(io::Error::other("tick thread panicked"))),
        };
    }

    fn is_cancelled(&self) -> bool {
        return self.signal.is_cancelled();
    }
}

impl Drop for ThreadHandle {
    fn drop(&mut self) {
        self.signal.cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

// =============================================================================
// Manual ticker
// =============================================================================

struct Slot {
    generation: u64,
    tick: Option<Tick>,
}

/// A scheduler whose ticks run only when [`ManualTicker::tick`] is called.
///
/// The interval is ignored. Scheduling again replaces the previous tick;
/// cancelling a stale handle leaves the newer tick alone.
#[derive(Clone)]
pub struct ManualTicker {
    slot: Arc<Mutex<Slot>>,
}

impl ManualTicker {
    pub fn new() -> ManualTicker {
        return ManualTicker {
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                tick: None,
            })),
        };
    }

    /// Run the scheduled tick once.
    ///
    /// Returns `Ok(false)` if nothing is scheduled or it was cancelled.
    pub fn tick(&self) -> Result<bool> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        let Some(tick) = slot.tick.as_mut() else {
            return Ok(false);
        };
        tick()?;
        return Ok(true);
    }

    /// Run up to `n` ticks, stopping early if the tick is cancelled.
    /// Returns how many ran.
    pub fn tick_n(&self, n: usize) -> Result<usize> {
        for ran in 0..n {
            if !self.tick()? {
                return Ok(ran);
            }
        }
        return Ok(n);
    }

    /// True if a tick is currently scheduled.
    pub fn is_scheduled(&self) -> bool {
        return self.slot.lock().unwrap_or_else(|e| e.into_inner()).tick.is_some();
    }
}

impl Default for ManualTicker {
    fn default() -> Self {
        return Self::new();
    }
}

impl Scheduler for ManualTicker {
    fn schedule(&mut self, tick: Tick, _interval: Duration) -> Result<Box<dyn TickHandle>> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        slot.generation += 1;
        slot.tick = Some(tick);
        return Ok(Box::new(ManualHandle {
            slot: Arc::clone(&self.slot),
            generation: slot.generation,
            cancelled: false,
        }));
    }
}

struct ManualHandle {
    slot: Arc<Mutex<Slot>>,
    generation: u64,
    cancelled: bool,
}

impl TickHandle for ManualHandle {
    fn cancel(&mut self) -> Result<()> {
        if self.cancelled {
            return Ok(());
        }
        self.cancelled = true;
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.generation == self.generation {
            slot.tick = None;
        }
        return Ok(());
    }

    fn is_cancelled(&self) -> bool {
        return self.cancelled;
    }
}
