//! Cancellation and progress pacing
//!
//! Long running loops receive an [`OperationContext`]. They poll
//! [`OperationContext::is_cancelled`] once per iteration and call
//! [`OperationContext::tick`] to decide whether to refresh progress output.
//! In-flight I/O is never interrupted.

use signal_hook::consts::{SIGINT, SIGQUIT, SIGTERM};
use std::cell::Cell;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Default progress refresh interval
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Cancellation flag plus a monotonic progress tick
#[derive(Debug)]
pub struct OperationContext {
    cancelled: Arc<AtomicBool>,
    tick_interval: Duration,
    last_tick: Cell<Instant>,
    ticks: Cell<u64>,
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationContext {
    /// Creates a context with the default one-second tick
    pub fn new() -> Self {
        Self::with_tick_interval(DEFAULT_TICK_INTERVAL)
    }

    /// Creates a context with a custom tick interval
    pub fn with_tick_interval(tick_interval: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            tick_interval,
            last_tick: Cell::new(Instant::now()),
            ticks: Cell::new(0),
        }
    }

    /// Routes SIGINT, SIGTERM and SIGQUIT to the cancellation flag
    pub fn register_signals(&self) -> io::Result<()> {
        for signal in [SIGINT, SIGTERM, SIGQUIT] {
            signal_hook::flag::register(signal, Arc::clone(&self.cancelled))?;
        }
        Ok(())
    }

    /// Returns a handle that cancels this context when set
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Requests cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true once cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns true if a tick interval elapsed since the previous tick
    pub fn tick(&self) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last_tick.get()) < self.tick_interval {
            return false;
        }

        self.last_tick.set(now);
        self.ticks.set(self.ticks.get() + 1);
        true
    }

    /// Number of ticks fired so far
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }
}
