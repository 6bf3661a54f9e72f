//! Frame clocks that drive the animation scheduler.
//!
//! The scheduler never reads time on its own; whoever owns the frame loop
//! passes a timestamp to each tick. [`SystemClock`] follows wall time,
//! [`ManualClock`] is stepped explicitly and keeps tests deterministic.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of frame timestamps, measured from an arbitrary fixed origin.
pub trait FrameClock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since the clock was created.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
