//! Injectable time source for wall-clock gated simulation steps
//!
//! Resource generation is gated on real elapsed time so its rate is
//! frame-rate-independent. The engine reads time through this trait so
//! tests (and headless fast-forward) can drive the clock by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic elapsed time since an arbitrary epoch
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Production clock backed by `std::time::Instant`
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Hand-driven clock with a shared handle.
///
/// Cloning shares the underlying time, so a test can keep a handle while
/// the engine owns another.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
