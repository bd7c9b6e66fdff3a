//! Time sources for the timer.
//!
//! Two readings are needed: the wall clock for the timestamps that get
//! stored, and a monotonic reading for the ticking display and notice
//! expiry, which must not jump when the system clock is adjusted.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Wall clock, milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;

    /// Monotonic time since an arbitrary fixed origin.
    fn monotonic(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }

    fn monotonic(&self) -> Duration {
        (**self).monotonic()
    }
}

#[derive(Debug, Clone)]
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

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    wall_ms: Cell<i64>,
    mono: Cell<Duration>,
}

impl ManualClock {
    pub fn new(wall_ms: i64) -> Self {
        Self {
            wall_ms: Cell::new(wall_ms),
            mono: Cell::new(Duration::ZERO),
        }
    }

    /// Move both readings forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.wall_ms.set(self.wall_ms.get() + ms as i64);
        self.mono.set(self.mono.get() + Duration::from_millis(ms));
    }

    /// Jump the wall clock only (e.g. an NTP correction).
    pub fn set_wall(&self, wall_ms: i64) {
        self.wall_ms.set(wall_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.wall_ms.get()
    }

    fn monotonic(&self) -> Duration {
        self.mono.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_wall_jump_leaves_monotonic_alone() {
        let c = ManualClock::new(1_000);
        c.advance(500);
        c.set_wall(0);
        assert_eq!(c.now_ms(), 0);
        assert_eq!(c.monotonic(), Duration::from_millis(500));
    }
}
