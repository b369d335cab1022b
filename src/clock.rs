//! # Clock
//!
//! Time sources for particle lifespans, in seconds.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// # Clock
pub trait Clock {
    /// Returns the current time in seconds. Must never go backwards.
    fn now(&self) -> f64;
}

/// # Monotonic Clock
///
/// Wall-clock time measured from the moment the clock was created.
#[derive(Copy, Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Returns a clock starting at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// # Manual Clock
///
/// Clock that only moves when told to. Clones share the same time, so a test can keep one handle
/// and hand another to an emitter.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    seconds: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Returns a clock stopped at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance(&self, seconds: f64) {
        self.seconds.set(self.seconds.get() + seconds);
    }

    /// Sets the current time.
    pub fn set(&self, seconds: f64) {
        self.seconds.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.seconds.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advance_is_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(1.5);
        handle.advance(0.5);

        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn manual_clock_set_returns_new_time() {
        let clock = ManualClock::new();

        clock.set(42.0);

        assert_eq!(clock.now(), 42.0);
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();

        let first = clock.now();
        let second = clock.now();

        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
