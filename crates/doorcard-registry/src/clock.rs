//! Time sources for card timestamps.
//!
//! The registry stamps every created or updated card with the time reported
//! by its [`Clock`]. Production code uses [`SystemClock`]; tests use
//! [`ManualClock`] to get deterministic, controllable timestamps.

use std::cell::Cell;

use chrono::Duration;
use doorcard_core::Timestamp;

/// Source of the "last modified" timestamp.
pub trait Clock {
    /// Current local time, second precision.
    fn now(&self) -> Timestamp;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock that only moves when told to.
///
/// Uses interior mutability so a test can keep advancing it after handing
/// it to a registry (reach it again through `CardRegistry::clock`).
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use doorcard_core::Timestamp;
/// use doorcard_registry::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new(Timestamp::parse("2025-10-27 14:30:00").unwrap());
/// clock.advance(Duration::minutes(5));
///
/// assert_eq!(clock.now().to_string(), "2025-10-27 14:35:00");
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Cell<Timestamp>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.current.set(self.current.get().advanced_by(delta));
    }

    /// Jump to an arbitrary time.
    pub fn set(&self, at: Timestamp) {
        self.current.set(at);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.current.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_non_decreasing() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_advance_and_set() {
        let start = Timestamp::parse("2025-10-27 14:30:00").unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now().to_string(), "2025-10-27 14:31:30");

        clock.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = ManualClock::new(Timestamp::parse("2025-01-01 00:00:00").unwrap());
        let by_ref: &ManualClock = &clock;
        assert_eq!(Clock::now(&by_ref), clock.now());
    }
}
