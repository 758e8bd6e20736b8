//! Simulated hardware delays.
//!
//! The lamp and the pause after operator messages block the session for a
//! fixed time. The [`Delay`] seam lets the binary sleep for real while tests
//! record the requested durations instead.

use std::time::Duration;

/// Blocking wait used for lamp durations and message pauses.
pub trait Delay {
    /// Wait for `duration` before returning.
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn pause(&mut self, _duration: Duration) {}
}

/// Returns immediately and remembers every requested duration.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use doorcard_terminal::delay::{Delay, RecordingDelay};
///
/// let mut delay = RecordingDelay::default();
/// delay.pause(Duration::from_millis(3000));
/// delay.pause(Duration::from_millis(1500));
///
/// assert_eq!(delay.total(), Duration::from_millis(4500));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    pauses: Vec<Duration>,
}

impl RecordingDelay {
    /// Durations requested so far, in order.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Sum of all requested durations.
    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Delay for RecordingDelay {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

impl<D: Delay + ?Sized> Delay for Box<D> {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_recording_delay_keeps_order() {
        let mut delay = RecordingDelay::default();
        delay.pause(Duration::from_millis(2000));
        delay.pause(Duration::from_millis(1500));

        assert_eq!(
            delay.pauses(),
            &[Duration::from_millis(2000), Duration::from_millis(1500)]
        );
    }

    #[test]
    fn test_no_delay_returns_immediately() {
        let start = Instant::now();
        NoDelay.pause(Duration::from_secs(60));
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_thread_delay_sleeps() {
        let start = Instant::now();
        ThreadDelay.pause(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    fn pause_once<D: Delay>(mut delay: D) {
        delay.pause(Duration::from_millis(10));
    }

    #[test]
    fn test_delay_through_mutable_reference() {
        let mut delay = RecordingDelay::default();
        pause_once(&mut delay);
        pause_once(&mut delay);
        assert_eq!(delay.pauses().len(), 2);
    }

    #[test]
    fn test_boxed_delay() {
        let mut delay: Box<dyn Delay> = Box::new(NoDelay);
        delay.pause(Duration::from_secs(5));
    }
}
