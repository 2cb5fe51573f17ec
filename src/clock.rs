//! # Millisecond Clock
//!
//! Expiry deadlines are 32-bit millisecond timestamps taken from a monotonic
//! clock that is allowed to wrap. The store reads time only through the
//! [`Clock`] trait so tests can drive expiry deterministically.
//!
//! | Clock | Source |
//! |-------|--------|
//! | `SystemClock` | `Instant` elapsed since construction, truncated to u32 |
//! | `ManualClock` | shared atomic counter advanced by the caller |
//!
//! `ManualClock` is cheap to clone; every clone observes the same time, so a
//! test keeps one handle and gives another to the database.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Source of the current time in milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u32;
}

/// Monotonic clock backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
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
    fn now_millis(&self) -> u32 {
        // wraps after ~49.7 days, like a device millisecond counter
        self.start.elapsed().as_millis() as u32
    }
}

/// Clock whose time only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU32>,
}

impl ManualClock {
    pub fn new(start: u32) -> Self {
        Self {
            now: Arc::new(AtomicU32::new(start)),
        }
    }

    pub fn set(&self, millis: u32) {
        self.now.store(millis, Ordering::SeqCst);
    }

    /// Advances the clock by `millis`, wrapping at `u32::MAX`.
    pub fn advance(&self, millis: u32) {
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| {
                Some(t.wrapping_add(millis))
            });
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u32 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(100);
        let other = clock.clone();
        clock.advance(50);
        assert_eq!(other.now_millis(), 150);
        other.set(7);
        assert_eq!(clock.now_millis(), 7);
    }

    #[test]
    fn test_manual_clock_wraps() {
        let clock = ManualClock::new(u32::MAX - 1);
        clock.advance(3);
        assert_eq!(clock.now_millis(), 1);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_millis();
        let b = clock.now_millis();
        assert!(b >= a);
    }
}
