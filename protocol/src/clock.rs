//! Time sources for transaction timestamps.
//!
//! The creator stamps every transaction with the wall-clock time at which it
//! was built. Reading `Utc::now()` inline makes that untestable, so the
//! creator takes a [`Clock`] instead. Production code uses [`SystemClock`];
//! tests use [`FixedClock`] or a closure.

use chrono::Utc;

/// Something that can tell the current time in Unix milliseconds.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // Pre-1970 clocks are not a case we try to represent.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> u64,
{
    fn now_millis(&self) -> u64 {
        self()
    }
}
