//! Monotonic time abstractions
//!
//! Timestamps are millisecond counts from an arbitrary epoch (usually
//! power-on). 64 bits so the counter never wraps within a machine's life.

use core::ops::Add;

/// Point in time on the monotonic clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant {
    millis: u64,
}

impl Instant {
    /// Clock epoch
    pub const ZERO: Instant = Instant { millis: 0 };

    /// Create an instant from a millisecond count
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Milliseconds since the clock epoch
    pub const fn as_millis(self) -> u64 {
        self.millis
    }

    /// Time elapsed since `earlier`, or `None` if `earlier` is in the future
    pub fn checked_duration_since(self, earlier: Instant) -> Option<Duration> {
        self.millis.checked_sub(earlier.millis).map(Duration::from_millis)
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    /// Saturates at the end of time rather than wrapping
    fn add(self, rhs: Duration) -> Instant {
        Instant::from_millis(self.millis.saturating_add(rhs.as_millis()))
    }
}

/// Span of time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration {
    millis: u64,
}

impl Duration {
    /// Zero-length duration
    pub const ZERO: Duration = Duration { millis: 0 };

    /// Create a duration from milliseconds
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Length in milliseconds
    pub const fn as_millis(self) -> u64 {
        self.millis
    }
}

/// Monotonic tick source
///
/// Successive calls to [`Monotonic::now`] never go backwards. Resolution
/// must be finer than the shortest switch lockout in use.
pub trait Monotonic {
    /// Current time
    fn now(&self) -> Instant;
}
