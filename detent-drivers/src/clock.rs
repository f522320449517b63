//! Interrupt-driven tick clock
//!
//! A periodic timer interrupt calls [`TickClock::tick`]; the control loop
//! reads [`Monotonic::now`]. The counter is 64 bits wide and never wraps in
//! practice.
//!
//! ```ignore
//! static CLOCK: TickClock = TickClock::new(1);
//!
//! #[exception]
//! fn SysTick() {
//!     CLOCK.tick();
//! }
//! ```

use detent_hal::{Instant, Monotonic};
use portable_atomic::{AtomicU64, Ordering};

/// Monotonic clock advanced by a fixed-period timer
#[derive(Debug)]
pub struct TickClock {
    ticks: AtomicU64,
    /// Timer period in milliseconds
    tick_ms: u64,
}

impl TickClock {
    /// Create a clock at zero for a timer firing every `tick_ms` milliseconds
    pub const fn new(tick_ms: u32) -> Self {
        Self {
            ticks: AtomicU64::new(0),
            tick_ms: tick_ms as u64,
        }
    }

    /// Advance by one timer period (call from the timer interrupt)
    pub fn tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Raw tick count
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Monotonic for TickClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.ticks().saturating_mul(self.tick_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let clock = TickClock::new(1);
        assert_eq!(clock.now(), Instant::ZERO);
    }

    #[test]
    fn test_tick_period() {
        let clock = TickClock::new(10);
        for _ in 0..7 {
            clock.tick();
        }
        assert_eq!(clock.ticks(), 7);
        assert_eq!(clock.now().as_millis(), 70);
    }

    #[test]
    fn test_static_clock() {
        static CLOCK: TickClock = TickClock::new(1);
        CLOCK.tick();
        CLOCK.tick();
        assert_eq!(CLOCK.now().as_millis(), 2);
    }
}
