//! Indicator LED event sink
//!
//! Toggles an LED on every leading edge, then hands the event on to
//! another sink (normally the feedhold/limit policy). Useful when wiring
//! up a machine: each switch strike visibly flips the LED.

use core::cell::RefCell;

use detent_core::switch::{SwitchEvent, SwitchEventSink};
use detent_hal::OutputPin;

/// Sink decorator that blinks an indicator LED on switch strikes
pub struct IndicatorSink<'a, P> {
    led: RefCell<P>,
    inner: &'a dyn SwitchEventSink,
}

impl<'a, P: OutputPin> IndicatorSink<'a, P> {
    /// Wrap `inner`, toggling `led` on each leading edge
    pub fn new(led: P, inner: &'a dyn SwitchEventSink) -> Self {
        Self {
            led: RefCell::new(led),
            inner,
        }
    }

    /// Check if the LED is currently lit
    pub fn is_lit(&self) -> bool {
        self.led.borrow().is_set_high()
    }

    /// Release the LED pin
    pub fn into_inner(self) -> P {
        self.led.into_inner()
    }
}

impl<P: OutputPin> SwitchEventSink for IndicatorSink<'_, P> {
    fn when_open(&self, event: &SwitchEvent<'_>) {
        self.inner.when_open(event);
    }

    fn when_closed(&self, event: &SwitchEvent<'_>) {
        self.inner.when_closed(event);
    }

    fn on_leading(&self, event: &SwitchEvent<'_>) {
        self.led.borrow_mut().toggle();
        self.inner.on_leading(event);
    }

    fn on_trailing(&self, event: &SwitchEvent<'_>) {
        self.inner.on_trailing(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use detent_core::config::{SwitchConfig, SystemConfig};
    use detent_core::safety::MachineFlags;
    use detent_core::switch::{Axis, FeedholdLimitPolicy, Position, SwitchId, SwitchTable};
    use detent_core::traits::{Machine, PinError, SwitchPins};
    use detent_hal::{Instant, Monotonic};

    /// Mock LED pin
    struct MockLed {
        high: bool,
    }

    impl OutputPin for MockLed {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct OnePin(u8);

    impl SwitchPins for OnePin {
        fn read_pin(&mut self, _id: SwitchId) -> Result<u8, PinError> {
            Ok(self.0)
        }
    }

    struct Clock(Cell<u64>);

    impl Monotonic for Clock {
        fn now(&self) -> Instant {
            Instant::from_millis(self.0.get())
        }
    }

    const Y_MIN: SwitchId = SwitchId::new(Axis::Y, Position::Min);

    #[test]
    fn test_led_toggles_on_strikes_and_policy_still_runs() {
        let flags = MachineFlags::new();
        let sink = IndicatorSink::new(MockLed { high: false }, &FeedholdLimitPolicy);
        let mut table = SwitchTable::new(SystemConfig::default(), &flags);
        table.configure(Y_MIN, SwitchConfig::limit(), &sink).unwrap();

        let clock = Clock(Cell::new(0));
        let mut pin = OnePin(1);

        // Open: steady, LED untouched
        table.poll_all(&mut pin, &clock).unwrap();
        assert!(!sink.is_lit());

        // Strike
        clock.0.set(100);
        pin.0 = 0;
        table.poll_all(&mut pin, &clock).unwrap();
        assert!(sink.is_lit());
        assert!(flags.is_limit_fault_active());

        // Release does not toggle
        clock.0.set(200);
        pin.0 = 1;
        table.poll_all(&mut pin, &clock).unwrap();
        assert!(sink.is_lit());

        // Second strike toggles back
        clock.0.set(300);
        pin.0 = 0;
        table.poll_all(&mut pin, &clock).unwrap();
        assert!(!sink.is_lit());
    }
}
