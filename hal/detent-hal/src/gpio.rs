//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Used for indicator LEDs; switch inputs never drive outputs.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Reads the raw electrical level. No polarity correction happens at this
/// layer: a switch wired normally-closed still reads high when its circuit
/// is open.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    struct MockInput(bool);

    impl InputPin for MockInput {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_default_toggle() {
        let mut led = MockLed { high: false };
        led.toggle();
        assert!(led.is_set_high());
        led.toggle();
        assert!(!led.is_set_high());
    }

    #[test]
    fn test_input_is_low() {
        assert!(MockInput(false).is_low());
        assert!(!MockInput(true).is_low());
    }
}
