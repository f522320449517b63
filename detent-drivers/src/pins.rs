//! Switch pin bank
//!
//! Maps every switch in the table to an optional `embedded-hal` digital
//! input. Chip HALs usually expose one type for any input pin (for example
//! a type-erased `Input`), so a single `P` covers the whole bank.
//!
//! ```ignore
//! let mut bank = PinBank::new();
//! bank.wire(SwitchId::new(Axis::X, Position::Min), Input::new(p.PIN_4, Pull::Up));
//! bank.wire(SwitchId::new(Axis::X, Position::Max), Input::new(p.PIN_5, Pull::Up));
//!
//! table.poll_all(&mut bank, &clock)?;
//! ```

use detent_core::switch::{SwitchId, SWITCH_COUNT};
use detent_core::traits::{PinError, SwitchPins};
use embedded_hal::digital::{ErrorType, InputPin};

/// One optional input pin per switch
pub struct PinBank<P> {
    pins: [Option<P>; SWITCH_COUNT],
}

impl<P> Default for PinBank<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> PinBank<P> {
    /// Create a bank with nothing wired
    pub fn new() -> Self {
        Self {
            pins: core::array::from_fn(|_| None),
        }
    }

    /// Wire a pin to a switch, returning any pin it replaces
    pub fn wire(&mut self, id: SwitchId, pin: P) -> Option<P> {
        self.pins[id.index()].replace(pin)
    }

    /// Remove the pin wired to a switch
    pub fn unwire(&mut self, id: SwitchId) -> Option<P> {
        self.pins[id.index()].take()
    }

    /// Check if a switch has a pin
    pub fn is_wired(&self, id: SwitchId) -> bool {
        self.pins[id.index()].is_some()
    }
}

impl<P: InputPin> SwitchPins for PinBank<P> {
    fn read_pin(&mut self, id: SwitchId) -> Result<u8, PinError> {
        let pin = self.pins[id.index()].as_mut().ok_or(PinError::Unwired)?;
        let high = pin.is_high().map_err(|_| PinError::ReadFailed)?;
        Ok(u8::from(high))
    }
}

/// Exposes a [`detent_hal::InputPin`] as an `embedded-hal` input
///
/// Lets pins from a board HAL built on `detent-hal` go into a [`PinBank`].
pub struct HalInput<P>(pub P);

impl<P: detent_hal::InputPin> ErrorType for HalInput<P> {
    type Error = core::convert::Infallible;
}

impl<P: detent_hal::InputPin> InputPin for HalInput<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.is_low())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detent_core::switch::{Axis, Position};
    use embedded_hal::digital::ErrorKind;

    /// Mock embedded-hal input that can be made to fail
    struct MockInput {
        high: bool,
        broken: bool,
    }

    impl ErrorType for MockInput {
        type Error = ErrorKind;
    }

    impl InputPin for MockInput {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            if self.broken {
                return Err(ErrorKind::Other);
            }
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    struct MockHalPin(bool);

    impl detent_hal::InputPin for MockHalPin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    const X_MIN: SwitchId = SwitchId::new(Axis::X, Position::Min);
    const X_MAX: SwitchId = SwitchId::new(Axis::X, Position::Max);

    #[test]
    fn test_read_levels() {
        let mut bank = PinBank::new();
        bank.wire(X_MIN, MockInput { high: true, broken: false });
        bank.wire(X_MAX, MockInput { high: false, broken: false });

        assert_eq!(bank.read_pin(X_MIN), Ok(1));
        assert_eq!(bank.read_pin(X_MAX), Ok(0));
    }

    #[test]
    fn test_unwired_switch() {
        let mut bank: PinBank<MockInput> = PinBank::new();
        assert!(!bank.is_wired(X_MIN));
        assert_eq!(bank.read_pin(X_MIN), Err(PinError::Unwired));
    }

    #[test]
    fn test_read_failure() {
        let mut bank = PinBank::new();
        bank.wire(X_MIN, MockInput { high: true, broken: true });
        assert_eq!(bank.read_pin(X_MIN), Err(PinError::ReadFailed));
    }

    #[test]
    fn test_rewire_and_unwire() {
        let mut bank = PinBank::new();
        assert!(bank.wire(X_MIN, MockInput { high: true, broken: false }).is_none());
        let old = bank.wire(X_MIN, MockInput { high: false, broken: false });
        assert!(old.is_some_and(|pin| pin.high));
        assert_eq!(bank.read_pin(X_MIN), Ok(0));

        assert!(bank.unwire(X_MIN).is_some());
        assert!(!bank.is_wired(X_MIN));
    }

    #[test]
    fn test_hal_bridge() {
        let mut bank = PinBank::new();
        bank.wire(X_MIN, HalInput(MockHalPin(true)));
        bank.wire(X_MAX, HalInput(MockHalPin(false)));

        assert_eq!(bank.read_pin(X_MIN), Ok(1));
        assert_eq!(bank.read_pin(X_MAX), Ok(0));
    }
}
