//! Raw switch pin access

use crate::switch::SwitchId;

/// Errors from reading a switch pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// No physical pin is wired to this switch
    Unwired,
    /// The underlying GPIO read failed
    ReadFailed,
}

/// Source of raw electrical samples, one per switch
///
/// Returns the pin bit before polarity correction: 1 = electrically open,
/// 0 = electrically closed. Any other value is rejected by the poll driver.
pub trait SwitchPins {
    fn read_pin(&mut self, id: SwitchId) -> Result<u8, PinError>;
}
