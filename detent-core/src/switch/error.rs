//! Switch subsystem errors
//!
//! A disabled switch or a locked-out sample is not an error. These cover
//! configuration misuse and pin reads that cannot be trusted.

use super::types::SwitchId;
use crate::traits::PinError;

/// Errors surfaced at the `configure` / `poll` boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchError {
    /// Switch number outside the table
    InvalidSwitch(usize),
    /// Mode bits outside the known modes
    InvalidMode(u8),
    /// Configuration attempted after polling started
    ConfigLocked,
    /// Polling attempted before any switch was configured
    NotConfigured,
    /// Pin sample was neither 0 nor 1
    PinOutOfDomain { id: SwitchId, value: u8 },
    /// Pin could not be read
    PinRead { id: SwitchId, error: PinError },
}
