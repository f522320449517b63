//! Switch addressing and state types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SwitchError;

/// Number of axes carrying switch pairs
pub const AXIS_COUNT: usize = 6;

/// Switch positions per axis (min and max)
pub const POSITION_COUNT: usize = 2;

/// Total switches in the table
pub const SWITCH_COUNT: usize = AXIS_COUNT * POSITION_COUNT;

/// Machine axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
    A,
    B,
    C,
}

impl Axis {
    /// All axes in table order
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::X, Axis::Y, Axis::Z, Axis::A, Axis::B, Axis::C];

    /// Zero-based axis index
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// End of travel a switch guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    /// Minimum end of travel
    Min,
    /// Maximum end of travel
    Max,
}

impl Position {
    /// Zero-based position index
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Switch address: one axis and one end of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwitchId {
    pub axis: Axis,
    pub position: Position,
}

impl SwitchId {
    /// Every switch in poll order: axis-major, min before max
    pub const ALL: [SwitchId; SWITCH_COUNT] = [
        SwitchId::new(Axis::X, Position::Min),
        SwitchId::new(Axis::X, Position::Max),
        SwitchId::new(Axis::Y, Position::Min),
        SwitchId::new(Axis::Y, Position::Max),
        SwitchId::new(Axis::Z, Position::Min),
        SwitchId::new(Axis::Z, Position::Max),
        SwitchId::new(Axis::A, Position::Min),
        SwitchId::new(Axis::A, Position::Max),
        SwitchId::new(Axis::B, Position::Min),
        SwitchId::new(Axis::B, Position::Max),
        SwitchId::new(Axis::C, Position::Min),
        SwitchId::new(Axis::C, Position::Max),
    ];

    pub const fn new(axis: Axis, position: Position) -> Self {
        Self { axis, position }
    }

    /// Flat table index
    pub const fn index(self) -> usize {
        self.axis.index() * POSITION_COUNT + self.position.index()
    }

    /// Look up a switch by flat table index
    ///
    /// Used when switch numbers come from configuration rather than code.
    pub fn from_index(index: usize) -> Result<Self, SwitchError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(SwitchError::InvalidSwitch(index))
    }
}

/// Switch wiring type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Contacts close when actuated; pin pulled low when pressed
    #[default]
    NormallyOpen,
    /// Contacts open when actuated; pin floats high when pressed
    NormallyClosed,
}

impl Polarity {
    /// Decode a configuration bit (0 = NO, 1 = NC)
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Polarity::NormallyOpen),
            1 => Some(Polarity::NormallyClosed),
            _ => None,
        }
    }

    /// Map an electrical level to the logical switch state
    ///
    /// NO: low = closed. NC: high = closed.
    pub fn correct(self, level: PinLevel) -> SwitchState {
        match (self, level) {
            (Polarity::NormallyOpen, PinLevel::Low) => SwitchState::Closed,
            (Polarity::NormallyOpen, PinLevel::High) => SwitchState::Open,
            (Polarity::NormallyClosed, PinLevel::High) => SwitchState::Closed,
            (Polarity::NormallyClosed, PinLevel::Low) => SwitchState::Open,
        }
    }

    /// The other wiring type
    pub fn inverse(self) -> Self {
        match self {
            Polarity::NormallyOpen => Polarity::NormallyClosed,
            Polarity::NormallyClosed => Polarity::NormallyOpen,
        }
    }
}

/// Switch participation mode
///
/// Bit 0 enables homing, bit 1 enables limit checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum SwitchMode {
    /// Not polled, raises nothing
    #[default]
    Disabled = 0,
    /// Homing switch only
    Homing = 1,
    /// Limit switch only
    Limit = 2,
    /// Both homing and limit
    HomingLimit = 3,
}

impl SwitchMode {
    const HOMING_BIT: u8 = 1 << 0;
    const LIMIT_BIT: u8 = 1 << 1;

    /// Raw mode bits
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Decode raw mode bits from configuration
    pub fn from_bits(bits: u8) -> Result<Self, SwitchError> {
        match bits {
            0 => Ok(SwitchMode::Disabled),
            1 => Ok(SwitchMode::Homing),
            2 => Ok(SwitchMode::Limit),
            3 => Ok(SwitchMode::HomingLimit),
            _ => Err(SwitchError::InvalidMode(bits)),
        }
    }

    pub fn is_disabled(self) -> bool {
        self == SwitchMode::Disabled
    }

    pub fn homing_enabled(self) -> bool {
        self.bits() & Self::HOMING_BIT != 0
    }

    pub fn limit_enabled(self) -> bool {
        self.bits() & Self::LIMIT_BIT != 0
    }
}

/// Raw electrical pin level, before polarity correction
///
/// High (1) means the circuit is electrically open, low (0) closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

impl PinLevel {
    /// Decode a sampled bit; anything but 0 or 1 is out of domain
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(PinLevel::Low),
            1 => Some(PinLevel::High),
            _ => None,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            PinLevel::Low => PinLevel::High,
            PinLevel::High => PinLevel::Low,
        }
    }
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> Self {
        if high {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

/// Debounced, polarity-corrected switch state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    #[default]
    Open,
    Closed,
}

/// Most recent accepted transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// No transition accepted yet
    #[default]
    None,
    /// Open to closed (switch struck)
    Leading,
    /// Closed to open (switch released)
    Trailing,
}
