//! Safety flags
//!
//! Shared feedhold and limit-fault flags raised by the switch core.

pub mod flags;

pub use flags::MachineFlags;
