//! Collaborator traits
//!
//! These traits define what the switch core consumes from the rest of the
//! control system: raw pin samples and the machine's shared state.

pub mod machine;
pub mod pins;

pub use machine::Machine;
pub use pins::{PinError, SwitchPins};
