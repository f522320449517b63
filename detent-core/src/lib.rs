//! Board-agnostic switch conditioning for a motion controller
//!
//! This crate turns raw pin levels from the per-axis min/max switches into
//! debounced, polarity-corrected switch states and semantic machine events:
//!
//! - Switch addressing and the fixed switch table
//! - Lockout debounce and edge detection
//! - Event sinks and the feedhold/limit policy
//! - Poll driver for the control-loop tick
//! - Configuration type definitions
//! - Collaborator traits (pin reads, machine state) and an atomic flag block

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod safety;
pub mod switch;
pub mod traits;

pub use detent_hal::{Duration, Instant, Monotonic};
