//! Hardware adapters
//!
//! This crate connects the board-agnostic switch core to real hardware:
//!
//! - Pin bank over `embedded-hal` digital inputs
//! - Bridge from `detent-hal` inputs to `embedded-hal`
//! - Interrupt-driven monotonic tick clock
//! - Indicator LED event sink

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod indicator;
pub mod pins;
