//! Configuration types
//!
//! System-wide switch defaults and per-switch overrides. Loading these from
//! storage or text is the owning system's job.

pub mod types;

pub use types::*;
