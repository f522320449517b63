//! Atomic machine flag block
//!
//! Ready-made [`Machine`] implementation for systems that keep the homing
//! state, feedhold request and limit fault as plain flags.

use portable_atomic::{AtomicBool, Ordering};

use crate::traits::Machine;

/// Shared machine flags
///
/// The switch core only ever sets `feedhold` and `limit_fault`. The motion
/// scheduler clears `feedhold` with [`take_feedhold_request`], and the
/// supervisor clears `limit_fault` with [`clear_limit_fault`] as part of an
/// explicit reset. Every operation is a single atomic access, so a poll
/// running in the control loop may race an interrupt-context consumer.
///
/// [`take_feedhold_request`]: MachineFlags::take_feedhold_request
/// [`clear_limit_fault`]: MachineFlags::clear_limit_fault
#[derive(Debug)]
pub struct MachineFlags {
    /// Homing cycle in progress (owned by the canonical machine)
    homing: AtomicBool,
    /// Pause requested at the next safe point
    feedhold: AtomicBool,
    /// Limit switch struck outside homing
    limit_fault: AtomicBool,
}

impl Default for MachineFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineFlags {
    /// Create a cleared flag block
    pub const fn new() -> Self {
        Self {
            homing: AtomicBool::new(false),
            feedhold: AtomicBool::new(false),
            limit_fault: AtomicBool::new(false),
        }
    }

    /// Mark the start or end of a homing cycle
    pub fn set_homing(&self, homing: bool) {
        self.homing.store(homing, Ordering::Release);
    }

    /// Check for a pending feedhold request without consuming it
    pub fn feedhold_requested(&self) -> bool {
        self.feedhold.load(Ordering::Acquire)
    }

    /// Consume a pending feedhold request
    ///
    /// Returns true if a request was pending.
    pub fn take_feedhold_request(&self) -> bool {
        self.feedhold.swap(false, Ordering::AcqRel)
    }

    /// Clear a latched limit fault (explicit reset)
    pub fn clear_limit_fault(&self) {
        self.limit_fault.store(false, Ordering::Release);
    }
}

impl Machine for MachineFlags {
    fn current_cycle_is_homing(&self) -> bool {
        self.homing.load(Ordering::Acquire)
    }

    fn request_feedhold(&self) {
        self.feedhold.store(true, Ordering::Release);
    }

    fn raise_limit_fault(&self) {
        self.limit_fault.store(true, Ordering::Release);
    }

    fn is_limit_fault_active(&self) -> bool {
        self.limit_fault.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FLAGS: MachineFlags = MachineFlags::new();

    #[test]
    fn test_static_block_starts_clear() {
        assert!(!FLAGS.current_cycle_is_homing());
        assert!(!FLAGS.feedhold_requested());
        assert!(!FLAGS.is_limit_fault_active());
    }

    #[test]
    fn test_feedhold_is_consumed_once() {
        let flags = MachineFlags::new();
        flags.request_feedhold();
        flags.request_feedhold();
        assert!(flags.feedhold_requested());

        assert!(flags.take_feedhold_request());
        assert!(!flags.take_feedhold_request());
    }

    #[test]
    fn test_limit_fault_is_sticky() {
        let flags = MachineFlags::new();
        flags.raise_limit_fault();
        flags.raise_limit_fault();
        assert!(flags.is_limit_fault_active());

        // Consuming a feedhold does not touch the fault
        flags.take_feedhold_request();
        assert!(flags.is_limit_fault_active());

        flags.clear_limit_fault();
        assert!(!flags.is_limit_fault_active());
    }

    #[test]
    fn test_homing_state() {
        let flags = MachineFlags::default();
        flags.set_homing(true);
        assert!(flags.current_cycle_is_homing());
        flags.set_homing(false);
        assert!(!flags.current_cycle_is_homing());
    }
}
