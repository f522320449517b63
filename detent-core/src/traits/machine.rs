//! Machine-state collaborator
//!
//! The switch core never owns machine state. It queries whether a homing
//! cycle is running and sets two flags that the motion scheduler and the
//! supervisor consume.

/// Machine state as seen by the switch core
///
/// All methods take `&self`: flag writes must be set-only and safe against
/// a consumer clearing them from another context (see
/// [`MachineFlags`](crate::safety::MachineFlags)).
pub trait Machine {
    /// Whether the current cycle is a homing cycle
    fn current_cycle_is_homing(&self) -> bool;

    /// Ask the motion scheduler to pause at the next safe point
    ///
    /// Setting an already-set request is a no-op.
    fn request_feedhold(&self);

    /// Latch a limit fault for the supervisor
    ///
    /// Sticky: only an explicit external reset clears it.
    fn raise_limit_fault(&self);

    /// Whether a limit fault is latched
    fn is_limit_fault_active(&self) -> bool;
}
