//! Switch event sinks
//!
//! Each switch is bound to one sink. After every sample the engine invokes
//! at most one sink method: a steady-state callback (`when_open` /
//! `when_closed`) when nothing changed, or an edge callback (`on_leading` /
//! `on_trailing`) when a transition was accepted. Disabled switches and
//! locked-out samples invoke nothing.

use super::debounce::Sample;
use super::types::{Edge, SwitchId, SwitchMode, SwitchState};
use crate::traits::Machine;

/// Context handed to a sink callback
pub struct SwitchEvent<'m> {
    /// Switch that produced the event
    pub id: SwitchId,
    /// Switch mode at the time of the sample
    pub mode: SwitchMode,
    /// Debounced state after the sample
    pub state: SwitchState,
    /// Most recent accepted edge
    pub edge: Edge,
    /// Machine collaborator for policy decisions
    pub machine: &'m dyn Machine,
}

/// Callbacks bound to a switch
///
/// Every method defaults to a no-op, so implementations override only the
/// events they care about. Methods take `&self`; sinks that keep state use
/// interior mutability.
pub trait SwitchEventSink {
    /// Switch is open and did not change this poll
    ///
    /// Fires on every poll, not just once.
    fn when_open(&self, _event: &SwitchEvent<'_>) {}

    /// Switch is closed and did not change this poll
    ///
    /// Fires on every poll, not just once.
    fn when_closed(&self, _event: &SwitchEvent<'_>) {}

    /// Switch became closed
    fn on_leading(&self, _event: &SwitchEvent<'_>) {}

    /// Switch became open
    fn on_trailing(&self, _event: &SwitchEvent<'_>) {}
}

/// Sink that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAction;

impl SwitchEventSink for NoAction {}

/// Invoke the sink method matching a sample outcome
pub fn dispatch(sink: &dyn SwitchEventSink, sample: Sample, event: &SwitchEvent<'_>) {
    match sample {
        Sample::Disabled | Sample::LockedOut => {}
        Sample::Steady(SwitchState::Open) => sink.when_open(event),
        Sample::Steady(SwitchState::Closed) => sink.when_closed(event),
        Sample::Transition(Edge::Leading) => sink.on_leading(event),
        Sample::Transition(Edge::Trailing) => sink.on_trailing(event),
        Sample::Transition(Edge::None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safety::MachineFlags;
    use crate::switch::{Axis, Position};
    use crate::traits::Machine;
    use core::cell::Cell;

    #[derive(Default)]
    struct Recorder {
        open: Cell<u32>,
        closed: Cell<u32>,
        leading: Cell<u32>,
        trailing: Cell<u32>,
    }

    impl Recorder {
        fn total(&self) -> u32 {
            self.open.get() + self.closed.get() + self.leading.get() + self.trailing.get()
        }
    }

    impl SwitchEventSink for Recorder {
        fn when_open(&self, _event: &SwitchEvent<'_>) {
            self.open.set(self.open.get() + 1);
        }

        fn when_closed(&self, _event: &SwitchEvent<'_>) {
            self.closed.set(self.closed.get() + 1);
        }

        fn on_leading(&self, _event: &SwitchEvent<'_>) {
            self.leading.set(self.leading.get() + 1);
        }

        fn on_trailing(&self, _event: &SwitchEvent<'_>) {
            self.trailing.set(self.trailing.get() + 1);
        }
    }

    fn event(machine: &MachineFlags) -> SwitchEvent<'_> {
        SwitchEvent {
            id: SwitchId::new(Axis::X, Position::Min),
            mode: SwitchMode::Limit,
            state: SwitchState::Open,
            edge: Edge::None,
            machine,
        }
    }

    #[test]
    fn test_dispatch_one_callback_per_sample() {
        let machine = MachineFlags::new();
        let ev = event(&machine);
        let recorder = Recorder::default();

        dispatch(&recorder, Sample::Steady(SwitchState::Open), &ev);
        assert_eq!(recorder.open.get(), 1);
        dispatch(&recorder, Sample::Steady(SwitchState::Closed), &ev);
        assert_eq!(recorder.closed.get(), 1);
        dispatch(&recorder, Sample::Transition(Edge::Leading), &ev);
        assert_eq!(recorder.leading.get(), 1);
        dispatch(&recorder, Sample::Transition(Edge::Trailing), &ev);
        assert_eq!(recorder.trailing.get(), 1);
        assert_eq!(recorder.total(), 4);
    }

    #[test]
    fn test_silent_outcomes() {
        let machine = MachineFlags::new();
        let ev = event(&machine);
        let recorder = Recorder::default();

        dispatch(&recorder, Sample::Disabled, &ev);
        dispatch(&recorder, Sample::LockedOut, &ev);
        assert_eq!(recorder.total(), 0);
    }

    #[test]
    fn test_no_action_touches_nothing() {
        let machine = MachineFlags::new();
        let ev = event(&machine);

        dispatch(&NoAction, Sample::Transition(Edge::Leading), &ev);
        assert!(!machine.feedhold_requested());
        assert!(!machine.is_limit_fault_active());
    }
}
