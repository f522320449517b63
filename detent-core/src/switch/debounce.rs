//! Lockout debounce and edge detection
//!
//! Debouncing is lockout-based rather than integrating: the first sample
//! that differs from the debounced state is accepted immediately, and any
//! further change is ignored until the lockout expires. A switch strike is
//! therefore seen on the very first poll, and contact bounce after it falls
//! inside the blind window. Each switch costs O(1) memory and time per poll.
//!
//! # Sample outcomes
//!
//! ```text
//! disabled ───────────────────────────────► Disabled
//! corrected == state ─────────────────────► Steady(state)
//! corrected != state, now <  deadline ────► LockedOut
//! corrected != state, now >= deadline ────► Transition(Leading | Trailing)
//! ```

use detent_hal::{Duration, Instant};

use super::events::{dispatch, SwitchEvent, SwitchEventSink};
use super::policy::FeedholdLimitPolicy;
use super::types::{Edge, PinLevel, Polarity, SwitchId, SwitchMode, SwitchState};
use crate::traits::Machine;

/// Outcome of sampling one switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sample {
    /// Switch is disabled; nothing evaluated
    Disabled,
    /// No change; carries the current state
    Steady(SwitchState),
    /// Change seen inside the lockout window and ignored
    LockedOut,
    /// Change accepted
    Transition(Edge),
}

impl Sample {
    /// Whether the switch state changed
    pub fn changed(&self) -> bool {
        matches!(self, Sample::Transition(_))
    }
}

/// Per-switch state record
pub struct Switch<'a> {
    id: SwitchId,
    polarity: Polarity,
    mode: SwitchMode,
    /// Debounced, polarity-corrected state
    state: SwitchState,
    /// Most recent accepted transition
    edge: Edge,
    /// Minimum spacing between accepted transitions
    lockout: Duration,
    /// Samples before this instant cannot change state
    lockout_deadline: Option<Instant>,
    sink: &'a dyn SwitchEventSink,
}

impl<'a> Switch<'a> {
    /// Create a disabled, open switch bound to the feedhold/limit policy
    pub fn new(id: SwitchId, polarity: Polarity, lockout: Duration) -> Self {
        Self {
            id,
            polarity,
            mode: SwitchMode::Disabled,
            state: SwitchState::Open,
            edge: Edge::None,
            lockout,
            lockout_deadline: None,
            sink: &FeedholdLimitPolicy,
        }
    }

    /// Apply configuration
    ///
    /// Leaves the debounced state and any running lockout untouched.
    pub fn configure(
        &mut self,
        polarity: Polarity,
        mode: SwitchMode,
        lockout: Duration,
        sink: &'a dyn SwitchEventSink,
    ) {
        self.polarity = polarity;
        self.mode = mode;
        self.lockout = lockout;
        self.sink = sink;
    }

    pub fn id(&self) -> SwitchId {
        self.id
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn mode(&self) -> SwitchMode {
        self.mode
    }

    pub fn state(&self) -> SwitchState {
        self.state
    }

    pub fn last_edge(&self) -> Edge {
        self.edge
    }

    pub fn lockout(&self) -> Duration {
        self.lockout
    }

    pub fn lockout_deadline(&self) -> Option<Instant> {
        self.lockout_deadline
    }

    /// Whether a change sampled at `now` would be ignored
    pub fn is_locked_out(&self, now: Instant) -> bool {
        matches!(self.lockout_deadline, Some(deadline) if now < deadline)
    }

    /// Update state from a raw pin level
    ///
    /// Pure state update: no callbacks fire. See [`Switch::read`] for the
    /// sample-and-dispatch path used by the poll driver.
    pub fn sample(&mut self, level: PinLevel, now: Instant) -> Sample {
        if self.mode.is_disabled() {
            return Sample::Disabled;
        }

        let corrected = self.polarity.correct(level);
        if corrected == self.state {
            return Sample::Steady(corrected);
        }

        if self.is_locked_out(now) {
            return Sample::LockedOut;
        }

        self.state = corrected;
        self.lockout_deadline = Some(now + self.lockout);
        self.edge = match corrected {
            SwitchState::Closed => Edge::Leading,
            SwitchState::Open => Edge::Trailing,
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("Switch {} edge {} at {}", self.id, self.edge, now);

        Sample::Transition(self.edge)
    }

    /// Sample the switch and fire the bound callback
    ///
    /// Returns the sample outcome; at most one callback fires.
    pub fn process(&mut self, level: PinLevel, now: Instant, machine: &dyn Machine) -> Sample {
        let sample = self.sample(level, now);
        let event = SwitchEvent {
            id: self.id,
            mode: self.mode,
            state: self.state,
            edge: self.edge,
            machine,
        };
        dispatch(self.sink, sample, &event);
        sample
    }

    /// Sample the switch and fire the bound callback
    ///
    /// Returns true if the switch state changed.
    pub fn read(&mut self, level: PinLevel, now: Instant, machine: &dyn Machine) -> bool {
        self.process(level, now, machine).changed()
    }
}
