//! Switch table and poll driver
//!
//! The table holds one record per (axis, position) pair, indexed flat in
//! poll order. It is built once with system defaults, configured switch by
//! switch, then polled once per control cycle.
//!
//! # Usage
//!
//! ```ignore
//! static FLAGS: MachineFlags = MachineFlags::new();
//!
//! let mut table = SwitchTable::new(SystemConfig::default(), &FLAGS);
//! table.configure(SwitchId::new(Axis::X, Position::Min), SwitchConfig::homing_limit(), &FeedholdLimitPolicy)?;
//!
//! // Every control-loop tick:
//! if table.poll_all(&mut pins, &clock)? {
//!     // some switch changed; inspect get_last_edge() or the machine flags
//! }
//! ```
//!
//! `poll` must not be re-entered (for example from an interrupt handler)
//! while a previous call is in progress.

use heapless::Vec;

use detent_hal::{Instant, Monotonic};

use super::debounce::{Sample, Switch};
use super::error::SwitchError;
use super::events::SwitchEventSink;
use super::types::{Edge, PinLevel, SwitchId, SwitchMode, SwitchState, SWITCH_COUNT};
use crate::config::{SwitchConfig, SystemConfig};
use crate::traits::{Machine, SwitchPins};

/// Accepted transition seen during a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub id: SwitchId,
    pub edge: Edge,
}

/// Transitions accepted during one poll pass, in poll order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    transitions: Vec<Transition, SWITCH_COUNT>,
}

impl PollReport {
    /// Whether any switch changed
    pub fn changed(&self) -> bool {
        !self.transitions.is_empty()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    fn record(&mut self, id: SwitchId, edge: Edge) {
        let pushed = self.transitions.push(Transition { id, edge });
        debug_assert!(pushed.is_ok());
    }
}

/// Failed poll pass
///
/// Switches that were read successfully in the same pass were still
/// sampled and dispatched; their transitions are in `report`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollError {
    /// First error seen in the pass
    pub error: SwitchError,
    /// Transitions accepted despite the error
    pub report: PollReport,
}

impl PollError {
    fn empty(error: SwitchError) -> Self {
        Self {
            error,
            report: PollReport::default(),
        }
    }

    /// Whether any switch changed in the failed pass
    pub fn changed(&self) -> bool {
        self.report.changed()
    }
}

impl From<PollError> for SwitchError {
    fn from(e: PollError) -> Self {
        e.error
    }
}

/// Fixed table of every limit/homing switch
pub struct SwitchTable<'a> {
    system: SystemConfig,
    switches: [Switch<'a>; SWITCH_COUNT],
    machine: &'a dyn Machine,
    /// At least one switch has been configured
    configured: bool,
    /// Polling has started; configuration is frozen
    polling: bool,
    /// Switch with the most recent leading edge
    last_thrown: Option<SwitchId>,
}

impl<'a> SwitchTable<'a> {
    /// Build a table of disabled switches using the system defaults
    ///
    /// Every switch starts bound to the feedhold/limit policy.
    pub fn new(system: SystemConfig, machine: &'a dyn Machine) -> Self {
        let lockout = system.lockout();
        let switches = SwitchId::ALL.map(|id| Switch::new(id, system.default_polarity, lockout));

        Self {
            system,
            switches,
            machine,
            configured: false,
            polling: false,
            last_thrown: None,
        }
    }

    /// Configure one switch
    ///
    /// Only allowed before the first poll.
    pub fn configure(
        &mut self,
        id: SwitchId,
        config: SwitchConfig,
        sink: &'a dyn SwitchEventSink,
    ) -> Result<(), SwitchError> {
        if self.polling {
            return Err(SwitchError::ConfigLocked);
        }

        let polarity = config.resolve_polarity(&self.system);
        let lockout = config.resolve_lockout(&self.system);
        self.switches[id.index()].configure(polarity, config.mode, lockout, sink);
        self.configured = true;
        Ok(())
    }

    /// Configure a switch addressed by raw table index and mode bits
    pub fn configure_raw(
        &mut self,
        index: usize,
        mode_bits: u8,
        sink: &'a dyn SwitchEventSink,
    ) -> Result<(), SwitchError> {
        let id = SwitchId::from_index(index)?;
        let mode = SwitchMode::from_bits(mode_bits)?;
        self.configure(id, SwitchConfig::new(mode), sink)
    }

    /// Run one sampling pass over every enabled switch
    ///
    /// All switches see the same `now`. A bad pin read on one switch does
    /// not stop the pass; the first such error is returned after every
    /// other switch has been sampled, together with the pass's report.
    pub fn poll<P, C>(&mut self, pins: &mut P, clock: &C) -> Result<PollReport, PollError>
    where
        P: SwitchPins + ?Sized,
        C: Monotonic + ?Sized,
    {
        if !self.configured {
            return Err(PollError::empty(SwitchError::NotConfigured));
        }
        self.polling = true;

        let now = clock.now();
        let mut report = PollReport::default();
        let mut first_error = None;

        for switch in self.switches.iter_mut() {
            if switch.mode().is_disabled() {
                continue;
            }

            let id = switch.id();
            let level = match read_level(pins, id) {
                Ok(level) => level,
                Err(e) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("Switch {} pin read failed: {}", id, e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                    continue;
                }
            };

            if let Sample::Transition(edge) = switch.process(level, now, self.machine) {
                if edge == Edge::Leading {
                    self.last_thrown = Some(id);
                }
                report.record(id, edge);
            }
        }

        match first_error {
            Some(error) => Err(PollError { error, report }),
            None => Ok(report),
        }
    }

    /// Run one sampling pass; true if any switch transitioned
    ///
    /// On error, [`PollError::changed`] still answers the same question.
    pub fn poll_all<P, C>(&mut self, pins: &mut P, clock: &C) -> Result<bool, PollError>
    where
        P: SwitchPins + ?Sized,
        C: Monotonic + ?Sized,
    {
        self.poll(pins, clock).map(|report| report.changed())
    }

    /// Sample a single switch with an already-read pin bit
    ///
    /// Bypasses the pin collaborator; used by callers that sample pins
    /// themselves (edge interrupts, simulation).
    pub fn sample(&mut self, id: SwitchId, bit: u8, now: Instant) -> Result<Sample, SwitchError> {
        if !self.configured {
            return Err(SwitchError::NotConfigured);
        }
        let level = PinLevel::from_bit(bit).ok_or(SwitchError::PinOutOfDomain { id, value: bit })?;
        self.polling = true;

        let sample = self.switches[id.index()].process(level, now, self.machine);
        if sample == Sample::Transition(Edge::Leading) {
            self.last_thrown = Some(id);
        }
        Ok(sample)
    }

    /// Mode of a switch
    pub fn get_mode(&self, id: SwitchId) -> SwitchMode {
        self.switches[id.index()].mode()
    }

    /// Debounced state of a switch
    pub fn get_state(&self, id: SwitchId) -> SwitchState {
        self.switches[id.index()].state()
    }

    /// Most recent accepted edge of a switch
    pub fn get_last_edge(&self, id: SwitchId) -> Edge {
        self.switches[id.index()].last_edge()
    }

    /// Switch with the most recent leading edge, if any
    pub fn last_thrown(&self) -> Option<SwitchId> {
        self.last_thrown
    }

    /// Whether the machine has a latched limit fault
    pub fn is_limit_fault_active(&self) -> bool {
        self.machine.is_limit_fault_active()
    }

    /// Read-only view of a switch record
    pub fn switch(&self, id: SwitchId) -> &Switch<'a> {
        &self.switches[id.index()]
    }

    /// System defaults the table was built with
    pub fn system_config(&self) -> &SystemConfig {
        &self.system
    }
}

fn read_level<P: SwitchPins + ?Sized>(pins: &mut P, id: SwitchId) -> Result<PinLevel, SwitchError> {
    let bit = pins
        .read_pin(id)
        .map_err(|error| SwitchError::PinRead { id, error })?;
    PinLevel::from_bit(bit).ok_or(SwitchError::PinOutOfDomain { id, value: bit })
}
