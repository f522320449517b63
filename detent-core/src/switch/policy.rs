//! Feedhold / limit policy
//!
//! The same physical switch means different things depending on the cycle:
//! during homing, a strike is the expected end of a homing move and pauses
//! motion; at any other time, a strike on a limit switch is a fault that
//! locks the machine down until reset.

use super::events::{SwitchEvent, SwitchEventSink};

/// Default sink bound to every switch
///
/// Acts on leading edges only and holds no state of its own. Each leading
/// edge sets at most one flag; repeated strikes re-set an already-set flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedholdLimitPolicy;

impl SwitchEventSink for FeedholdLimitPolicy {
    fn on_leading(&self, event: &SwitchEvent<'_>) {
        // Homing takes precedence regardless of the switch's own mode bits
        if event.machine.current_cycle_is_homing() {
            #[cfg(feature = "defmt")]
            defmt::info!("Homing switch {} struck, requesting feedhold", event.id);
            event.machine.request_feedhold();
        } else if event.mode.limit_enabled() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Limit switch {} ({}) struck, raising limit fault",
                event.id,
                event.mode
            );
            event.machine.raise_limit_fault();
        }
    }
}
