//! Limit and homing switches
//!
//! Data flow for one control cycle:
//!
//! ```text
//! SwitchTable::poll ──► SwitchPins::read_pin ──► Switch::sample ──► dispatch ──► Machine flags
//!    (poll driver)          (raw bit)            (debounce/edge)    (event sink)
//! ```

pub mod debounce;
pub mod error;
pub mod events;
pub mod policy;
pub mod table;
pub mod types;

pub use debounce::{Sample, Switch};
pub use error::SwitchError;
pub use events::{dispatch, NoAction, SwitchEvent, SwitchEventSink};
pub use policy::FeedholdLimitPolicy;
pub use table::{PollError, PollReport, SwitchTable, Transition};
pub use types::*;
