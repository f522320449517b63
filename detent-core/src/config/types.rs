//! Configuration type definitions

use detent_hal::Duration;

use crate::switch::{Polarity, SwitchMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default lockout after an accepted transition (ms)
pub const DEFAULT_LOCKOUT_MS: u32 = 50;

/// System-wide switch defaults
///
/// Applied to every switch when the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SystemConfig {
    /// Wiring type shared by all switches unless overridden
    pub default_polarity: Polarity,
    /// Debounce lockout in milliseconds
    pub lockout_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            default_polarity: Polarity::NormallyOpen,
            lockout_ms: DEFAULT_LOCKOUT_MS,
        }
    }
}

impl SystemConfig {
    /// Lockout as a duration
    pub fn lockout(&self) -> Duration {
        Duration::from_millis(self.lockout_ms as u64)
    }
}

/// Per-switch configuration
///
/// `None` fields inherit the [`SystemConfig`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwitchConfig {
    /// Participation mode
    pub mode: SwitchMode,
    /// Wiring override
    pub polarity: Option<Polarity>,
    /// Lockout override in milliseconds
    pub lockout_ms: Option<u32>,
}

impl SwitchConfig {
    pub const fn new(mode: SwitchMode) -> Self {
        Self {
            mode,
            polarity: None,
            lockout_ms: None,
        }
    }

    pub const fn disabled() -> Self {
        Self::new(SwitchMode::Disabled)
    }

    pub const fn homing() -> Self {
        Self::new(SwitchMode::Homing)
    }

    pub const fn limit() -> Self {
        Self::new(SwitchMode::Limit)
    }

    pub const fn homing_limit() -> Self {
        Self::new(SwitchMode::HomingLimit)
    }

    /// Override the system wiring type
    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    /// Override the system lockout
    pub const fn with_lockout_ms(mut self, lockout_ms: u32) -> Self {
        self.lockout_ms = Some(lockout_ms);
        self
    }

    /// Effective wiring type under `system`
    pub fn resolve_polarity(&self, system: &SystemConfig) -> Polarity {
        self.polarity.unwrap_or(system.default_polarity)
    }

    /// Effective lockout under `system`
    pub fn resolve_lockout(&self, system: &SystemConfig) -> Duration {
        Duration::from_millis(self.lockout_ms.unwrap_or(system.lockout_ms) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let system = SystemConfig::default();
        assert_eq!(system.default_polarity, Polarity::NormallyOpen);
        assert_eq!(system.lockout().as_millis(), DEFAULT_LOCKOUT_MS as u64);
        assert_eq!(SwitchConfig::default().mode, SwitchMode::Disabled);
    }

    #[test]
    fn test_inherits_system_values() {
        let system = SystemConfig {
            default_polarity: Polarity::NormallyClosed,
            lockout_ms: 20,
        };
        let config = SwitchConfig::limit();
        assert_eq!(config.resolve_polarity(&system), Polarity::NormallyClosed);
        assert_eq!(config.resolve_lockout(&system).as_millis(), 20);
    }

    #[test]
    fn test_overrides() {
        let system = SystemConfig::default();
        let config = SwitchConfig::homing()
            .with_polarity(Polarity::NormallyClosed)
            .with_lockout_ms(5);
        assert_eq!(config.resolve_polarity(&system), Polarity::NormallyClosed);
        assert_eq!(config.resolve_lockout(&system).as_millis(), 5);
    }
}
