//! Engine configuration: the few externally adjustable rule knobs.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{CLASSIC_UNLOCK_INTERVAL, SKIP_AHEAD_ROUNDS};

/// Validation failures for [`EngineConfig`].
#[derive(Debug, Error)]
pub enum EngineConfigError {
    #[error("{field} must be within [{min}, {max}], got {value}")]
    RangeViolation {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Caller-supplied rule configuration.
///
/// Everything else in the engine is a fixed tuning constant; these are the
/// knobs a run legitimately varies (the player's power-up preference, the
/// Peaceful shape-cycling option).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Whether power-up and penalty triggers fire at all.
    #[serde(default = "default_power_ups_enabled")]
    pub power_ups_enabled: bool,
    /// Whether Peaceful escalates its side-count on the cycling schedule.
    #[serde(default)]
    pub shape_cycling: bool,
    /// Rounds skipped by the "Embrace oblivion" existential choice.
    #[serde(default = "default_skip_ahead_rounds")]
    pub skip_ahead_rounds: u32,
    /// Classic grants a cosmetic unlock at milestones divisible by this.
    #[serde(default = "default_classic_unlock_interval")]
    pub classic_unlock_interval: u32,
}

const fn default_power_ups_enabled() -> bool {
    true
}

const fn default_skip_ahead_rounds() -> u32 {
    SKIP_AHEAD_ROUNDS
}

const fn default_classic_unlock_interval() -> u32 {
    CLASSIC_UNLOCK_INTERVAL
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            power_ups_enabled: default_power_ups_enabled(),
            shape_cycling: false,
            skip_ahead_rounds: default_skip_ahead_rounds(),
            classic_unlock_interval: default_classic_unlock_interval(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON string and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or a field violates the
    /// documented bounds.
    pub fn from_json(json_str: &str) -> Result<Self, EngineConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns `EngineConfigError` when any field violates the documented
    /// bounds.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if !(1..=100).contains(&self.skip_ahead_rounds) {
            return Err(EngineConfigError::RangeViolation {
                field: "skip_ahead_rounds",
                min: 1,
                max: 100,
                value: self.skip_ahead_rounds,
            });
        }
        if !(1..=1_000).contains(&self.classic_unlock_interval) {
            return Err(EngineConfigError::RangeViolation {
                field: "classic_unlock_interval",
                min: 1,
                max: 1_000,
                value: self.classic_unlock_interval,
            });
        }
        Ok(())
    }
}
