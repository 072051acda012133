//! Per-mode rule functions sharing one canonical signature.
//!
//! Each mode computes the next platform from `(round, prior_sides, config)`
//! plus the engine's RNG streams, and returns the shared [`ModeOutcome`]
//! shape. All four functions are total: degenerate inputs clamp, never fail.
use rand::Rng;

use crate::config::EngineConfig;
use crate::rng::RngBundle;
use crate::state::{EventSet, GameMode, PowerUp, Shape, SideSet};

pub mod classic;
pub mod endless;
pub mod maniac;
pub mod peaceful;

/// Result of a per-mode rule function: the next platform plus any
/// mode-specific extras triggered this round.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeOutcome {
    pub sides: u8,
    pub safe_sides: SideSet,
    pub shape: Shape,
    pub power_up: Option<PowerUp>,
    pub events: EventSet,
    pub danger_side: Option<u8>,
}

impl ModeOutcome {
    pub(crate) fn platform(sides: u8, safe_sides: SideSet) -> Self {
        Self {
            sides,
            safe_sides,
            shape: Shape::from_sides(sides),
            power_up: None,
            events: EventSet::new(),
            danger_side: None,
        }
    }
}

/// Dispatch to the rule function for `mode`.
#[must_use]
pub fn mode_state(
    mode: GameMode,
    round: u32,
    prior_sides: u8,
    cfg: &EngineConfig,
    rngs: &RngBundle,
) -> ModeOutcome {
    match mode {
        GameMode::Classic => classic::mode_state(round, prior_sides, cfg, rngs),
        GameMode::Endless => endless::mode_state(round, prior_sides, cfg, rngs),
        GameMode::Maniac => maniac::mode_state(round, prior_sides, cfg, rngs),
        GameMode::Peaceful => peaceful::mode_state(round, prior_sides, cfg, rngs),
    }
}

pub(crate) fn pick_power_up<R: Rng>(catalog: &[&str], rng: &mut R) -> PowerUp {
    PowerUp::new(catalog[rng.gen_range(0..catalog.len())])
}
