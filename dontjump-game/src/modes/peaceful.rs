//! Peaceful mode: everything is safe except one danger side.
use rand::Rng;

use super::{ModeOutcome, pick_power_up};
use crate::config::EngineConfig;
use crate::constants::{
    BASE_SIDES, PEACEFUL_CYCLE_INTERVAL, PEACEFUL_MAX_SIDES, PEACEFUL_POWER_UPS,
    PEACEFUL_POWER_UP_INTERVAL,
};
use crate::rng::RngBundle;
use crate::state::SideSet;

/// Peaceful rules: `sides - 1` safe landings, one uniformly random danger
/// side per round. With shape cycling enabled the platform gains a face
/// every 25 rounds up to the mode cap.
pub fn mode_state(
    round: u32,
    prior_sides: u8,
    cfg: &EngineConfig,
    rngs: &RngBundle,
) -> ModeOutcome {
    let mut sides = prior_sides.clamp(BASE_SIDES, PEACEFUL_MAX_SIDES);
    if cfg.shape_cycling
        && sides < PEACEFUL_MAX_SIDES
        && round > 1
        && round % PEACEFUL_CYCLE_INTERVAL == 0
    {
        sides += 1;
    }

    let danger_side = rngs.platform().gen_range(0..sides);
    let safe_sides: SideSet = (0..sides).filter(|&s| s != danger_side).collect();

    let mut outcome = ModeOutcome::platform(sides, safe_sides);
    outcome.danger_side = Some(danger_side);
    if cfg.power_ups_enabled && round % PEACEFUL_POWER_UP_INTERVAL == 0 {
        outcome.power_up = Some(pick_power_up(PEACEFUL_POWER_UPS, &mut *rngs.events()));
    }
    outcome
}
