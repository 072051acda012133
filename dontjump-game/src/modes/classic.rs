//! Classic mode: slow escalation, tightening safe sides after round 100.
use super::{ModeOutcome, pick_power_up};
use crate::config::EngineConfig;
use crate::constants::{
    BASE_SIDES, CLASSIC_MAX_SIDES, CLASSIC_POWER_UPS, CLASSIC_POWER_UP_INTERVAL,
    CLASSIC_SAFE_DECAY_INTERVAL, CLASSIC_SAFE_DECAY_START, CLASSIC_SAFE_FLOOR_EARLY,
    MIN_SAFE_COUNT,
};
use crate::milestones::is_milestone;
use crate::rng::RngBundle;
use crate::sampler::sample_safe_sides;

/// Classic rules: the side-count gains one face each time the round lands
/// exactly on a Classic milestone, capped at 8.
pub fn mode_state(
    round: u32,
    prior_sides: u8,
    cfg: &EngineConfig,
    rngs: &RngBundle,
) -> ModeOutcome {
    let mut sides = prior_sides.clamp(BASE_SIDES, CLASSIC_MAX_SIDES);
    if sides < CLASSIC_MAX_SIDES && is_milestone(crate::state::GameMode::Classic, round) {
        sides += 1;
    }

    let safe_count = safe_count_for(round, sides);
    let safe_sides = sample_safe_sides(sides, safe_count, &mut *rngs.platform());

    let mut outcome = ModeOutcome::platform(sides, safe_sides);
    if cfg.power_ups_enabled && round % CLASSIC_POWER_UP_INTERVAL == 0 {
        outcome.power_up = Some(pick_power_up(CLASSIC_POWER_UPS, &mut *rngs.events()));
    }
    outcome
}

/// Half the faces stay safe (never fewer than two) through round 100; past
/// that the count sheds one per ten rounds down to a floor of one.
fn safe_count_for(round: u32, sides: u8) -> u8 {
    let base = (sides / 2).max(CLASSIC_SAFE_FLOOR_EARLY).min(sides);
    if round <= CLASSIC_SAFE_DECAY_START {
        return base;
    }
    let decay = (round - CLASSIC_SAFE_DECAY_START) / CLASSIC_SAFE_DECAY_INTERVAL;
    u32::from(base)
        .saturating_sub(decay)
        .max(u32::from(MIN_SAFE_COUNT)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_count_holds_at_half_until_100() {
        assert_eq!(safe_count_for(1, 3), 2);
        assert_eq!(safe_count_for(50, 8), 4);
        assert_eq!(safe_count_for(100, 8), 4);
    }

    #[test]
    fn safe_count_decays_past_100() {
        assert_eq!(safe_count_for(109, 8), 4);
        assert_eq!(safe_count_for(110, 8), 3);
        assert_eq!(safe_count_for(130, 8), 1);
        assert_eq!(safe_count_for(500_000, 8), 1);
    }

    #[test]
    fn sides_escalate_only_at_milestones() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(2);
        assert_eq!(mode_state(4, 3, &cfg, &rngs).sides, 3);
        assert_eq!(mode_state(5, 3, &cfg, &rngs).sides, 4);
        assert_eq!(mode_state(6, 4, &cfg, &rngs).sides, 4);
    }

    #[test]
    fn sides_cap_at_eight() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(2);
        assert_eq!(mode_state(80, 8, &cfg, &rngs).sides, 8);
        // Degenerate prior side-counts clamp into range.
        assert_eq!(mode_state(2, 50, &cfg, &rngs).sides, 8);
        assert!(mode_state(2, 0, &cfg, &rngs).sides >= 3);
    }

    #[test]
    fn power_up_fires_on_interval_when_enabled() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(9);
        let hit = mode_state(20, 5, &cfg, &rngs);
        let power_up = hit.power_up.expect("round 20 triggers");
        assert!(CLASSIC_POWER_UPS.contains(&power_up.effect.as_str()));
        assert!(mode_state(21, 5, &cfg, &rngs).power_up.is_none());

        let disabled = EngineConfig {
            power_ups_enabled: false,
            ..EngineConfig::default()
        };
        assert!(mode_state(20, 5, &disabled, &rngs).power_up.is_none());
    }
}
