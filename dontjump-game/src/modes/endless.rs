//! Endless mode: staged escalation into the Disc terminal regime.
use super::{ModeOutcome, pick_power_up};
use crate::config::EngineConfig;
use crate::constants::{
    BASE_SIDES, ENDLESS_DISC_SIDES, ENDLESS_DISC_THRESHOLD, ENDLESS_MAX_SIDES,
    ENDLESS_POWER_UP_INTERVAL, ENDLESS_POWER_UP_MILESTONES, ENDLESS_POWER_UPS,
    ENDLESS_SAFE_REDUCE_INTERVAL, ENDLESS_SIDE_INTERVAL, ENDLESS_SIDE_MILESTONES,
    ENDLESS_STARTING_SAFE, MIN_SAFE_COUNT,
};
use crate::rng::RngBundle;
use crate::sampler::sample_safe_sides;
use crate::state::Shape;

/// Endless rules: sides escalate at {5,10,20,40}, then every 50 rounds,
/// capped at 12. Once the platform outgrows the octagonal prism it becomes
/// a disc with a single safe landing.
pub fn mode_state(
    round: u32,
    prior_sides: u8,
    cfg: &EngineConfig,
    rngs: &RngBundle,
) -> ModeOutcome {
    let mut sides = prior_sides.clamp(BASE_SIDES, ENDLESS_MAX_SIDES);
    let last_milestone = *ENDLESS_SIDE_MILESTONES.last().unwrap_or(&0);
    if sides < ENDLESS_MAX_SIDES && ENDLESS_SIDE_MILESTONES.contains(&round) {
        sides += 1;
    }
    if sides < ENDLESS_MAX_SIDES
        && round > last_milestone
        && (round - last_milestone) % ENDLESS_SIDE_INTERVAL == 0
    {
        sides += 1;
    }

    let reduce = round / ENDLESS_SAFE_REDUCE_INTERVAL;
    let mut safe_count = u32::from(ENDLESS_STARTING_SAFE)
        .saturating_sub(reduce)
        .max(u32::from(MIN_SAFE_COUNT)) as u8;

    // Past the octagonal prism the shape collapses into the hard terminal
    // regime: a disc with twelve landings and exactly one safe.
    let mut shape = Shape::from_sides(sides);
    if sides > ENDLESS_DISC_THRESHOLD {
        shape = Shape::Disc;
        sides = ENDLESS_DISC_SIDES;
        safe_count = MIN_SAFE_COUNT;
    }

    let safe_sides = sample_safe_sides(sides, safe_count, &mut *rngs.platform());
    let mut outcome = ModeOutcome::platform(sides, safe_sides);
    outcome.shape = shape;

    if cfg.power_ups_enabled && power_up_due(round, last_milestone) {
        outcome.power_up = Some(pick_power_up(ENDLESS_POWER_UPS, &mut *rngs.events()));
    }
    outcome
}

fn power_up_due(round: u32, last_milestone: u32) -> bool {
    ENDLESS_POWER_UP_MILESTONES.contains(&round)
        || (round > last_milestone && (round - last_milestone) % ENDLESS_POWER_UP_INTERVAL == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_escalate_on_the_staged_schedule() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(4);
        assert_eq!(mode_state(5, 3, &cfg, &rngs).sides, 4);
        assert_eq!(mode_state(6, 4, &cfg, &rngs).sides, 4);
        assert_eq!(mode_state(40, 6, &cfg, &rngs).sides, 7);
        // 90 = 40 + 50: first interval escalation past the milestone list.
        assert_eq!(mode_state(90, 7, &cfg, &rngs).sides, 8);
        assert_eq!(mode_state(91, 8, &cfg, &rngs).sides, 8);
    }

    #[test]
    fn safe_count_shrinks_every_fifty_rounds() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(4);
        assert_eq!(mode_state(1, 3, &cfg, &rngs).safe_sides.len(), 2);
        assert_eq!(mode_state(49, 3, &cfg, &rngs).safe_sides.len(), 2);
        assert_eq!(mode_state(51, 3, &cfg, &rngs).safe_sides.len(), 1);
        assert_eq!(mode_state(9_999, 3, &cfg, &rngs).safe_sides.len(), 1);
    }

    #[test]
    fn disc_regime_normalizes_the_platform() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(4);
        // 140 = 40 + 2*50 escalates a maxed octagon past the threshold.
        let outcome = mode_state(140, 8, &cfg, &rngs);
        assert_eq!(outcome.shape, Shape::Disc);
        assert_eq!(outcome.sides, 12);
        assert_eq!(outcome.safe_sides.len(), 1);
    }

    #[test]
    fn disc_sticks_once_entered() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(4);
        let outcome = mode_state(141, 12, &cfg, &rngs);
        assert_eq!(outcome.shape, Shape::Disc);
        assert_eq!(outcome.sides, 12);
    }

    #[test]
    fn power_up_cadence_mirrors_the_milestones() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(4);
        for round in [5, 10, 20, 40, 90, 140] {
            let outcome = mode_state(round, 5, &cfg, &rngs);
            let power_up = outcome.power_up.expect("cadence round");
            assert!(ENDLESS_POWER_UPS.contains(&power_up.effect.as_str()));
        }
        assert!(mode_state(41, 5, &cfg, &rngs).power_up.is_none());
    }
}
