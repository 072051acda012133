//! Maniac mode: the platform is rerolled from scratch every round.
use rand::Rng;

use super::ModeOutcome;
use crate::config::EngineConfig;
use crate::constants::{
    MANIAC_EARLY_ROUND_CAP, MANIAC_EARLY_SAFE_CAP, MANIAC_EARLY_SIDE_RANGE, MANIAC_EVENT_INTERVAL,
    MANIAC_LATE_SAFE_CAP, MANIAC_LATE_SIDE_RANGE, MANIAC_MID_ROUND_CAP, MANIAC_MID_SAFE_CAP,
    MANIAC_MID_SIDE_RANGE, MANIAC_PENALTIES, MANIAC_POWER_UPS, MIN_SAFE_COUNT,
};
use crate::rng::RngBundle;
use crate::sampler::sample_safe_sides;
use crate::state::{EventKind, ModeEvent};

/// Maniac rules: no prior-sides continuity. Side-count and safe-count are
/// both rerandomized within round-dependent bounds, and every fifth round
/// rolls one or two effects from the combined power/penalty catalogs.
pub fn mode_state(
    round: u32,
    _prior_sides: u8,
    cfg: &EngineConfig,
    rngs: &RngBundle,
) -> ModeOutcome {
    let (sides, safe_count) = {
        let mut rng = rngs.platform();
        let (lo, hi) = side_range(round);
        let sides = rng.gen_range(lo..=hi);
        let cap = safe_cap(round).min(sides).max(MIN_SAFE_COUNT);
        let safe_count = rng.gen_range(MIN_SAFE_COUNT..=cap);
        (sides, safe_count)
    };
    let safe_sides = sample_safe_sides(sides, safe_count, &mut *rngs.platform());

    let mut outcome = ModeOutcome::platform(sides, safe_sides);
    if cfg.power_ups_enabled && round % MANIAC_EVENT_INTERVAL == 0 {
        outcome.events = roll_events(&mut *rngs.events());
    }
    outcome
}

const fn side_range(round: u32) -> (u8, u8) {
    if round <= MANIAC_EARLY_ROUND_CAP {
        MANIAC_EARLY_SIDE_RANGE
    } else if round <= MANIAC_MID_ROUND_CAP {
        MANIAC_MID_SIDE_RANGE
    } else {
        MANIAC_LATE_SIDE_RANGE
    }
}

const fn safe_cap(round: u32) -> u8 {
    if round <= MANIAC_EARLY_ROUND_CAP {
        MANIAC_EARLY_SAFE_CAP
    } else if round <= MANIAC_MID_ROUND_CAP {
        MANIAC_MID_SAFE_CAP
    } else {
        MANIAC_LATE_SAFE_CAP
    }
}

/// One or two effects per trigger, sampled without replacement from the
/// union of both catalogs so a single trigger never repeats an effect.
fn roll_events<R: Rng>(rng: &mut R) -> crate::state::EventSet {
    let mut pool: Vec<ModeEvent> = MANIAC_POWER_UPS
        .iter()
        .map(|e| ModeEvent {
            kind: EventKind::Power,
            effect: (*e).to_string(),
        })
        .chain(MANIAC_PENALTIES.iter().map(|e| ModeEvent {
            kind: EventKind::Penalty,
            effect: (*e).to_string(),
        }))
        .collect();

    let count = if rng.r#gen::<f32>() < 0.5 { 1 } else { 2 };
    let mut events = crate::state::EventSet::new();
    for _ in 0..count {
        if pool.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..pool.len());
        events.push(pool.swap_remove(idx));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn side_ranges_track_the_round() {
        assert_eq!(side_range(1), (3, 6));
        assert_eq!(side_range(20), (3, 6));
        assert_eq!(side_range(21), (4, 8));
        assert_eq!(side_range(50), (4, 8));
        assert_eq!(side_range(51), (3, 8));
    }

    #[test]
    fn safe_caps_tighten_with_depth() {
        assert_eq!(safe_cap(10), 3);
        assert_eq!(safe_cap(35), 2);
        assert_eq!(safe_cap(1_000), 1);
    }

    #[test]
    fn rolled_platforms_stay_within_bounds() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(77);
        for round in 1..=500 {
            let outcome = mode_state(round, 3, &cfg, &rngs);
            let (lo, hi) = side_range(round);
            assert!(outcome.sides >= lo && outcome.sides <= hi, "round {round}");
            let cap = safe_cap(round).min(outcome.sides);
            assert!(!outcome.safe_sides.is_empty());
            assert!(outcome.safe_sides.len() <= usize::from(cap));
        }
    }

    #[test]
    fn late_rounds_leave_exactly_one_safe_side() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(8);
        for round in [51, 100, 499_999] {
            let outcome = mode_state(round, 3, &cfg, &rngs);
            assert_eq!(outcome.safe_sides.len(), 1, "round {round}");
        }
    }

    #[test]
    fn events_fire_every_fifth_round_without_duplicates() {
        let cfg = EngineConfig::default();
        let rngs = RngBundle::from_user_seed(21);
        for round in (5..=100).step_by(5) {
            let outcome = mode_state(round, 3, &cfg, &rngs);
            assert!(!outcome.events.is_empty(), "round {round}");
            assert!(outcome.events.len() <= 2);
            if outcome.events.len() == 2 {
                assert_ne!(outcome.events[0].effect, outcome.events[1].effect);
            }
        }
        assert!(mode_state(6, 3, &cfg, &rngs).events.is_empty());
    }

    #[test]
    fn event_trigger_can_mix_power_and_penalty() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let mut saw_power = false;
        let mut saw_penalty = false;
        for _ in 0..64 {
            for event in roll_events(&mut rng) {
                match event.kind {
                    EventKind::Power => saw_power = true,
                    EventKind::Penalty => saw_penalty = true,
                }
            }
        }
        assert!(saw_power && saw_penalty);
    }
}
