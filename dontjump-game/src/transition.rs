//! Round transition orchestrator.
//!
//! Pure request/response transitions: every jump or resolved choice takes an
//! immutable state and returns the successor state. There are no fatal
//! errors on this path; degenerate values clamp inside the mode functions.
use crate::config::EngineConfig;
use crate::constants::{BASE_SIDES, UNLOCK_GLOWING_AURA, UNLOCK_SHADOW_CAT};
use crate::milestones::is_milestone;
use crate::modes::{ModeOutcome, mode_state};
use crate::narration::{
    ChoiceKind, SHADOW_CAT_NARRATION, milestone_narration, select_fall_narration,
};
use crate::rng::RngBundle;
use crate::state::{GameMode, Phase, RoundState};

/// Advance the round state for a jump onto `chosen_side`.
///
/// Landing on an unsafe side (any mode but Peaceful) resets the run to
/// round 1 with a fresh baseline platform and a fall line. A safe landing
/// increments the round, re-derives the platform from the active mode's
/// rules, and opens the existential-choice prompt on milestones.
#[must_use]
pub fn next_state(
    state: &RoundState,
    chosen_side: u8,
    cfg: &EngineConfig,
    rngs: &RngBundle,
) -> RoundState {
    let survived = state.mode == GameMode::Peaceful || state.is_safe(chosen_side);
    if survived {
        survive(state, cfg, rngs)
    } else {
        fall(state, cfg, rngs)
    }
}

fn fall(state: &RoundState, cfg: &EngineConfig, rngs: &RngBundle) -> RoundState {
    let outcome = mode_state(state.mode, 1, BASE_SIDES, cfg, rngs);
    let narration = select_fall_narration(&mut *rngs.narration()).to_string();
    merge(state, 1, false, Some(narration), outcome)
}

fn survive(state: &RoundState, cfg: &EngineConfig, rngs: &RngBundle) -> RoundState {
    let next_round = state.round + 1;
    let milestone = is_milestone(state.mode, next_round);
    let narration = milestone.then(|| milestone_narration(next_round).to_string());

    let outcome = mode_state(state.mode, next_round, state.sides, cfg, rngs);
    let mut next = merge(state, next_round, milestone, narration, outcome);
    if milestone
        && state.mode == GameMode::Classic
        && next_round % cfg.classic_unlock_interval == 0
    {
        next.push_unlock(UNLOCK_GLOWING_AURA);
    }
    next
}

/// Resolve the existential-choice prompt shown after a milestone.
///
/// "Embrace oblivion" skips the round counter forward and re-derives the
/// platform at the skipped-ahead round; "Question meaning" appends a
/// cosmetic unlock with flavor narration; anything else (including unknown
/// labels) just clears the milestone flag.
#[must_use]
pub fn resolve_choice(
    state: &RoundState,
    label: &str,
    cfg: &EngineConfig,
    rngs: &RngBundle,
) -> RoundState {
    match ChoiceKind::from_label(label) {
        ChoiceKind::EmbraceOblivion => {
            let skipped = state.round + cfg.skip_ahead_rounds;
            let outcome = mode_state(state.mode, skipped, state.sides, cfg, rngs);
            let narration = milestone_narration(skipped).to_string();
            merge(state, skipped, false, Some(narration), outcome)
        }
        ChoiceKind::QuestionMeaning => {
            let mut next = state.clone();
            next.push_unlock(UNLOCK_SHADOW_CAT);
            next.narration = Some(SHADOW_CAT_NARRATION.to_string());
            next.milestone = false;
            next.phase = Phase::InRound;
            next
        }
        ChoiceKind::AcceptFate => {
            let mut next = state.clone();
            next.milestone = false;
            next.phase = Phase::InRound;
            next
        }
    }
}

fn merge(
    state: &RoundState,
    round: u32,
    milestone: bool,
    narration: Option<String>,
    outcome: ModeOutcome,
) -> RoundState {
    RoundState {
        round,
        mode: state.mode,
        shape: outcome.shape,
        sides: outcome.sides,
        safe_sides: outcome.safe_sides,
        milestone,
        phase: if milestone {
            Phase::AwaitingChoice
        } else {
            Phase::InRound
        },
        narration,
        cosmetic_unlocks: state.cosmetic_unlocks.clone(),
        danger_side: outcome.danger_side,
        power_up: outcome.power_up,
        events: outcome.events,
    }
}
