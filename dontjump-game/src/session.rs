//! A running game session: round state, seeded RNG streams, and scoring.
use std::rc::Rc;

use crate::config::EngineConfig;
use crate::constants::{
    LOG_CHOICE_ACCEPT, LOG_CHOICE_SKIP, LOG_CHOICE_UNLOCK, LOG_EVENTS, LOG_FALL, LOG_HIGH_SCORE,
    LOG_MILESTONE, LOG_MODE_SWITCH, LOG_POWER_UP, LOG_SURVIVED,
};
use crate::narration::ChoiceKind;
use crate::rng::RngBundle;
use crate::state::{GameMode, RoundState};
use crate::transition::{next_state, resolve_choice};

/// Owns everything one run needs: the current [`RoundState`], the seeded
/// RNG bundle, the streak score, and the high score. The UI layer calls
/// [`jump`](Self::jump) and [`choose`](Self::choose) and renders whatever
/// comes back; nothing in here blocks or suspends.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: RoundState,
    cfg: EngineConfig,
    rngs: Rc<RngBundle>,
    seed: u64,
    streak: u32,
    high_score: u32,
    logs: Vec<String>,
}

impl GameSession {
    /// Start a fresh run in `mode` from a user-visible seed.
    #[must_use]
    pub fn new(mode: GameMode, seed: u64, cfg: EngineConfig) -> Self {
        Self {
            state: RoundState::new_run(mode),
            cfg,
            rngs: Rc::new(RngBundle::from_user_seed(seed)),
            seed,
            streak: 0,
            high_score: 0,
            logs: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Current streak depth: survived jumps since the last fall.
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// Best streak seen this session; survives falls and mode switches.
    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Resolve one jump onto `side` and return the new state.
    pub fn jump(&mut self, side: u8) -> &RoundState {
        let survived = self.state.mode == GameMode::Peaceful || self.state.is_safe(side);
        let next = next_state(&self.state, side, &self.cfg, &self.rngs);

        if survived {
            self.streak += 1;
            if self.streak > self.high_score {
                self.high_score = self.streak;
                self.logs.push(String::from(LOG_HIGH_SCORE));
            }
            self.logs.push(String::from(LOG_SURVIVED));
            if next.milestone {
                self.logs.push(String::from(LOG_MILESTONE));
            }
        } else {
            self.streak = 0;
            self.logs.push(String::from(LOG_FALL));
        }
        if next.power_up.is_some() {
            self.logs.push(String::from(LOG_POWER_UP));
        }
        if !next.events.is_empty() {
            self.logs.push(String::from(LOG_EVENTS));
        }

        self.state = next;
        &self.state
    }

    /// Resolve the existential-choice prompt and return the new state.
    pub fn choose(&mut self, label: &str) -> &RoundState {
        let key = match ChoiceKind::from_label(label) {
            ChoiceKind::EmbraceOblivion => LOG_CHOICE_SKIP,
            ChoiceKind::QuestionMeaning => LOG_CHOICE_UNLOCK,
            ChoiceKind::AcceptFate => LOG_CHOICE_ACCEPT,
        };
        self.logs.push(String::from(key));
        self.state = resolve_choice(&self.state, label, &self.cfg, &self.rngs);
        &self.state
    }

    /// Switch modes: the platform resets to baseline and milestone progress
    /// clears, but earned cosmetics and the session high score carry over.
    pub fn switch_mode(&mut self, mode: GameMode) {
        let unlocks = std::mem::take(&mut self.state.cosmetic_unlocks);
        self.state = RoundState::new_run(mode);
        self.state.cosmetic_unlocks = unlocks;
        self.streak = 0;
        self.logs.push(String::from(LOG_MODE_SWITCH));
    }

    /// Restart the current mode from round 1.
    pub fn reset(&mut self) {
        let mode = self.state.mode;
        self.switch_mode(mode);
    }

    /// Replace the RNG streams with a freshly seeded bundle.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rngs = Rc::new(RngBundle::from_user_seed(seed));
    }

    /// Mutate the state directly; for test scaffolding and save restore.
    pub fn with_state_mut<F: FnOnce(&mut RoundState)>(&mut self, mutate: F) {
        mutate(&mut self.state);
    }

    /// Consume the session, yielding the final round state.
    #[must_use]
    pub fn into_state(self) -> RoundState {
        self.state
    }
}
