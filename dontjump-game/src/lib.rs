//! Don't Jump Game Engine
//!
//! Platform-agnostic core game logic for the Don't Jump existential arcade
//! game. This crate provides the round-progression rules, mode engines, and
//! scoring without UI or platform-specific dependencies.

pub mod config;
pub mod constants;
pub mod milestones;
pub mod modes;
pub mod narration;
pub mod rng;
pub mod sampler;
pub mod score;
pub mod session;
pub mod settings;
pub mod state;
pub mod transition;

// Re-export commonly used types
pub use config::{EngineConfig, EngineConfigError};
pub use milestones::{is_milestone, milestone_table};
pub use modes::{ModeOutcome, mode_state};
pub use narration::{
    ChoiceKind, EXISTENTIAL_CHOICES, ExistentialChoice, milestone_narration, select_fall_narration,
};
pub use rng::{CountingRng, RngBundle};
pub use sampler::sample_safe_sides;
pub use score::{
    PlayerProfile, ScoreEntry, TOP_SCORE_LIMIT, default_top_scores, qualifies, record_score,
};
pub use session::GameSession;
pub use settings::{DisplaySettings, randomize_platform_shape};
pub use state::{
    EventKind, EventSet, GameMode, ModeEvent, ModeParseError, Phase, PowerUp, RoundState, Shape,
    SideSet,
};
pub use transition::{next_state, resolve_choice};

/// Trait for abstracting profile persistence.
/// Platform-specific implementations should provide this.
pub trait ScoreStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save a player profile under the given key.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be saved.
    fn save_profile(&self, key: &str, profile: &PlayerProfile) -> Result<(), Self::Error>;

    /// Load a player profile by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be loaded.
    fn load_profile(&self, key: &str) -> Result<Option<PlayerProfile>, Self::Error>;

    /// Delete a stored profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be deleted.
    fn delete_profile(&self, key: &str) -> Result<(), Self::Error>;
}

/// Trait for abstracting the shared top-score board.
/// Platform-specific implementations should provide this.
pub trait Leaderboard {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Submit a finished run's score.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission cannot be recorded.
    fn submit_score(&self, name: &str, score: u32, mode: GameMode) -> Result<(), Self::Error>;

    /// Fetch the top `limit` entries for a mode, best first.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be read.
    fn fetch_top(&self, mode: GameMode, limit: usize) -> Result<Vec<ScoreEntry>, Self::Error>;
}

/// Main game engine for managing sessions and persistence collaborators.
pub struct GameEngine<S, L>
where
    S: ScoreStorage,
    L: Leaderboard,
{
    storage: S,
    leaderboard: L,
}

impl<S, L> GameEngine<S, L>
where
    S: ScoreStorage,
    L: Leaderboard,
{
    /// Create a new game engine with the provided storage and leaderboard.
    pub const fn new(storage: S, leaderboard: L) -> Self {
        Self {
            storage,
            leaderboard,
        }
    }

    /// Start a session with default engine configuration.
    #[must_use]
    pub fn create_session(&self, mode: GameMode, seed: u64) -> GameSession {
        GameSession::new(mode, seed, EngineConfig::default())
    }

    /// Start a session with caller-validated configuration.
    #[must_use]
    pub fn create_session_with_config(
        &self,
        mode: GameMode,
        seed: u64,
        cfg: EngineConfig,
    ) -> GameSession {
        GameSession::new(mode, seed, cfg)
    }

    /// Save a player profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be saved.
    pub fn save_profile(&self, key: &str, profile: &PlayerProfile) -> Result<(), S::Error> {
        self.storage.save_profile(key, profile)
    }

    /// Load a player profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be loaded.
    pub fn load_profile(&self, key: &str) -> Result<Option<PlayerProfile>, S::Error> {
        self.storage.load_profile(key)
    }

    /// Delete a stored profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be deleted.
    pub fn delete_profile(&self, key: &str) -> Result<(), S::Error> {
        self.storage.delete_profile(key)
    }

    /// Fetch a mode's top-score board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be read.
    pub fn top_scores(&self, mode: GameMode) -> Result<Vec<ScoreEntry>, L::Error> {
        self.leaderboard.fetch_top(mode, TOP_SCORE_LIMIT)
    }

    /// Record a finished session under the named profile: fold the high
    /// score and unlocks into the profile, persist it, and submit to the
    /// shared board when the score qualifies.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be persisted or the board
    /// rejects the submission.
    pub fn submit_run(&self, key: &str, session: &GameSession) -> Result<PlayerProfile, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
        L::Error: Into<anyhow::Error>,
    {
        let mode = session.state().mode;
        let score = session.high_score();

        let mut profile = self
            .storage
            .load_profile(key)
            .map_err(Into::into)?
            .unwrap_or_default();
        profile.record_run(mode, score);
        profile.absorb_unlocks(&session.state().cosmetic_unlocks);
        self.storage.save_profile(key, &profile).map_err(Into::into)?;

        let board = self
            .leaderboard
            .fetch_top(mode, TOP_SCORE_LIMIT)
            .map_err(Into::into)?;
        if qualifies(&board, score, TOP_SCORE_LIMIT) {
            self.leaderboard
                .submit_score(key, score, mode)
                .map_err(Into::into)?;
        }
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        profiles: Rc<RefCell<HashMap<String, PlayerProfile>>>,
    }

    impl ScoreStorage for MemoryStorage {
        type Error = Infallible;

        fn save_profile(&self, key: &str, profile: &PlayerProfile) -> Result<(), Self::Error> {
            self.profiles
                .borrow_mut()
                .insert(key.to_string(), profile.clone());
            Ok(())
        }

        fn load_profile(&self, key: &str) -> Result<Option<PlayerProfile>, Self::Error> {
            Ok(self.profiles.borrow().get(key).cloned())
        }

        fn delete_profile(&self, key: &str) -> Result<(), Self::Error> {
            self.profiles.borrow_mut().remove(key);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MemoryBoard {
        rows: Rc<RefCell<Vec<ScoreEntry>>>,
    }

    impl Leaderboard for MemoryBoard {
        type Error = Infallible;

        fn submit_score(&self, name: &str, score: u32, _mode: GameMode) -> Result<(), Self::Error> {
            let mut rows = self.rows.borrow_mut();
            record_score(&mut rows, ScoreEntry::new(name, score), TOP_SCORE_LIMIT);
            Ok(())
        }

        fn fetch_top(&self, _mode: GameMode, limit: usize) -> Result<Vec<ScoreEntry>, Self::Error> {
            let rows = self.rows.borrow();
            Ok(rows.iter().take(limit).cloned().collect())
        }
    }

    #[test]
    fn engine_round_trips_profiles() {
        let engine = GameEngine::new(MemoryStorage::default(), MemoryBoard::default());
        let mut profile = PlayerProfile::default();
        profile.record_run(GameMode::Endless, 17);
        engine.save_profile("slot-one", &profile).unwrap();

        let loaded = engine.load_profile("slot-one").unwrap().expect("saved");
        assert_eq!(loaded, profile);
        engine.delete_profile("slot-one").unwrap();
        assert!(engine.load_profile("slot-one").unwrap().is_none());
    }

    #[test]
    fn submit_run_folds_session_into_profile_and_board() {
        let engine = GameEngine::new(MemoryStorage::default(), MemoryBoard::default());
        let mut session = engine.create_session(GameMode::Classic, 0xF00D);
        for _ in 0..6 {
            let side = session.state().safe_sides[0];
            session.jump(side);
        }
        let score = session.high_score();
        assert!(score > 0);

        let profile = engine.submit_run("Climber", &session).unwrap();
        assert_eq!(profile.best_scores[&GameMode::Classic], score);

        let board = engine.top_scores(GameMode::Classic).unwrap();
        assert!(board.iter().any(|e| e.name == "Climber" && e.score == score));
    }

    #[test]
    fn submit_run_skips_the_board_when_score_does_not_qualify() {
        let storage = MemoryStorage::default();
        let board = MemoryBoard::default();
        for entry in default_top_scores() {
            board.rows.borrow_mut().push(entry);
        }
        let engine = GameEngine::new(storage, board.clone());

        let session = engine.create_session(GameMode::Classic, 1);
        engine.submit_run("Faller", &session).unwrap();
        assert!(!board.rows.borrow().iter().any(|e| e.name == "Faller"));
    }
}
