//! Streak scoring, top-score lists, and the persisted player profile.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::state::GameMode;

/// Number of entries a top-score board keeps by default.
pub const TOP_SCORE_LIMIT: usize = 10;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    #[must_use]
    pub fn new(name: &str, score: u32) -> Self {
        Self {
            name: name.to_string(),
            score,
        }
    }
}

/// The seeded global board shown before any real scores arrive.
#[must_use]
pub fn default_top_scores() -> Vec<ScoreEntry> {
    [
        ("VoidWalker", 42),
        ("Existentialist", 37),
        ("JumpMaster", 33),
        ("Philosopher", 28),
        ("Stoic", 25),
        ("Nihilist", 22),
        ("Seeker", 20),
        ("Absurdist", 18),
        ("Sisyphus", 15),
        ("Newcomer", 12),
    ]
    .into_iter()
    .map(|(name, score)| ScoreEntry::new(name, score))
    .collect()
}

/// Whether `score` would earn a slot on the board.
#[must_use]
pub fn qualifies(board: &[ScoreEntry], score: u32, limit: usize) -> bool {
    board.len() < limit || board.iter().any(|entry| score > entry.score)
}

/// Insert an entry keeping the board sorted descending and capped at
/// `limit`. Ties keep earlier entries ahead.
pub fn record_score(board: &mut Vec<ScoreEntry>, entry: ScoreEntry, limit: usize) {
    let position = board
        .iter()
        .position(|existing| entry.score > existing.score)
        .unwrap_or(board.len());
    board.insert(position, entry);
    board.truncate(limit);
}

/// Plain data the persistence collaborator stores, keyed by a string
/// identifier chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayerProfile {
    /// Best streak per mode.
    #[serde(default)]
    pub best_scores: HashMap<GameMode, u32>,
    /// Ordered unlock identifiers earned across runs.
    #[serde(default)]
    pub cosmetic_unlocks: Vec<String>,
}

impl PlayerProfile {
    /// Record a finished run. Returns true when the score is a new best for
    /// the mode.
    pub fn record_run(&mut self, mode: GameMode, score: u32) -> bool {
        let best = self.best_scores.entry(mode).or_insert(0);
        if score > *best {
            *best = score;
            return true;
        }
        false
    }

    /// Merge run unlocks into the profile, preserving order and uniqueness.
    pub fn absorb_unlocks(&mut self, unlocks: &[String]) {
        for unlock in unlocks {
            if !self.cosmetic_unlocks.contains(unlock) {
                self.cosmetic_unlocks.push(unlock.clone());
            }
        }
    }
}
