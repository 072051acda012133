//! Per-mode milestone tables and membership tests.
//!
//! Each mode owns an ascending list of milestone round numbers. Membership
//! is exact-match only; there are no interval semantics.
use std::sync::OnceLock;

use crate::state::GameMode;

/// Classic's table runs deep into late-game territory: the early hand-picked
/// rounds, then a doubling ladder from 100 up past 400k.
fn classic_table() -> &'static [u32] {
    static TABLE: OnceLock<Vec<u32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut rounds = vec![5, 10, 20, 40, 80];
        let mut next = 100u32;
        while next <= 409_600 {
            rounds.push(next);
            next *= 2;
        }
        rounds
    })
}

/// Endless milestones: the side-escalation rounds, then every 50 through 1000.
fn endless_table() -> &'static [u32] {
    static TABLE: OnceLock<Vec<u32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut rounds = vec![5, 10, 20, 40];
        rounds.extend((1..=20).map(|k| k * 50));
        rounds
    })
}

/// Maniac milestones: every 25 rounds through 500.
fn maniac_table() -> &'static [u32] {
    static TABLE: OnceLock<Vec<u32>> = OnceLock::new();
    TABLE.get_or_init(|| (1..=20).map(|k| k * 25).collect())
}

const PEACEFUL_TABLE: [u32; 7] = [10, 25, 50, 100, 150, 200, 250];

/// The active mode's ascending milestone-round table.
#[must_use]
pub fn milestone_table(mode: GameMode) -> &'static [u32] {
    match mode {
        GameMode::Classic => classic_table(),
        GameMode::Endless => endless_table(),
        GameMode::Maniac => maniac_table(),
        GameMode::Peaceful => &PEACEFUL_TABLE,
    }
}

/// True iff `round` is literally present in the mode's milestone table.
#[must_use]
pub fn is_milestone(mode: GameMode, round: u32) -> bool {
    milestone_table(mode).binary_search(&round).is_ok()
}
