//! Round state and the enumerations shared across the rule engine.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{
    BASE_SIDES, CLASSIC_MAX_SIDES, ENDLESS_MAX_SIDES, MANIAC_MAX_SIDES, PEACEFUL_MAX_SIDES,
};

/// Set of jump-target indices stored inline without heap allocation.
pub type SideSet = SmallVec<[u8; 12]>;

/// Per-round triggered events stored inline (Maniac rolls at most two).
pub type EventSet = SmallVec<[ModeEvent; 2]>;

/// The four rule sets governing platform generation and difficulty scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Classic,
    Endless,
    Maniac,
    Peaceful,
}

impl GameMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Endless => "endless",
            Self::Maniac => "maniac",
            Self::Peaceful => "peaceful",
        }
    }

    /// Highest side-count this mode's escalation rules may reach.
    #[must_use]
    pub const fn max_sides(self) -> u8 {
        match self {
            Self::Classic => CLASSIC_MAX_SIDES,
            Self::Endless => ENDLESS_MAX_SIDES,
            Self::Maniac => MANIAC_MAX_SIDES,
            Self::Peaceful => PEACEFUL_MAX_SIDES,
        }
    }

    /// Resolve a mode name, falling back to Classic for anything
    /// unrecognized. Mode names arrive from UI-layer strings and an unknown
    /// value is not a fatal condition.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized mode-name string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game mode: {0:?}")]
pub struct ModeParseError(String);

impl FromStr for GameMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "endless" => Ok(Self::Endless),
            "maniac" => Ok(Self::Maniac),
            "peaceful" => Ok(Self::Peaceful),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

/// Canonical platform geometry label for a side-count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Tetrahedron,
    Cube,
    HexagonalPrism,
    OctagonalPrism,
    NGonPrism(u8),
    Disc,
}

impl Shape {
    /// Map a side-count to its display shape. The Disc terminal regime is
    /// chosen by the Endless rules, never inferred from side-count alone.
    #[must_use]
    pub const fn from_sides(sides: u8) -> Self {
        match sides {
            3 => Self::Tetrahedron,
            4 => Self::Cube,
            6 => Self::HexagonalPrism,
            8 => Self::OctagonalPrism,
            n => Self::NGonPrism(n),
        }
    }

    /// Human-friendly description used for narration and tooltips.
    #[must_use]
    pub fn description(self) -> String {
        match self {
            Self::Tetrahedron => String::from("Tetrahedron (4 triangular faces)"),
            Self::Cube => String::from("Cube (6 square faces)"),
            Self::HexagonalPrism => {
                String::from("Hexagonal Prism (2 hexagonal faces, 6 rectangular faces)")
            }
            Self::OctagonalPrism => {
                String::from("Octagonal Prism (2 octagonal faces, 8 rectangular faces)")
            }
            Self::NGonPrism(n) => format!("{n}-gon Prism"),
            Self::Disc => String::from("Disc"),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tetrahedron => f.write_str("Tetrahedron"),
            Self::Cube => f.write_str("Cube"),
            Self::HexagonalPrism => f.write_str("Hexagonal Prism"),
            Self::OctagonalPrism => f.write_str("Octagonal Prism"),
            Self::NGonPrism(n) => write!(f, "{n}-gon Prism"),
            Self::Disc => f.write_str("Disc"),
        }
    }
}

/// Orchestrator phase: normal play, or the existential-choice prompt shown
/// after a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    InRound,
    AwaitingChoice,
}

/// Transient power-up descriptor emitted by a mode's trigger rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub effect: String,
    pub active: bool,
}

impl PowerUp {
    #[must_use]
    pub fn new(effect: &str) -> Self {
        Self {
            effect: effect.to_string(),
            active: true,
        }
    }
}

/// Whether a Maniac event helps or hurts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Power,
    Penalty,
}

/// One triggered Maniac effect, drawn from the combined catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeEvent {
    pub kind: EventKind,
    pub effect: String,
}

/// The core recurring entity: one platform's worth of round state.
///
/// Transitions are functional; every jump or choice produces a new
/// `RoundState` and the caller stores the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Current survived-round count within a run, 1-based.
    pub round: u32,
    pub mode: GameMode,
    pub shape: Shape,
    /// Number of distinct jump targets on the current platform, always >= 3.
    pub sides: u8,
    /// Sides a jump may land on without failing; subset of `0..sides`.
    pub safe_sides: SideSet,
    /// True exactly when the just-completed round is in the mode's table.
    pub milestone: bool,
    #[serde(default)]
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    /// Append-only ordered set of unlock identifiers.
    #[serde(default)]
    pub cosmetic_unlocks: Vec<String>,
    /// Peaceful's lone unsafe side, carried for the rendering layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danger_side: Option<u8>,
    /// Power-up triggered this round, if any. Not persisted across rounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_up: Option<PowerUp>,
    /// Maniac power/penalty events triggered this round.
    #[serde(default)]
    pub events: EventSet,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new_run(GameMode::Classic)
    }
}

impl RoundState {
    /// Baseline state at run start or after a mode switch: round 1, three
    /// sides, one known safe side. Milestone progress does not carry over.
    #[must_use]
    pub fn new_run(mode: GameMode) -> Self {
        let mut safe_sides = SideSet::new();
        safe_sides.push(0);
        Self {
            round: 1,
            mode,
            shape: Shape::from_sides(BASE_SIDES),
            sides: BASE_SIDES,
            safe_sides,
            milestone: false,
            phase: Phase::InRound,
            narration: None,
            cosmetic_unlocks: Vec::new(),
            danger_side: None,
            power_up: None,
            events: EventSet::new(),
        }
    }

    /// Whether the given side index survives a jump in this state.
    #[must_use]
    pub fn is_safe(&self, side: u8) -> bool {
        self.safe_sides.contains(&side)
    }

    /// Appends an unlock identifier if it is not already present.
    pub fn push_unlock(&mut self, unlock: &str) {
        if unlock.is_empty() || self.cosmetic_unlocks.iter().any(|u| u == unlock) {
            return;
        }
        self.cosmetic_unlocks.push(unlock.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip() {
        for mode in [
            GameMode::Classic,
            GameMode::Endless,
            GameMode::Maniac,
            GameMode::Peaceful,
        ] {
            assert_eq!(GameMode::from_name(mode.as_str()), mode);
        }
    }

    #[test]
    fn unknown_mode_name_falls_back_to_classic() {
        assert_eq!(GameMode::from_name("speedrun"), GameMode::Classic);
        assert_eq!(GameMode::from_name(""), GameMode::Classic);
        assert_eq!(GameMode::from_name("  Peaceful "), GameMode::Peaceful);
    }

    #[test]
    fn shape_labels_match_side_counts() {
        assert_eq!(Shape::from_sides(3), Shape::Tetrahedron);
        assert_eq!(Shape::from_sides(4), Shape::Cube);
        assert_eq!(Shape::from_sides(6), Shape::HexagonalPrism);
        assert_eq!(Shape::from_sides(8), Shape::OctagonalPrism);
        assert_eq!(Shape::from_sides(5), Shape::NGonPrism(5));
        assert_eq!(Shape::from_sides(7).to_string(), "7-gon Prism");
    }

    #[test]
    fn new_run_is_baseline() {
        let state = RoundState::new_run(GameMode::Maniac);
        assert_eq!(state.round, 1);
        assert_eq!(state.sides, 3);
        assert_eq!(state.safe_sides.as_slice(), &[0]);
        assert_eq!(state.phase, Phase::InRound);
        assert!(!state.milestone);
    }

    #[test]
    fn push_unlock_rejects_duplicates() {
        let mut state = RoundState::default();
        state.push_unlock("Glowing Aura");
        state.push_unlock("Glowing Aura");
        state.push_unlock("Shadow Cat");
        state.push_unlock("");
        assert_eq!(state.cosmetic_unlocks, vec!["Glowing Aura", "Shadow Cat"]);
    }

    #[test]
    fn round_state_serde_round_trips() {
        let mut state = RoundState::new_run(GameMode::Endless);
        state.power_up = Some(PowerUp::new("Shield"));
        state.danger_side = Some(2);
        let json = serde_json::to_string(&state).unwrap();
        let back: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
