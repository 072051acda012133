//! Display-layer settings and debug post-processing hooks.
//!
//! Nothing here feeds back into the rule engine. The toggles are applied by
//! the rendering layer after a transition resolves, so replays stay
//! deterministic regardless of what the player has switched on.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::state::{RoundState, Shape};

/// Player-facing display toggles, persisted alongside the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DisplaySettings {
    /// Reveal the safe-side indices in the UI. Rendering hint only.
    #[serde(default)]
    pub debug_show_safe_sides: bool,
    /// Re-skin the platform with a random shape after every jump. Purely
    /// cosmetic; side-count and safe-set are untouched.
    #[serde(default)]
    pub randomize_shape_after_jump: bool,
}

/// Cosmetic shape reroll applied after a transition when
/// [`DisplaySettings::randomize_shape_after_jump`] is on.
pub fn randomize_platform_shape<R: Rng>(state: &mut RoundState, rng: &mut R) {
    let sides = rng.gen_range(3..=8);
    state.shape = Shape::from_sides(sides);
}
