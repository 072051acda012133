//! Centralized balance and tuning constants for Don't Jump rule logic.
//!
//! These values define the deterministic math for round progression.
//! Keeping them together ensures that difficulty can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! JSON assets.

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_FALL: &str = "log.fall";
pub(crate) const LOG_SURVIVED: &str = "log.survived";
pub(crate) const LOG_MILESTONE: &str = "log.milestone";
pub(crate) const LOG_POWER_UP: &str = "log.power-up";
pub(crate) const LOG_EVENTS: &str = "log.events";
pub(crate) const LOG_CHOICE_SKIP: &str = "log.choice.skip";
pub(crate) const LOG_CHOICE_UNLOCK: &str = "log.choice.unlock";
pub(crate) const LOG_CHOICE_ACCEPT: &str = "log.choice.accept";
pub(crate) const LOG_MODE_SWITCH: &str = "log.mode-switch";
pub(crate) const LOG_HIGH_SCORE: &str = "log.high-score";

// Shared platform tuning ---------------------------------------------------
pub(crate) const BASE_SIDES: u8 = 3;
pub(crate) const MIN_SAFE_COUNT: u8 = 1;
pub(crate) const SKIP_AHEAD_ROUNDS: u32 = 10;

// Classic tuning -----------------------------------------------------------
pub(crate) const CLASSIC_MAX_SIDES: u8 = 8;
pub(crate) const CLASSIC_SAFE_FLOOR_EARLY: u8 = 2;
pub(crate) const CLASSIC_SAFE_DECAY_START: u32 = 100;
pub(crate) const CLASSIC_SAFE_DECAY_INTERVAL: u32 = 10;
pub(crate) const CLASSIC_POWER_UP_INTERVAL: u32 = 20;
pub(crate) const CLASSIC_UNLOCK_INTERVAL: u32 = 20;

// Endless tuning -----------------------------------------------------------
pub(crate) const ENDLESS_MAX_SIDES: u8 = 12;
pub(crate) const ENDLESS_DISC_THRESHOLD: u8 = 8;
pub(crate) const ENDLESS_DISC_SIDES: u8 = 12;
pub(crate) const ENDLESS_SIDE_MILESTONES: [u32; 4] = [5, 10, 20, 40];
pub(crate) const ENDLESS_SIDE_INTERVAL: u32 = 50;
pub(crate) const ENDLESS_STARTING_SAFE: u8 = 2;
pub(crate) const ENDLESS_SAFE_REDUCE_INTERVAL: u32 = 50;
pub(crate) const ENDLESS_POWER_UP_MILESTONES: [u32; 4] = [5, 10, 20, 40];
pub(crate) const ENDLESS_POWER_UP_INTERVAL: u32 = 50;

// Maniac tuning ------------------------------------------------------------
pub(crate) const MANIAC_MAX_SIDES: u8 = 8;
pub(crate) const MANIAC_EARLY_ROUND_CAP: u32 = 20;
pub(crate) const MANIAC_MID_ROUND_CAP: u32 = 50;
pub(crate) const MANIAC_EARLY_SIDE_RANGE: (u8, u8) = (3, 6);
pub(crate) const MANIAC_MID_SIDE_RANGE: (u8, u8) = (4, MANIAC_MAX_SIDES);
pub(crate) const MANIAC_LATE_SIDE_RANGE: (u8, u8) = (3, MANIAC_MAX_SIDES);
pub(crate) const MANIAC_EARLY_SAFE_CAP: u8 = 3;
pub(crate) const MANIAC_MID_SAFE_CAP: u8 = 2;
pub(crate) const MANIAC_LATE_SAFE_CAP: u8 = 1;
pub(crate) const MANIAC_EVENT_INTERVAL: u32 = 5;

// Peaceful tuning ----------------------------------------------------------
pub(crate) const PEACEFUL_MAX_SIDES: u8 = 8;
pub(crate) const PEACEFUL_CYCLE_INTERVAL: u32 = 25;
pub(crate) const PEACEFUL_POWER_UP_INTERVAL: u32 = 15;

// Power-up and penalty catalogs --------------------------------------------
pub(crate) const CLASSIC_POWER_UPS: &[&str] =
    &["Double Points", "Slow Motion", "Safe Reveal", "Second Wind"];
pub(crate) const ENDLESS_POWER_UPS: &[&str] = &[
    "Shield",
    "Magnet",
    "Time Freeze",
    "Second Chance",
    "Score Surge",
];
pub(crate) const MANIAC_POWER_UPS: &[&str] = &["Shield", "Safe Reveal", "Slow Motion"];
pub(crate) const MANIAC_PENALTIES: &[&str] = &[
    "Invisible Platform",
    "Reversed Controls",
    "Shrinking Safe Zone",
];
pub(crate) const PEACEFUL_POWER_UPS: &[&str] = &["Glow Trail", "Butterfly Swarm", "Aurora Sky"];

// Cosmetic unlock identifiers ----------------------------------------------
pub(crate) const UNLOCK_GLOWING_AURA: &str = "Glowing Aura";
pub(crate) const UNLOCK_SHADOW_CAT: &str = "Shadow Cat";
