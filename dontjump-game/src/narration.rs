//! Narration selection and the existential-choice catalog.
//!
//! Only the selection contract lives here; playback and display belong to
//! the UI layer.
use rand::Rng;

/// Lines shown when a jump misses every safe side.
pub const FALL_NARRATIONS: &[&str] = &[
    "Ah\u{2026} another leap into the void. You\u{2019}re really starting to enjoy this, aren\u{2019}t you?",
    "Failure is a gentle teacher with sharp teeth.",
    "You knew it wasn\u{2019}t safe. You knew\u{2026} and yet you jumped.",
];

/// Canonical early-milestone lines, keyed by round. Later milestones fall
/// through to [`DEFAULT_MILESTONE_NARRATION`]; the table is deliberately not
/// extended past what the content enumerates.
pub const MILESTONE_NARRATIONS: &[(u32, &str)] = &[
    (
        5,
        "Five jumps and still standing. The void is impressed. Or maybe it isn\u{2019}t. Hard to tell.",
    ),
    (
        10,
        "Ten leaps of faith. Ten choices that meant nothing\u{2026} or everything.",
    ),
    (20, "Twenty jumps and no meaning yet? Curious."),
    (
        40,
        "You\u{2019}re climbing a ladder with no top. Good. Keep going.",
    ),
];

pub const DEFAULT_MILESTONE_NARRATION: &str = "You persist. The void persists. This is the dance.";

pub(crate) const SHADOW_CAT_NARRATION: &str =
    "You stare into the void. The void stares back. You unlock a Shadow Cat.";

/// Uniform random pick from the fall pool.
#[must_use]
pub fn select_fall_narration<R: Rng>(rng: &mut R) -> &'static str {
    FALL_NARRATIONS[rng.gen_range(0..FALL_NARRATIONS.len())]
}

/// Exact-match milestone lookup with the generic default as fallback.
#[must_use]
pub fn milestone_narration(round: u32) -> &'static str {
    MILESTONE_NARRATIONS
        .iter()
        .find(|(r, _)| *r == round)
        .map_or(DEFAULT_MILESTONE_NARRATION, |(_, text)| text)
}

/// One option in the existential-choice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistentialChoice {
    pub label: &'static str,
    pub description: &'static str,
}

/// The choice set shown at milestones.
pub const EXISTENTIAL_CHOICES: &[ExistentialChoice] = &[
    ExistentialChoice {
        label: "Accept fate",
        description: "Keep playing as normal.",
    },
    ExistentialChoice {
        label: "Embrace oblivion",
        description: "Skip ahead 10 levels but random safe spots.",
    },
    ExistentialChoice {
        label: "Question meaning",
        description: "Narration deep dive + bonus cosmetic unlock.",
    },
];

/// Mechanical branch taken when a choice resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoiceKind {
    /// No-op: clear the milestone prompt and continue.
    #[default]
    AcceptFate,
    /// Skip the round counter forward and re-derive the platform.
    EmbraceOblivion,
    /// Unlock a cosmetic and show flavor narration.
    QuestionMeaning,
}

impl ChoiceKind {
    /// Resolve a choice label. Unrecognized labels behave like the default
    /// "accept" option.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Embrace oblivion" => Self::EmbraceOblivion,
            "Question meaning" => Self::QuestionMeaning,
            _ => Self::AcceptFate,
        }
    }
}
