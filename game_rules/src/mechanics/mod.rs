//! Game mechanics: hit point limits, name rules and morality choices.

use crate::entities::PlayerSlot;

/// Maximum (and starting) hit points of every player.
pub const MAX_HP: i32 = 100;

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 12;

/// Shortest name the name-entry prompt will submit, in characters.
pub const MIN_SUBMIT_NAME_LEN: usize = 2;

/// Normalize a typed name for `slot`.
///
/// Surrounding whitespace is trimmed, blank input becomes `"Player{slot}"`,
/// and the result is cut to [`MAX_NAME_LEN`] characters.
pub fn validate_name(raw: &str, slot: PlayerSlot) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return slot.default_name();
    }
    let truncated: String = trimmed.chars().take(MAX_NAME_LEN).collect();
    truncated.trim_end().to_string()
}

/// Whether a typed name is long enough to submit.
pub fn can_submit_name(raw: &str) -> bool {
    raw.chars().count() >= MIN_SUBMIT_NAME_LEN
}

/// The answer to "what kind of person are you?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoralityChoice {
    HeroAltruist,
    MercenaryEgoist,
    #[default]
    IndifferentSoul,
}

impl MoralityChoice {
    /// Morality added when this choice is made.
    pub fn bonus(&self) -> i32 {
        match self {
            MoralityChoice::HeroAltruist => 8,
            MoralityChoice::MercenaryEgoist => 3,
            MoralityChoice::IndifferentSoul => 5,
        }
    }

    /// Parse free text. Unknown or absent input is [`MoralityChoice::IndifferentSoul`].
    pub fn parse(input: Option<&str>) -> Self {
        let normalized = input
            .map(|s| s.trim().to_lowercase().replace([' ', '_'], "-"))
            .unwrap_or_default();
        match normalized.as_str() {
            "hero-altruist" => MoralityChoice::HeroAltruist,
            "mercenary-egoist" => MoralityChoice::MercenaryEgoist,
            _ => MoralityChoice::IndifferentSoul,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoralityChoice::HeroAltruist => "hero-altruist",
            MoralityChoice::MercenaryEgoist => "mercenary-egoist",
            MoralityChoice::IndifferentSoul => "indifferent-soul",
        }
    }
}

impl std::fmt::Display for MoralityChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
