//! Entity definitions: players, their inventories, and the plumbing that lets
//! other systems observe and capture them.

mod components;
mod factory;
mod observer;
mod player;
mod snapshot;

pub use components::*;
pub use factory::*;
pub use observer::*;
pub use player::*;
pub use snapshot::*;

use uuid::Uuid;

/// Unique identifier for entities that live in the session.
///
/// Identifiers are in-memory only; the save format does not carry them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two co-op roles a player fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl PlayerSlot {
    /// Slot number as shown to players (1 or 2).
    pub fn number(&self) -> u8 {
        match self {
            PlayerSlot::Player1 => 1,
            PlayerSlot::Player2 => 2,
        }
    }

    /// Slot for a 1-based number, if there is one.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerSlot::Player1),
            2 => Some(PlayerSlot::Player2),
            _ => None,
        }
    }

    /// Type tag written to the save file.
    pub fn tag(&self) -> &'static str {
        match self {
            PlayerSlot::Player1 => "Player1",
            PlayerSlot::Player2 => "Player2",
        }
    }

    /// Parse a save-file type tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Player1" => Some(PlayerSlot::Player1),
            "Player2" => Some(PlayerSlot::Player2),
            _ => None,
        }
    }

    /// Name given to a player who did not type one.
    pub fn default_name(&self) -> String {
        format!("Player{}", self.number())
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_tags() {
        assert_eq!(PlayerSlot::Player1.tag(), "Player1");
        assert_eq!(PlayerSlot::from_tag("Player2"), Some(PlayerSlot::Player2));
        assert_eq!(PlayerSlot::from_tag("Player3"), None);
        assert_eq!(PlayerSlot::from_number(1), Some(PlayerSlot::Player1));
        assert_eq!(PlayerSlot::from_number(0), None);
    }

    #[test]
    fn test_default_name() {
        assert_eq!(PlayerSlot::Player1.default_name(), "Player1");
        assert_eq!(PlayerSlot::Player2.default_name(), "Player2");
    }

    #[test]
    fn test_entity_ids_are_unique() {
        assert_ne!(EntityId::new(), EntityId::new());
    }
}
