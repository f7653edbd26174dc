//! Character creation, one strategy per player slot.

use super::{Player, PlayerSlot};

/// Uniform creation contract.
///
/// `name` must already be validated (see [`crate::mechanics::validate_name`]).
pub trait CharacterCreator {
    fn slot(&self) -> PlayerSlot;

    fn create_character(&self, name: &str, morality: i32) -> Player {
        Player::new(self.slot(), name, morality)
    }
}

/// Creates players for slot 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player1Creator;

impl CharacterCreator for Player1Creator {
    fn slot(&self) -> PlayerSlot {
        PlayerSlot::Player1
    }
}

/// Creates players for slot 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player2Creator;

impl CharacterCreator for Player2Creator {
    fn slot(&self) -> PlayerSlot {
        PlayerSlot::Player2
    }
}

/// Pick the creator bound to `slot`.
pub fn creator_for(slot: PlayerSlot) -> &'static dyn CharacterCreator {
    match slot {
        PlayerSlot::Player1 => &Player1Creator,
        PlayerSlot::Player2 => &Player2Creator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creators_bind_slot() {
        let first = Player1Creator.create_character("Ada", 0);
        let second = Player2Creator.create_character("Bo", 4);

        assert_eq!(first.slot(), PlayerSlot::Player1);
        assert_eq!(second.slot(), PlayerSlot::Player2);
        assert_eq!(second.morality(), 4);
        assert_eq!(second.hp(), 100);
        assert_eq!(second.max_hp(), 100);
        assert!(second.inventory().is_empty());
    }

    #[test]
    fn test_creator_for_slot() {
        for slot in [PlayerSlot::Player1, PlayerSlot::Player2] {
            let player = creator_for(slot).create_character("Name", 0);
            assert_eq!(player.slot(), slot);
            assert_eq!(player.observer_count(), 0);
        }
    }
}
