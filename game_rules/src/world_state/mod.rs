//! Session state - the authoritative holder of level, lives and players.

mod levels;

pub use levels::*;

use tracing::info;

use crate::entities::{Player, PlayerSlot};

/// Level a fresh session starts on (1-based).
pub const FIRST_LEVEL: u32 = 1;

/// Lives a fresh session starts with unless configured otherwise.
pub const DEFAULT_LIVES: u32 = 5;

/// The game session registry.
///
/// One instance per running game, constructed explicitly and handed to
/// whatever needs it. `players[0]` is slot 1, `players[1]` slot 2.
#[derive(Debug)]
pub struct GameSession {
    /// Current level, starting at 1.
    pub level_index: u32,
    pub lives_remaining: u32,
    players: Vec<Player>,
    starting_lives: u32,
}

impl GameSession {
    /// Create a new session with default lives.
    pub fn new() -> Self {
        Self::with_lives(DEFAULT_LIVES)
    }

    /// Create a new session starting with `lives`.
    pub fn with_lives(lives: u32) -> Self {
        Self {
            level_index: FIRST_LEVEL,
            lives_remaining: lives,
            players: Vec::new(),
            starting_lives: lives,
        }
    }

    /// Back to level 1, full lives, no players.
    pub fn reset(&mut self) {
        self.level_index = FIRST_LEVEL;
        self.lives_remaining = self.starting_lives;
        self.players.clear();
        info!("session data reset");
    }

    /// Register a player at the end of the list.
    pub fn add_player(&mut self, player: Player) -> &mut Player {
        self.players.push(player);
        let last = self.players.len() - 1;
        &mut self.players[last]
    }

    /// Drop every registered player.
    pub fn clear_players(&mut self) {
        self.players.clear();
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// First registered player bound to `slot`.
    pub fn player(&self, slot: PlayerSlot) -> Option<&Player> {
        self.players.iter().find(|p| p.slot() == slot)
    }

    /// Mutable access to the first player bound to `slot`.
    pub fn player_mut(&mut self, slot: PlayerSlot) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.slot() == slot)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new();
        assert_eq!(session.level_index, 1);
        assert_eq!(session.lives_remaining, 5);
        assert!(session.players().is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = GameSession::with_lives(3);
        session.level_index = 4;
        session.lives_remaining = 1;
        session.add_player(Player::new(PlayerSlot::Player1, "Ada", 8));

        session.reset();

        assert_eq!(session.level_index, 1);
        assert_eq!(session.lives_remaining, 3);
        assert!(session.players().is_empty());
    }

    #[test]
    fn test_player_lookup_by_slot() {
        let mut session = GameSession::new();
        session.add_player(Player::new(PlayerSlot::Player1, "Ada", 8));
        session.add_player(Player::new(PlayerSlot::Player2, "Bo", 3));

        assert_eq!(session.player(PlayerSlot::Player2).map(Player::name), Some("Bo"));
        assert_eq!(session.players()[0].name(), "Ada");

        if let Some(ada) = session.player_mut(PlayerSlot::Player1) {
            ada.apply_damage(30);
        }
        assert_eq!(session.players()[0].hp(), 70);
    }
}
