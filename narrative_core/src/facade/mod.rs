//! Game facade - the operations the story calls to create, save and load players.
//!
//! Composes the character factory, the session registry and the autosave
//! subscriber. Nothing here returns an error: failures are logged and
//! reported as `false`.
//!
//! Players join and leave the registry only through the facade, so the
//! roster autosave writes always matches the registered players.

use std::rc::Rc;
use tracing::{info, warn};

use crate::config::GameConfig;
use game_rules::{
    creator_for, validate_name, AutoSave, GameSession, MoralityChoice, Observable, Observer,
    Player, PlayerSlot, SaveStore,
};

/// Entry point for everything the narrative flow does to game state.
#[derive(Debug)]
pub struct GameFacade {
    session: GameSession,
    autosave: Rc<AutoSave>,
}

impl GameFacade {
    pub fn new(session: GameSession, store: SaveStore) -> Self {
        Self {
            session,
            autosave: Rc::new(AutoSave::new(store)),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            GameSession::with_lives(config.starting_lives),
            SaveStore::new(config.save_path.clone()),
        )
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable access to the first registered player bound to `slot`.
    pub fn player_mut(&mut self, slot: PlayerSlot) -> Option<&mut Player> {
        self.session.player_mut(slot)
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        self.session.players_mut()
    }

    pub fn set_level_index(&mut self, level_index: u32) {
        self.session.level_index = level_index;
    }

    pub fn autosave(&self) -> &AutoSave {
        &self.autosave
    }

    fn subscriber(&self) -> Rc<dyn Observer<Player>> {
        self.autosave.clone()
    }

    /// Validate the name, build the player for `slot`, register it, hook up
    /// autosave and apply the morality bonus (which triggers the first save).
    pub fn create_full_character(
        &mut self,
        slot: PlayerSlot,
        raw_name: &str,
        choice: Option<MoralityChoice>,
    ) -> &Player {
        let name = validate_name(raw_name, slot);
        let choice = choice.unwrap_or_default();
        let subscriber = self.subscriber();

        let player = self
            .session
            .add_player(creator_for(slot).create_character(&name, 0));
        self.autosave.track(player);
        player.attach(subscriber);
        player.adjust_morality(choice.bonus());

        info!(
            slot = %slot,
            name = %player.name(),
            choice = %choice,
            morality = player.morality(),
            "character created"
        );
        player
    }

    /// Whether a save file is present.
    pub fn save_exists(&self) -> bool {
        self.autosave.store().exists()
    }

    /// Replace the registered players with the ones in the save file.
    ///
    /// Returns `false`, leaving the session untouched, when there is no save
    /// file or it cannot be parsed.
    pub fn load_from_disk(&mut self) -> bool {
        let snapshots = match self.autosave.store().load() {
            Ok(Some(snapshots)) => snapshots,
            Ok(None) => {
                info!("no save file found");
                return false;
            }
            Err(e) => {
                warn!("could not load save file: {e}");
                return false;
            }
        };

        self.session.clear_players();
        self.autosave.untrack_all();
        for snapshot in &snapshots {
            let mut player = creator_for(snapshot.slot()).create_character(snapshot.name(), 0);
            player.restore(snapshot);
            self.autosave.track(&player);
            player.attach(self.subscriber());
            self.session.add_player(player);
        }
        info!(players = snapshots.len(), "save file loaded");
        self.autosave.replace_history(snapshots);
        true
    }

    /// Roll every registered player back to its latest autosave snapshot.
    ///
    /// Players are matched to history entries by name, newest entry first.
    /// Returns `false` when no history is held.
    pub fn load_last_snapshot(&mut self) -> bool {
        if !self.autosave.has_history() {
            info!("no snapshot history to restore from");
            return false;
        }

        for player in self.session.players_mut() {
            if let Some(snapshot) = self.autosave.latest_for_name(player.name()) {
                player.restore(&snapshot);
                info!(name = %player.name(), "restored from snapshot");
            }
        }
        true
    }

    /// Clear the session registry and delete the save file.
    pub fn reset_session(&mut self) -> bool {
        self.session.reset();
        self.autosave.untrack_all();
        self.autosave.clear_history();
        match self.autosave.store().clear() {
            Ok(_) => {
                info!("save data cleared");
                true
            }
            Err(e) => {
                warn!("could not delete save file: {e}");
                false
            }
        }
    }
}
