//! AutoSave: rewrites the whole save file whenever a tracked player changes.

use std::cell::RefCell;
use tracing::{debug, error};

use super::SaveStore;
use crate::entities::{EntityId, Observer, ObserverId, Player, PlayerSnapshot};

#[derive(Debug, Default)]
struct AutoSaveState {
    /// Latest snapshot of every registered player, in registration order.
    roster: Vec<(EntityId, PlayerSnapshot)>,
    /// Every snapshot taken on notification, oldest first.
    history: Vec<PlayerSnapshot>,
}

/// Subscriber that persists the full roster on every change.
///
/// Writes happen inline on the notifying call. A failed write is logged and
/// dropped; the in-memory change that triggered it stands.
#[derive(Debug)]
pub struct AutoSave {
    id: ObserverId,
    store: SaveStore,
    state: RefCell<AutoSaveState>,
}

impl AutoSave {
    pub fn new(store: SaveStore) -> Self {
        Self {
            id: ObserverId::new(),
            store,
            state: RefCell::new(AutoSaveState::default()),
        }
    }

    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    /// Add `player` to the saved roster (or refresh its entry) without writing.
    pub fn track(&self, player: &Player) {
        self.state
            .borrow_mut()
            .upsert(player.id(), player.snapshot());
    }

    /// Forget every tracked player.
    pub fn untrack_all(&self) {
        self.state.borrow_mut().roster.clear();
    }

    pub fn tracked_count(&self) -> usize {
        self.state.borrow().roster.len()
    }

    /// Snapshots that would be written right now.
    pub fn roster(&self) -> Vec<PlayerSnapshot> {
        self.state.borrow().roster_snapshots()
    }

    pub fn history_len(&self) -> usize {
        self.state.borrow().history.len()
    }

    pub fn has_history(&self) -> bool {
        !self.state.borrow().history.is_empty()
    }

    /// Replace the history, e.g. with what was just loaded from disk.
    pub fn replace_history(&self, history: Vec<PlayerSnapshot>) {
        self.state.borrow_mut().history = history;
    }

    pub fn clear_history(&self) {
        self.state.borrow_mut().history.clear();
    }

    /// Most recent history entry whose name is `name`.
    pub fn latest_for_name(&self, name: &str) -> Option<PlayerSnapshot> {
        self.state
            .borrow()
            .history
            .iter()
            .rev()
            .find(|snapshot| snapshot.name() == name)
            .cloned()
    }

    /// Write the current roster. Returns `false` if the write failed.
    pub fn flush(&self) -> bool {
        let snapshots = self.roster();
        match self.store.save(&snapshots) {
            Ok(()) => {
                debug!(
                    path = %self.store.path().display(),
                    players = snapshots.len(),
                    "autosave written"
                );
                true
            }
            Err(e) => {
                error!(path = %self.store.path().display(), "autosave failed: {e}");
                false
            }
        }
    }
}

impl AutoSaveState {
    fn upsert(&mut self, id: EntityId, snapshot: PlayerSnapshot) {
        match self.roster.iter_mut().find(|(tracked, _)| *tracked == id) {
            Some((_, existing)) => *existing = snapshot,
            None => self.roster.push((id, snapshot)),
        }
    }

    fn roster_snapshots(&self) -> Vec<PlayerSnapshot> {
        self.roster.iter().map(|(_, s)| s.clone()).collect()
    }
}

impl Observer<Player> for AutoSave {
    fn id(&self) -> ObserverId {
        self.id
    }

    fn on_change(&self, subject: &Player) {
        let snapshot = subject.snapshot();
        {
            let mut state = self.state.borrow_mut();
            state.history.push(snapshot.clone());
            state.upsert(subject.id(), snapshot);
        }
        self.flush();
    }
}
