//! The player entity.

use std::rc::Rc;

use super::{
    EntityId, Inventory, Item, Observable, Observer, ObserverId, PlayerSlot, PlayerSnapshot,
    Subscribers,
};
use crate::mechanics::MAX_HP;

/// A player character bound to one of the two slots.
///
/// Changes to morality, hit points and inventory notify every attached
/// observer. Hit points are always kept within `0..=max_hp`.
#[derive(Debug)]
pub struct Player {
    id: EntityId,
    slot: PlayerSlot,
    name: String,
    morality: i32,
    hp: i32,
    max_hp: i32,
    inventory: Inventory,
    observers: Subscribers<Player>,
}

impl Player {
    /// Create a player at full health with an empty inventory.
    pub fn new(slot: PlayerSlot, name: impl Into<String>, morality: i32) -> Self {
        Self {
            id: EntityId::new(),
            slot,
            name: name.into(),
            morality,
            hp: MAX_HP,
            max_hp: MAX_HP,
            inventory: Inventory::new(),
            observers: Subscribers::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn morality(&self) -> i32 {
        self.morality
    }

    pub fn set_morality(&mut self, morality: i32) {
        self.morality = morality;
        self.notify();
    }

    /// Shift morality by `delta`.
    pub fn adjust_morality(&mut self, delta: i32) {
        self.set_morality(self.morality.saturating_add(delta));
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Set hit points, clamped into `0..=max_hp`.
    ///
    /// Observers are notified even when the requested value was out of range.
    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp.clamp(0, self.max_hp);
        self.notify();
    }

    pub fn apply_damage(&mut self, amount: i32) {
        self.set_hp(self.hp.saturating_sub(amount));
    }

    pub fn heal(&mut self, amount: i32) {
        self.set_hp(self.hp.saturating_add(amount));
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Append an item to the inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.add(item);
        self.notify();
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Capture the persisted fields.
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot::new(
            self.slot,
            self.name.clone(),
            self.morality,
            self.hp,
            self.max_hp,
            self.inventory.item_names(),
        )
    }

    /// Overwrite the persisted fields from a snapshot, then notify.
    ///
    /// Items come back by name only; see [`Item::from_name`].
    pub fn restore(&mut self, snapshot: &PlayerSnapshot) {
        self.name = snapshot.name().to_string();
        self.morality = snapshot.morality();
        self.max_hp = snapshot.max_hp().max(0);
        self.hp = snapshot.hp().clamp(0, self.max_hp);
        self.inventory = snapshot
            .inventory()
            .iter()
            .map(|name| Item::from_name(name.as_str()))
            .collect();
        self.notify();
    }
}

impl Observable for Player {
    fn attach(&mut self, observer: Rc<dyn Observer<Player>>) -> bool {
        self.observers.attach(observer)
    }

    fn detach(&mut self, id: ObserverId) -> bool {
        self.observers.detach(id)
    }

    fn notify(&self) {
        self.observers.notify(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ItemCategory;
    use std::cell::RefCell;

    struct Recorder {
        id: ObserverId,
        seen: RefCell<Vec<(i32, i32)>>,
    }

    impl Recorder {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                id: ObserverId::new(),
                seen: RefCell::new(Vec::new()),
            })
        }
    }

    impl Observer<Player> for Recorder {
        fn id(&self) -> ObserverId {
            self.id
        }

        fn on_change(&self, subject: &Player) {
            self.seen
                .borrow_mut()
                .push((subject.morality(), subject.hp()));
        }
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(PlayerSlot::Player1, "Ada", 0);
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.hp(), 100);
        assert_eq!(player.max_hp(), 100);
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn test_damage_clamps_to_zero() {
        let mut player = Player::new(PlayerSlot::Player1, "Ada", 0);
        player.apply_damage(150);
        assert_eq!(player.hp(), 0);
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut player = Player::new(PlayerSlot::Player2, "Bo", 0);
        player.set_hp(50);
        player.heal(1000);
        assert_eq!(player.hp(), 100);
    }

    #[test]
    fn test_hp_clamped_for_extreme_deltas() {
        let mut player = Player::new(PlayerSlot::Player1, "Ada", 0);
        for delta in [i32::MIN, -1000, -101, -1, 0, 1, 99, 101, i32::MAX] {
            player.heal(delta);
            assert!((0..=player.max_hp()).contains(&player.hp()));
            player.apply_damage(delta);
            assert!((0..=player.max_hp()).contains(&player.hp()));
        }
    }

    #[test]
    fn test_out_of_range_hp_still_notifies() {
        let recorder = Recorder::new();
        let mut player = Player::new(PlayerSlot::Player1, "Ada", 0);
        player.attach(recorder.clone());

        player.set_hp(500);

        assert_eq!(*recorder.seen.borrow(), vec![(0, 100)]);
    }

    #[test]
    fn test_morality_change_notifies() {
        let recorder = Recorder::new();
        let mut player = Player::new(PlayerSlot::Player1, "Ada", 0);
        player.attach(recorder.clone());

        player.adjust_morality(8);
        player.set_morality(3);

        assert_eq!(*recorder.seen.borrow(), vec![(8, 100), (3, 100)]);
    }

    #[test]
    fn test_double_attach_notifies_once() {
        let recorder = Recorder::new();
        let mut player = Player::new(PlayerSlot::Player1, "Ada", 0);
        assert!(player.attach(recorder.clone()));
        assert!(!player.attach(recorder.clone()));

        player.set_hp(10);

        assert_eq!(recorder.seen.borrow().len(), 1);
        assert_eq!(player.observer_count(), 1);
    }

    #[test]
    fn test_detached_observer_is_silent() {
        let recorder = Recorder::new();
        let mut player = Player::new(PlayerSlot::Player1, "Ada", 0);
        player.attach(recorder.clone());
        assert!(player.detach(recorder.id()));

        player.set_hp(10);

        assert!(recorder.seen.borrow().is_empty());
    }

    #[test]
    fn test_restore_round_trip_is_lossy_for_items() {
        let mut original = Player::new(PlayerSlot::Player2, "Bo", 3);
        original.set_hp(42);
        original.add_item(Item::new("Sword", ItemCategory::Attack, 12));
        original.add_item(Item::new("Potion", ItemCategory::Heal, 30));
        let snapshot = original.snapshot();

        let mut restored = Player::new(PlayerSlot::Player2, "someone else", 0);
        restored.restore(&snapshot);

        assert_eq!(restored.name(), "Bo");
        assert_eq!(restored.morality(), 3);
        assert_eq!(restored.hp(), 42);
        assert_eq!(restored.max_hp(), 100);
        assert_eq!(restored.inventory().item_names(), vec!["Sword", "Potion"]);

        // Category and value are not part of the snapshot.
        for item in restored.inventory() {
            assert_eq!(item.category(), ItemCategory::Utility);
            assert_eq!(item.value(), 0);
        }
        assert_ne!(restored.inventory(), original.inventory());
    }

    #[test]
    fn test_restore_notifies() {
        let recorder = Recorder::new();
        let mut player = Player::new(PlayerSlot::Player1, "Ada", 0);
        let snapshot = Player::new(PlayerSlot::Player1, "Ada", 9).snapshot();
        player.attach(recorder.clone());

        player.restore(&snapshot);

        assert_eq!(*recorder.seen.borrow(), vec![(9, 100)]);
    }
}
