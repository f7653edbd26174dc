//! Player snapshots and their on-disk record format.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use super::PlayerSlot;
use crate::mechanics::MAX_HP;

/// Immutable capture of one player's persisted fields.
///
/// Serialized as one element of the save file:
/// `{"type": "Player1", "nome": .., "moralita": .., "hp": .., "max_hp": .., "inventario": [..]}`.
/// `nome` and `moralita` are required; `hp`/`max_hp` default to full health and
/// `inventario` to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    #[serde(
        rename = "type",
        default = "default_slot",
        serialize_with = "serialize_slot",
        deserialize_with = "deserialize_slot"
    )]
    slot: PlayerSlot,

    #[serde(rename = "nome")]
    name: String,

    #[serde(rename = "moralita")]
    morality: i32,

    #[serde(default = "default_hp")]
    hp: i32,

    #[serde(default = "default_hp")]
    max_hp: i32,

    /// Item names only.
    #[serde(rename = "inventario", default)]
    inventory: Vec<String>,
}

impl PlayerSnapshot {
    pub fn new(
        slot: PlayerSlot,
        name: impl Into<String>,
        morality: i32,
        hp: i32,
        max_hp: i32,
        inventory: Vec<String>,
    ) -> Self {
        Self {
            slot,
            name: name.into(),
            morality,
            hp,
            max_hp,
            inventory,
        }
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

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Item names, in inventory order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }
}

fn default_slot() -> PlayerSlot {
    PlayerSlot::Player1
}

fn default_hp() -> i32 {
    MAX_HP
}

fn serialize_slot<S: Serializer>(slot: &PlayerSlot, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(slot.tag())
}

/// Missing, null or unknown tags fall back to slot 1.
fn deserialize_slot<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PlayerSlot, D::Error> {
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    let tag = raw.as_ref().and_then(|value| value.as_str());
    match tag.and_then(PlayerSlot::from_tag) {
        Some(slot) => Ok(slot),
        None => {
            warn!(tag = ?raw, "unrecognized player type tag, defaulting to Player1");
            Ok(PlayerSlot::Player1)
        }
    }
}
