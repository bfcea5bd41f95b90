//! Locations, their exits, and the story triggers attached to them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::class::ClassType;
use crate::player::PlayerState;

/// Flag set once a mage has calmed the radio tower.
pub const TOWER_STABILIZED_FLAG: &str = "tower_stabilized";

/// A node in the world graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Full description, shown on first visit.
    pub description: String,
    /// Short description, shown on later visits when present.
    #[serde(default)]
    pub short_description: Option<String>,
    /// Marks an unfinished zone that can never be entered.
    #[serde(default)]
    pub is_construction: bool,
    /// Direction name to destination location ID, in declaration order.
    pub exits: IndexMap<String, String>,
    /// Direction name to lock guarding that direction.
    #[serde(default)]
    pub locked_exits: IndexMap<String, LockedExit>,
    /// Item IDs lying here. Taking an item does not remove it.
    #[serde(default)]
    pub items: Vec<String>,
    /// Guardian enemy fought on every arrival until killed.
    #[serde(default)]
    pub enemy_id: Option<String>,
    /// Random encounter table, rolled in order on arrival.
    #[serde(default)]
    pub random_encounters: Vec<RandomEncounter>,
    /// Story trigger evaluated on arrival when no encounter fires.
    #[serde(default)]
    pub trigger: Option<LocationTrigger>,
}

impl Location {
    /// Exit directions that are not guarded by a lock.
    pub fn open_exits(&self) -> impl Iterator<Item = &str> {
        self.exits
            .keys()
            .filter(|dir| !self.locked_exits.contains_key(*dir))
            .map(String::as_str)
    }

    /// The description to show, given whether this is the first visit.
    pub fn description_for(&self, first_visit: bool) -> &str {
        match (&self.short_description, first_visit) {
            (Some(short), false) => short,
            _ => &self.description,
        }
    }
}

/// A lock on an exit.
///
/// A lock with neither `required_class` nor `unlock_flag` bars the exit
/// permanently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedExit {
    /// Why the way is barred.
    pub reason: String,
    /// A class that may force its way through.
    #[serde(default)]
    pub required_class: Option<ClassType>,
    /// A player flag that opens the lock.
    #[serde(default)]
    pub unlock_flag: Option<String>,
}

/// One row of a random encounter table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomEncounter {
    /// Enemy template to spawn.
    pub enemy_id: String,
    /// Probability in `[0, 1]`.
    pub chance: f64,
}

/// A read-only story hook evaluated against the player on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationTrigger {
    /// Restores hp and mana when the player is wounded.
    SafeZone,
    /// Lets a mage stabilize the tower once.
    MageTower,
}

impl LocationTrigger {
    /// Decide which event (if any) fires. Never mutates the player.
    pub fn evaluate(&self, player: &PlayerState) -> Option<TriggerEvent> {
        match self {
            Self::SafeZone => player.stats.is_wounded().then_some(TriggerEvent::Healed),
            Self::MageTower => (player.class == Some(ClassType::Mage)
                && !player.has_flag(TOWER_STABILIZED_FLAG))
            .then_some(TriggerEvent::MageTowerFix),
        }
    }
}

/// The event tag produced by a trigger and applied by the exploration engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    /// The player was restored to full.
    Healed,
    /// The mage stabilized the radio tower.
    MageTowerFix,
}

impl TriggerEvent {
    /// The event's tag string.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Healed => "healed",
            Self::MageTowerFix => "mage_tower_fix",
        }
    }
}
