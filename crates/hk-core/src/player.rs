//! Mutable player state: the part of the game that gets saved.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::class::{ClassType, Stats};

/// Name used before character creation.
pub const DEFAULT_PLAYER_NAME: &str = "Stranger";

/// Prefix shared by every map fragment item ID.
pub const MAP_FRAGMENT_PREFIX: &str = "map_fragment";

/// Flag recording that a location has been entered.
pub fn visited_flag(location_id: &str) -> String {
    format!("visited_{location_id}")
}

/// Flag recording that an enemy kind has been defeated.
pub fn killed_flag(enemy_id: &str) -> String {
    format!("killed_{enemy_id}")
}

/// The player's state for one play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Display name (uppercase after creation).
    pub name: String,
    /// Chosen class, `None` until creation completes.
    pub class: Option<ClassType>,
    /// Current attributes.
    pub stats: Stats,
    /// Item IDs in pickup order. Duplicates are allowed.
    pub inventory: Vec<String>,
    /// Where the player stands.
    pub current_location_id: String,
    /// Where the player came from, used by `return`.
    #[serde(default)]
    pub previous_location_id: Option<String>,
    /// Open-ended story, visit and kill flags.
    #[serde(default)]
    pub flags: HashMap<String, bool>,
    /// Combat victories, drives difficulty scaling.
    #[serde(default)]
    pub kill_count: u32,
    /// Guarding this turn.
    #[serde(default)]
    pub is_guarding: bool,
    /// Armor class bonus for the upcoming enemy turn.
    #[serde(default)]
    pub temp_defense_bonus: i32,
}

impl PlayerState {
    /// A fresh, classless player at the given location.
    pub fn new(location: impl Into<String>, stats: Stats) -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            class: None,
            stats,
            inventory: Vec::new(),
            current_location_id: location.into(),
            previous_location_id: None,
            flags: HashMap::new(),
            kill_count: 0,
            is_guarding: false,
            temp_defense_bonus: 0,
        }
    }

    /// Assign a class and overwrite stats with its base block.
    pub fn choose_class(&mut self, class: ClassType, stats: Stats) {
        self.class = Some(class);
        self.stats = stats;
    }

    /// Whether a flag is set to `true`.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Set a flag to `true`.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into(), true);
    }

    /// Whether the player has visited a location.
    pub fn has_visited(&self, location_id: &str) -> bool {
        self.has_flag(&visited_flag(location_id))
    }

    /// Whether the player holds at least one of an item.
    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|i| i == item_id)
    }

    /// Append an item. Duplicates are kept.
    pub fn add_item(&mut self, item_id: impl Into<String>) {
        self.inventory.push(item_id.into());
    }

    /// Number of map fragments held.
    pub fn map_fragments(&self) -> usize {
        self.inventory
            .iter()
            .filter(|i| i.starts_with(MAP_FRAGMENT_PREFIX))
            .count()
    }

    /// Drop the one-turn combat modifiers.
    pub fn clear_combat_modifiers(&mut self) {
        self.is_guarding = false;
        self.temp_defense_bonus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter_stats() -> Stats {
        Stats {
            hp: 160,
            max_hp: 160,
            mana: 0,
            max_mana: 0,
            stamina: 120,
            strength: 6,
            intellect: 0,
            agility: 2,
            defense: 4,
        }
    }

    #[test]
    fn new_player_defaults() {
        let p = PlayerState::new("town_square", fighter_stats());
        assert_eq!(p.name, "Stranger");
        assert!(p.class.is_none());
        assert_eq!(p.current_location_id, "town_square");
        assert!(p.previous_location_id.is_none());
        assert!(p.inventory.is_empty());
        assert_eq!(p.kill_count, 0);
    }

    #[test]
    fn flags() {
        let mut p = PlayerState::new("town_square", fighter_stats());
        assert!(!p.has_flag("visited_arcade"));
        p.set_flag(visited_flag("arcade"));
        assert!(p.has_flag("visited_arcade"));
        assert!(p.has_visited("arcade"));

        p.flags.insert("explicit_false".to_string(), false);
        assert!(!p.has_flag("explicit_false"));
    }

    #[test]
    fn inventory_keeps_duplicates() {
        let mut p = PlayerState::new("town_square", fighter_stats());
        p.add_item("med_kit");
        p.add_item("med_kit");
        assert_eq!(p.inventory.len(), 2);
        assert!(p.has_item("med_kit"));
        assert!(!p.has_item("scrap_blade"));
    }

    #[test]
    fn counts_map_fragments() {
        let mut p = PlayerState::new("town_square", fighter_stats());
        p.add_item("map_fragment_1");
        p.add_item("scrap_blade");
        p.add_item("map_fragment_3");
        assert_eq!(p.map_fragments(), 2);
    }

    #[test]
    fn clear_combat_modifiers() {
        let mut p = PlayerState::new("town_square", fighter_stats());
        p.is_guarding = true;
        p.temp_defense_bonus = 5;
        p.clear_combat_modifiers();
        assert!(!p.is_guarding);
        assert_eq!(p.temp_defense_bonus, 0);
    }

    #[test]
    fn flag_names() {
        assert_eq!(visited_flag("hospital"), "visited_hospital");
        assert_eq!(killed_flag("void_hawk"), "killed_void_hawk");
    }

    #[test]
    fn deserializes_without_transient_fields() {
        let json = r#"{
            "name": "ALICE",
            "class": "ROGUE",
            "stats": { "hp": 110, "max_hp": 110, "mana": 40, "max_mana": 40, "stamina": 100,
                       "strength": 3, "intellect": 2, "agility": 7, "defense": 2 },
            "inventory": ["lockpick_kit"],
            "current_location_id": "arcade"
        }"#;
        let p: PlayerState = serde_json::from_str(json).unwrap();
        assert_eq!(p.class, Some(ClassType::Rogue));
        assert!(!p.is_guarding);
        assert_eq!(p.temp_defense_bonus, 0);
        assert!(p.flags.is_empty());
    }
}
