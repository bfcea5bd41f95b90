//! Playable classes and the stat block they start with.

use serde::{Deserialize, Serialize};

/// A playable character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassType {
    /// Heavy melee damage and the strongest guard.
    Fighter,
    /// Fragile spellcaster with fireball and shield.
    Mage,
    /// Agile striker whose every hit is a sneak attack.
    Rogue,
}

impl ClassType {
    /// All playable classes in menu order.
    pub const ALL: [ClassType; 3] = [Self::Fighter, Self::Mage, Self::Rogue];

    /// Parse a class name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fighter" => Some(Self::Fighter),
            "mage" => Some(Self::Mage),
            "rogue" => Some(Self::Rogue),
            _ => None,
        }
    }

    /// The uppercase display name used in the terminal.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fighter => "FIGHTER",
            Self::Mage => "MAGE",
            Self::Rogue => "ROGUE",
        }
    }
}

impl std::fmt::Display for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A character's numeric attributes.
///
/// `hp` and `mana` are floored at 0 by the combat engine; nothing enforces
/// the `max_*` ceilings except healing and class selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Current hit points.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Current mana.
    pub mana: i32,
    /// Maximum mana.
    pub max_mana: i32,
    /// Stamina (advisory).
    pub stamina: i32,
    /// Melee attack and damage driver.
    pub strength: i32,
    /// Spell attack driver.
    pub intellect: i32,
    /// Flee chance, and armor class for rogues.
    pub agility: i32,
    /// Flat damage reduction and armor class contributor.
    pub defense: i32,
}

impl Stats {
    /// Restore hp and mana to their maximums.
    pub fn restore(&mut self) {
        self.hp = self.max_hp;
        self.mana = self.max_mana;
    }

    /// Whether hp is below its maximum.
    pub fn is_wounded(&self) -> bool {
        self.hp < self.max_hp
    }
}
