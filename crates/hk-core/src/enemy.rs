//! Enemy templates.

use serde::{Deserialize, Serialize};

/// A static enemy definition.
///
/// Combat never mutates a template; encounters fight a scaled copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    /// Unique ID (also the key used for `killed_<id>` flags).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Starting hit points.
    pub hp: i32,
    /// Maximum hit points. Values above the boss threshold opt out of scaling.
    pub max_hp: i32,
    /// Damage dice formula such as `"2d6"`.
    pub damage_dice: String,
    /// Flat bonus added to the enemy's d20 attack roll.
    pub attack_bonus: i32,
    /// Flat damage reduction, also added to the enemy's armor class.
    pub defense: i32,
    /// Flavor text.
    pub description: String,
    /// Aggressiveness weight (advisory).
    pub aggressiveness: f64,
    /// Experience awarded on victory.
    pub xp_reward: u32,
    /// Whether the player may attempt to flee.
    pub can_flee: bool,
    /// Item added to the player's inventory on victory.
    #[serde(default)]
    pub drop_item: Option<String>,
}
