//! Enemy instances spawned for a single encounter.

use hk_core::EnemyTemplate;
use serde::{Deserialize, Serialize};

use crate::dice::DiceFormula;
use crate::scaling;

/// A scaled copy of an enemy template, alive for one fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Runtime ID. Guardians keep the template ID; random spawns get a unique one.
    pub instance_id: String,
    /// The template this was spawned from (drives kill flags and art).
    pub template_id: String,
    /// Display name.
    pub name: String,
    /// Remaining hit points, never below 0.
    pub hp: i32,
    /// Hit points at spawn.
    pub max_hp: i32,
    /// Damage dice.
    pub damage: DiceFormula,
    /// Added to the d20 attack roll.
    pub attack_bonus: i32,
    /// Damage reduction and armor class contribution.
    pub defense: i32,
    /// Experience awarded on victory.
    pub xp_reward: u32,
    /// Whether fleeing is allowed.
    pub can_flee: bool,
    /// Item dropped on victory.
    pub drop_item: Option<String>,
}

impl Enemy {
    /// Spawn a scaled instance of a template.
    pub fn spawn(
        template: &EnemyTemplate,
        instance_id: impl Into<String>,
        kill_count: u32,
        boss_hp_threshold: i32,
    ) -> Self {
        let scaled = scaling::scale(template, kill_count, boss_hp_threshold);
        Self {
            instance_id: instance_id.into(),
            template_id: template.id.clone(),
            name: template.name.clone(),
            hp: scaled.max_hp,
            max_hp: scaled.max_hp,
            damage: DiceFormula::parse(&template.damage_dice),
            attack_bonus: scaled.attack_bonus,
            defense: template.defense,
            xp_reward: template.xp_reward,
            can_flee: template.can_flee,
            drop_item: template.drop_item.clone(),
        }
    }

    /// Armor class an attack must meet or exceed.
    pub fn armor_class(&self) -> i32 {
        10 + self.defense
    }

    /// Apply damage, clamping at 0. Returns whether the enemy is down.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp = (self.hp - amount).max(0);
        self.is_defeated()
    }

    /// Whether hit points are gone.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}
