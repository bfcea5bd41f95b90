//! Difficulty scaling by kill count.
//!
//! Encounters fight a copy of the enemy template whose hit points and
//! attack bonus follow the player's victories. Templates with a base
//! `max_hp` above the boss threshold always fight at full strength.

use hk_core::EnemyTemplate;

/// Base `max_hp` above which an enemy counts as a boss and is never scaled.
pub const DEFAULT_BOSS_HP_THRESHOLD: i32 = 80;

/// One step of the scaling table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingBand {
    /// Inclusive lower bound on kill count.
    pub min_kills: u32,
    /// Multiplier applied to the template's `max_hp`.
    pub hp_scale: f64,
    /// Added to the template's attack bonus.
    pub attack_modifier: i32,
}

/// The scaling table, in ascending kill order.
pub const BANDS: [ScalingBand; 5] = [
    ScalingBand {
        min_kills: 0,
        hp_scale: 0.5,
        attack_modifier: -2,
    },
    ScalingBand {
        min_kills: 3,
        hp_scale: 0.8,
        attack_modifier: -1,
    },
    ScalingBand {
        min_kills: 6,
        hp_scale: 1.0,
        attack_modifier: 0,
    },
    ScalingBand {
        min_kills: 9,
        hp_scale: 1.3,
        attack_modifier: 1,
    },
    ScalingBand {
        min_kills: 15,
        hp_scale: 1.6,
        attack_modifier: 2,
    },
];

/// The band that applies at a kill count. Later bands override earlier ones.
pub fn band_for(kill_count: u32) -> ScalingBand {
    BANDS
        .iter()
        .rev()
        .find(|band| kill_count >= band.min_kills)
        .copied()
        .unwrap_or(BANDS[0])
}

/// Scaled hit points and attack bonus for one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledStats {
    /// Hit points the encounter starts with (also its max).
    pub max_hp: i32,
    /// Attack bonus for the encounter.
    pub attack_bonus: i32,
}

/// Scale a template for the given kill count.
pub fn scale(template: &EnemyTemplate, kill_count: u32, boss_hp_threshold: i32) -> ScaledStats {
    if template.max_hp > boss_hp_threshold {
        return ScaledStats {
            max_hp: template.max_hp,
            attack_bonus: template.attack_bonus,
        };
    }
    let band = band_for(kill_count);
    let max_hp = (f64::from(template.max_hp) * band.hp_scale).floor() as i32;
    ScaledStats {
        max_hp: max_hp.max(1),
        attack_bonus: (template.attack_bonus + band.attack_modifier).max(0),
    }
}
