use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::class::{ClassType, Stats};
use crate::enemy::EnemyTemplate;
use crate::error::{CoreError, CoreResult};
use crate::location::Location;

const HAWKINS_JSON: &str = include_str!("../data/hawkins.json");

fn default_fragments_required() -> usize {
    4
}

/// The static world definition. Never mutated during play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// World name.
    pub name: String,
    /// Where new players appear.
    pub start_location: String,
    /// Enemy whose defeat wins the game.
    #[serde(default)]
    pub final_boss: Option<String>,
    /// Fragments needed to restore the full map.
    #[serde(default = "default_fragments_required")]
    pub map_fragments_required: usize,
    /// Base stats per playable class.
    pub classes: HashMap<ClassType, Stats>,
    /// Enemy templates by ID.
    pub enemies: IndexMap<String, EnemyTemplate>,
    /// Locations by ID, in declaration order.
    pub locations: IndexMap<String, Location>,
}

impl World {
    /// The built-in Hawkins world.
    pub fn hawkins() -> CoreResult<Self> {
        Self::from_json(HAWKINS_JSON)
    }

    /// Parse and validate a world from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let world: World = serde_json::from_str(json)?;
        world.validate()?;
        Ok(world)
    }

    /// Check that every cross-reference resolves.
    pub fn validate(&self) -> CoreResult<()> {
        self.location(&self.start_location)?;
        if let Some(boss) = &self.final_boss {
            self.enemy(boss)?;
        }
        for class in ClassType::ALL {
            self.class_stats(class)?;
        }

        for (id, loc) in &self.locations {
            let dangling = |field: String, target: &str| CoreError::DanglingReference {
                location: id.clone(),
                field,
                target: target.to_string(),
            };
            for (dir, target) in &loc.exits {
                if !self.locations.contains_key(target) {
                    return Err(dangling(format!("exits.{dir}"), target));
                }
            }
            if let Some(enemy) = &loc.enemy_id
                && !self.enemies.contains_key(enemy)
            {
                return Err(dangling("enemy_id".to_string(), enemy));
            }
            for (i, row) in loc.random_encounters.iter().enumerate() {
                if !self.enemies.contains_key(&row.enemy_id) {
                    return Err(dangling(format!("random_encounters[{i}]"), &row.enemy_id));
                }
            }
        }
        Ok(())
    }

    /// Look up a location by ID.
    pub fn location(&self, id: &str) -> CoreResult<&Location> {
        self.locations
            .get(id)
            .ok_or_else(|| CoreError::LocationNotFound(id.to_string()))
    }

    /// Look up an enemy template by ID.
    pub fn enemy(&self, id: &str) -> CoreResult<&EnemyTemplate> {
        self.enemies
            .get(id)
            .ok_or_else(|| CoreError::EnemyNotFound(id.to_string()))
    }

    /// Base stats for a class.
    pub fn class_stats(&self, class: ClassType) -> CoreResult<Stats> {
        self.classes
            .get(&class)
            .copied()
            .ok_or(CoreError::MissingClassStats(class))
    }

    /// Stats for a player who has not picked a class yet.
    pub fn unclassed_stats(&self) -> CoreResult<Stats> {
        self.class_stats(ClassType::Fighter)
    }

    /// Whether an enemy template is the final boss.
    pub fn is_final_boss(&self, enemy_id: &str) -> bool {
        self.final_boss.as_deref() == Some(enemy_id)
    }
}
