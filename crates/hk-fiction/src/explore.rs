//! Exploration: moving between locations and reporting on the world.

use hk_core::art::{FULL_MAP, enemy_art};
use hk_core::location::TOWER_STABILIZED_FLAG;
use hk_core::player::{killed_flag, visited_flag};
use hk_core::{ClassType, GameLog, Location, PlayerState, TriggerEvent, World};
use hk_mechanics::{Combat, DiceSource};
use tracing::debug;
use uuid::Uuid;

use crate::error::FictionResult;
use crate::parser::{Command, Direction, normalize_item, parse_command, suggest_item};

/// What an exploration command changed.
#[derive(Debug, Default)]
pub struct ExploreOutcome {
    /// The player arrived somewhere new (state should be saved).
    pub moved: bool,
    /// A fight that started on arrival.
    pub encounter: Option<Combat>,
}

impl ExploreOutcome {
    fn stayed() -> Self {
        Self::default()
    }
}

/// Resolves exploration commands for one player.
///
/// Borrows everything it touches for the duration of a single command.
pub struct Explorer<'a> {
    /// Static world data.
    pub world: &'a World,
    /// The player, mutated in place.
    pub player: &'a mut PlayerState,
    /// Where narration goes.
    pub log: &'a mut GameLog,
    /// Randomness for encounter rolls.
    pub dice: &'a mut dyn DiceSource,
    /// Base `max_hp` above which enemies skip scaling.
    pub boss_hp_threshold: i32,
}

impl Explorer<'_> {
    /// Parse and resolve one exploration command.
    pub fn handle_command(&mut self, input: &str) -> FictionResult<ExploreOutcome> {
        let command = parse_command(input);
        debug!(?command, "exploration command");
        self.execute(command)
    }

    /// Resolve a parsed command.
    pub fn execute(&mut self, command: Command) -> FictionResult<ExploreOutcome> {
        match command {
            Command::Move { direction } => self.do_move(direction),
            Command::Return => self.do_return(),
            Command::Look => self.do_look().map(|()| ExploreOutcome::stayed()),
            Command::Map => {
                self.do_map();
                Ok(ExploreOutcome::stayed())
            }
            Command::Status => {
                self.do_status();
                Ok(ExploreOutcome::stayed())
            }
            Command::Help => {
                self.log.system(
                    "EXPLORE: DIRECTIONS (N/S/E/W), RETURN, LOOK, MAP, STATUS, INVENTORY, TAKE <ITEM>",
                );
                Ok(ExploreOutcome::stayed())
            }
            Command::Inventory => {
                self.do_inventory();
                Ok(ExploreOutcome::stayed())
            }
            Command::Take { item } => self.do_take(&item).map(|()| ExploreOutcome::stayed()),
            Command::Unknown { .. } => {
                self.log.error("UNKNOWN COMMAND.");
                Ok(ExploreOutcome::stayed())
            }
        }
    }

    /// Move the player to a location.
    ///
    /// Construction zones refuse the move outright. Otherwise the player
    /// arrives, and when `check_encounters` is set a live guardian or the
    /// first random encounter that rolls under its chance starts a fight.
    /// Without a fight the arrival trigger fires and the location is shown.
    pub fn change_location(
        &mut self,
        destination: &str,
        check_encounters: bool,
    ) -> FictionResult<ExploreOutcome> {
        let world = self.world;
        let target = world.location(destination)?;

        if target.is_construction {
            self.log.error("You hit a wall of static.");
            self.log.error("⚠️ UNDER CONSTRUCTION ⚠️");
            return Ok(ExploreOutcome::stayed());
        }

        let first_visit = !self.player.has_visited(&target.id);
        let from = std::mem::replace(&mut self.player.current_location_id, target.id.clone());
        debug!(%from, to = %target.id, "location changed");
        self.player.previous_location_id = Some(from);
        self.player.clear_combat_modifiers();
        self.player.set_flag(visited_flag(&target.id));

        let encounter = if check_encounters {
            self.roll_encounter(target)?
        } else {
            None
        };

        match &encounter {
            Some(combat) => self.announce(combat),
            None => {
                let event = target
                    .trigger
                    .as_ref()
                    .and_then(|t| t.evaluate(self.player));
                if let Some(event) = event {
                    self.apply_trigger(event);
                }
                self.describe(target, first_visit);
            }
        }

        Ok(ExploreOutcome {
            moved: true,
            encounter,
        })
    }

    fn do_move(&mut self, direction: Direction) -> FictionResult<ExploreOutcome> {
        let world = self.world;
        let here = world.location(&self.player.current_location_id)?;
        let dir = direction.name();

        if let Some(lock) = here.locked_exits.get(dir) {
            let unlocked = lock
                .unlock_flag
                .as_deref()
                .is_some_and(|flag| self.player.has_flag(flag));
            if !unlocked {
                match lock.required_class {
                    Some(class) if self.player.class == Some(class) => {
                        self.log.success("YOU FORCE YOUR WAY THROUGH.");
                    }
                    Some(class) => {
                        self.log
                            .error(format!("LOCKED: {} (REQUIRES {class})", lock.reason));
                        return Ok(ExploreOutcome::stayed());
                    }
                    None => {
                        self.log.error(format!("LOCKED: {}", lock.reason));
                        return Ok(ExploreOutcome::stayed());
                    }
                }
            }
        }

        match here.exits.get(dir) {
            Some(destination) => self.change_location(destination, true),
            None => {
                self.log
                    .error(format!("❌ You cannot go {}.", dir.to_uppercase()));
                if here.is_construction {
                    self.log.error("⚠️ UNDER CONSTRUCTION ⚠️");
                }
                Ok(ExploreOutcome::stayed())
            }
        }
    }

    fn do_return(&mut self) -> FictionResult<ExploreOutcome> {
        match self.player.previous_location_id.clone() {
            Some(previous) => {
                self.log.info("↩ You retrace your steps.");
                self.change_location(&previous, false)
            }
            None => {
                self.log.error("You cannot return from here.");
                Ok(ExploreOutcome::stayed())
            }
        }
    }

    fn do_look(&mut self) -> FictionResult<()> {
        let world = self.world;
        let here = world.location(&self.player.current_location_id)?;
        let first_visit = !self.player.has_visited(&here.id);
        self.describe(here, first_visit);
        Ok(())
    }

    fn do_map(&mut self) {
        let world = self.world;
        let fragments = self.player.map_fragments();
        let required = world.map_fragments_required;

        if fragments >= required {
            self.log
                .success(format!("MAP RESTORED: {} is fully revealed.", world.name));
            self.log.info(FULL_MAP);
            return;
        }

        self.log.system(format!(
            "--- EXPLORED LOCATIONS (Fragments: {fragments}/{required}) ---"
        ));
        for location in world.locations.values() {
            if self.player.has_visited(&location.id) {
                self.log.info(format!("- {}", location.name));
            }
        }
    }

    fn do_status(&mut self) {
        let class = self.player.class.map_or("UNREGISTERED", ClassType::name);
        let s = self.player.stats;
        self.log.info(format!("STATUS: {class}"));
        self.log
            .info(format!("HP: {}/{} | MANA: {}", s.hp, s.max_hp, s.mana));
        self.log.info(format!(
            "ATK: {:+} | DEF: {} | INT: {:+} | AGI: {:+}",
            s.strength, s.defense, s.intellect, s.agility
        ));
    }

    fn do_inventory(&mut self) {
        if self.player.inventory.is_empty() {
            self.log.info("INVENTORY: EMPTY");
        } else {
            self.log
                .info(format!("INVENTORY: {}", self.player.inventory.join(", ")));
        }
    }

    /// Items are never removed from the location, so they can be taken again.
    fn do_take(&mut self, item: &str) -> FictionResult<()> {
        let world = self.world;
        let here = world.location(&self.player.current_location_id)?;
        let id = normalize_item(item);

        if here.items.contains(&id) {
            self.log.success(format!("Taken: {}", id.to_uppercase()));
            self.player.add_item(id);
            return Ok(());
        }

        self.log.error("That item is not here.");
        if let Some(close) = suggest_item(&here.items, item) {
            self.log.info(format!(
                "Did you mean {}?",
                close.replace('_', " ").to_uppercase()
            ));
        }
        Ok(())
    }

    fn roll_encounter(&mut self, location: &Location) -> FictionResult<Option<Combat>> {
        let kills = self.player.kill_count;

        if let Some(guardian) = &location.enemy_id
            && !self.player.has_flag(&killed_flag(guardian))
        {
            let combat = Combat::spawn(
                self.world,
                guardian,
                guardian.clone(),
                kills,
                self.boss_hp_threshold,
            )?;
            return Ok(Some(combat));
        }

        for row in &location.random_encounters {
            let roll = self.dice.chance();
            debug!(enemy = %row.enemy_id, roll, chance = row.chance, "encounter check");
            if roll < row.chance {
                let instance = format!("{}_rand_{}", row.enemy_id, Uuid::new_v4().simple());
                let combat = Combat::spawn(
                    self.world,
                    &row.enemy_id,
                    instance,
                    kills,
                    self.boss_hp_threshold,
                )?;
                return Ok(Some(combat));
            }
        }
        Ok(None)
    }

    fn announce(&mut self, combat: &Combat) {
        let enemy = combat.enemy();
        debug!(enemy = %enemy.instance_id, hp = enemy.hp, "encounter");
        self.log.info("A presence emerges from the darkness...");
        if let Some(art) = enemy_art(&enemy.template_id) {
            self.log.info(art);
        }
        self.log
            .combat(format!("🔥 A {} ATTACKS! 🔥", enemy.name.to_uppercase()));
    }

    fn apply_trigger(&mut self, event: TriggerEvent) {
        debug!(event = event.tag(), "trigger fired");
        match event {
            TriggerEvent::Healed => {
                self.player.stats.restore();
                self.log
                    .success("The safety of the Town Center restores your vitality.");
            }
            TriggerEvent::MageTowerFix => {
                self.player.set_flag(TOWER_STABILIZED_FLAG);
                self.log
                    .success("ARCANE: You stabilize the signal interference with a spell.");
            }
        }
    }

    fn describe(&mut self, location: &Location, first_visit: bool) {
        self.log.system(format!("[{}]", location.name.to_uppercase()));
        self.log.info(location.description_for(first_visit));

        if !location.items.is_empty() {
            self.log.info(format!(
                "ITEMS VISIBLE: {}",
                location.items.join(", ").replace('_', " ")
            ));
        }

        let open: Vec<String> = location.open_exits().map(str::to_uppercase).collect();
        let mut exits = format!("EXITS: {}", open.join(", "));
        if !location.locked_exits.is_empty() {
            let locked: Vec<String> = location
                .locked_exits
                .keys()
                .map(|dir| dir.to_uppercase())
                .collect();
            exits.push_str(&format!(" ({}?)", locked.join(", ")));
        }
        self.log.info(exits);
    }
}
