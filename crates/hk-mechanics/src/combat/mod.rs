//! Turn-based combat against a single enemy.
//!
//! One command resolves the player's action and, when that action used up
//! the turn and the enemy still stands, the enemy's reply. Guard and shield
//! cover the reply to the command that raised them and lapse when the next
//! turn-taking command arrives.

pub mod action;
pub mod enemy;

pub use action::{CombatAction, Spell};
pub use enemy::Enemy;

use hk_core::player::{MAP_FRAGMENT_PREFIX, killed_flag};
use hk_core::{ClassType, GameLog, PlayerState, World};
use tracing::{debug, info};

use crate::dice::{DiceFormula, DiceSource};
use crate::error::MechResult;

/// Flat bonus added to every player attack and spell roll.
pub const FATE_BONUS: i32 = 5;

/// A flee roll (d20 + agility) must exceed this.
pub const FLEE_DIFFICULTY: i32 = 15;

/// Armor class granted by the shield spell.
pub const SHIELD_BONUS: i32 = 5;

/// Flat damage added to every fighter hit.
pub const FIGHTER_MASTERY: i32 = 5;

const FIREBALL_DICE: DiceFormula = DiceFormula::new(5, 6);

/// The melee damage die for a class.
pub fn weapon_dice(class: Option<ClassType>) -> DiceFormula {
    match class {
        Some(ClassType::Fighter) => DiceFormula::new(1, 12),
        Some(ClassType::Rogue) => DiceFormula::new(1, 8),
        Some(ClassType::Mage) => DiceFormula::new(1, 4),
        None => DiceFormula::FALLBACK,
    }
}

/// The armor class enemies roll against.
pub fn player_armor_class(player: &PlayerState) -> i32 {
    let mut ac = 10 + player.stats.defense + player.temp_defense_bonus;
    if player.class == Some(ClassType::Rogue) {
        ac += player.stats.agility;
    }
    ac
}

/// Everything a combat command reads or writes besides the fight itself.
pub struct CombatContext<'a> {
    /// Static world data.
    pub world: &'a World,
    /// The player, mutated in place.
    pub player: &'a mut PlayerState,
    /// Where narration goes.
    pub log: &'a mut GameLog,
    /// Randomness.
    pub dice: &'a mut dyn DiceSource,
}

/// What a combat command left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The fight continues.
    Ongoing,
    /// The enemy fell.
    Victory {
        /// Template of the defeated enemy.
        template_id: String,
    },
    /// The player fell.
    Defeat,
    /// The player escaped.
    Fled,
}

enum Step {
    Free,
    Used,
    Finished(CombatOutcome),
}

/// An active fight.
#[derive(Debug, Clone)]
pub struct Combat {
    enemy: Enemy,
}

impl Combat {
    /// Start a fight against an already spawned enemy.
    pub fn new(enemy: Enemy) -> Self {
        Self { enemy }
    }

    /// Spawn a scaled enemy from the world and start a fight.
    pub fn spawn(
        world: &World,
        enemy_id: &str,
        instance_id: impl Into<String>,
        kill_count: u32,
        boss_hp_threshold: i32,
    ) -> MechResult<Self> {
        let template = world.enemy(enemy_id)?;
        Ok(Self::new(Enemy::spawn(
            template,
            instance_id,
            kill_count,
            boss_hp_threshold,
        )))
    }

    /// The enemy being fought.
    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Mutable access to the enemy.
    pub fn enemy_mut(&mut self) -> &mut Enemy {
        &mut self.enemy
    }

    /// Resolve one combat command.
    pub fn handle_command(&mut self, ctx: &mut CombatContext<'_>, input: &str) -> CombatOutcome {
        let action = CombatAction::parse(input);
        debug!(%action, enemy = %self.enemy.instance_id, "combat command");

        if action.starts_turn() {
            end_previous_turn(ctx);
        }

        let step = match action {
            CombatAction::Help => {
                ctx.log.system("COMBAT: ATTACK, DEFEND, CAST, FLEE");
                Step::Free
            }
            CombatAction::Attack => self.attack(ctx),
            CombatAction::Defend => defend(ctx),
            CombatAction::Spellbook => spellbook(ctx),
            CombatAction::Cast(spell) => self.cast(ctx, spell),
            CombatAction::Flee => self.flee(ctx),
            CombatAction::Invalid(_) => {
                ctx.log
                    .error("Invalid command. TRY: ATTACK, DEFEND, CAST [SPELL], FLEE");
                Step::Free
            }
        };

        match step {
            Step::Free => CombatOutcome::Ongoing,
            Step::Finished(outcome) => outcome,
            Step::Used if self.enemy.is_defeated() => CombatOutcome::Ongoing,
            Step::Used => self.enemy_turn(ctx),
        }
    }

    fn attack(&mut self, ctx: &mut CombatContext<'_>) -> Step {
        let class = ctx.player.class;
        let stats = ctx.player.stats;
        let is_mage = class == Some(ClassType::Mage);

        let d20 = d20(ctx.dice);
        let attack_bonus = if is_mage {
            stats.strength - 1
        } else {
            stats.strength
        };
        let roll = d20 + attack_bonus + FATE_BONUS;
        let target_ac = self.enemy.armor_class();
        ctx.log.info(format!(
            "🎲 Roll: {d20} ({attack_bonus:+} Atk + {FATE_BONUS} Fate = {roll})"
        ));
        debug!(roll, target_ac, "player attack");

        if roll < target_ac {
            ctx.log.error(format!("Miss! (Target AC: {target_ac})"));
            return Step::Used;
        }

        let weapon = weapon_dice(class).roll(ctx.dice);
        debug!(%weapon, "weapon damage");
        let weapon = weapon.signed_total();
        let strength_bonus = if is_mage { 0 } else { stats.strength.max(0) };
        let mut damage = (weapon + strength_bonus) * 2;
        let mut message = "Hit!";
        match class {
            Some(ClassType::Rogue) => {
                damage = damage * 3 / 2 + stats.agility;
                message = "SNEAK ATTACK! Critical Hit!";
            }
            Some(ClassType::Fighter) => damage += FIGHTER_MASTERY,
            _ => {}
        }

        let effective = (damage - self.enemy.defense).max(1);
        ctx.log.success(format!("{message} 💥 Damage: {effective}"));
        self.strike(ctx, effective)
    }

    fn cast(&mut self, ctx: &mut CombatContext<'_>, spell: Option<Spell>) -> Step {
        if ctx.player.class != Some(ClassType::Mage) {
            ctx.log.error("You lack the arcane affinity to cast spells.");
            return Step::Free;
        }
        match spell {
            Some(Spell::Fireball) => self.fireball(ctx),
            Some(Spell::Shield) => shield(ctx),
            None => {
                let names: Vec<&str> = Spell::ALL.iter().map(|s| s.name()).collect();
                ctx.log
                    .error(format!("Unknown spell. Available: {}", names.join(", ")));
                Step::Free
            }
        }
    }

    fn fireball(&mut self, ctx: &mut CombatContext<'_>) -> Step {
        let cost = Spell::Fireball.mana_cost();
        let mana = ctx.player.stats.mana;
        if mana < cost {
            ctx.log
                .error(format!("Not enough Mana! ({mana}/{cost} required)."));
            return Step::Free;
        }
        ctx.player.stats.mana -= cost;

        let d20 = d20(ctx.dice);
        let intellect = ctx.player.stats.intellect;
        let roll = d20 + intellect + FATE_BONUS;
        let target_ac = self.enemy.armor_class();
        ctx.log.info(format!(
            "🎲 Casting Fireball: {d20} ({intellect:+} Int + {FATE_BONUS} Fate = {roll})"
        ));

        if roll < target_ac {
            ctx.log.error(format!(
                "Fizzle! The spell dissipates. (Target AC: {target_ac})"
            ));
            return Step::Used;
        }

        let damage = FIREBALL_DICE.roll(ctx.dice);
        debug!(%damage, "fireball damage");
        let damage = damage.signed_total();
        let effective = (damage - self.enemy.defense).max(1);
        ctx.log
            .success(format!("🔥 Fireball hits! Damage: {effective}"));
        self.strike(ctx, effective)
    }

    fn flee(&mut self, ctx: &mut CombatContext<'_>) -> Step {
        if !self.enemy.can_flee {
            ctx.log.error("You cannot flee from this enemy!");
            return Step::Free;
        }
        let roll = d20(ctx.dice) + ctx.player.stats.agility;
        debug!(roll, "flee attempt");
        if roll > FLEE_DIFFICULTY {
            ctx.log.success("You scramble away into the shadows!");
            Step::Finished(CombatOutcome::Fled)
        } else {
            ctx.log.error("Failed to escape!");
            Step::Used
        }
    }

    fn strike(&mut self, ctx: &mut CombatContext<'_>, amount: i32) -> Step {
        let down = self.enemy.take_damage(amount);
        ctx.log.combat(format!("Enemy HP: {}", self.enemy.hp));
        if down {
            Step::Finished(self.victory(ctx))
        } else {
            Step::Used
        }
    }

    fn enemy_turn(&mut self, ctx: &mut CombatContext<'_>) -> CombatOutcome {
        let roll = d20(ctx.dice) + self.enemy.attack_bonus;
        let armor = player_armor_class(ctx.player);
        ctx.log.combat(format!(
            "The {} attacks! (Roll: {roll})",
            self.enemy.name
        ));
        debug!(roll, armor, "enemy attack");

        if roll < armor {
            ctx.log.info("You dodge the attack!");
            return CombatOutcome::Ongoing;
        }

        let dealt = self.enemy.damage.roll(ctx.dice);
        debug!(%dealt, "enemy damage");
        let mut damage = dealt.signed_total();
        if ctx.player.is_guarding {
            damage = if ctx.player.class == Some(ClassType::Fighter) {
                damage / 4
            } else {
                damage / 2
            };
        }
        let damage = (damage - ctx.player.stats.defense).max(1);
        let stats = &mut ctx.player.stats;
        stats.hp = (stats.hp - damage).max(0);
        ctx.log.error(format!("You take {damage} damage!"));

        if stats.hp > 0 {
            return CombatOutcome::Ongoing;
        }
        ctx.log.error("CRITICAL FAILURE. VITAL SIGNS FLATLINING...");
        info!(enemy = %self.enemy.template_id, "player defeated");
        CombatOutcome::Defeat
    }

    fn victory(&self, ctx: &mut CombatContext<'_>) -> CombatOutcome {
        let enemy = &self.enemy;
        ctx.log
            .success(format!("VICTORY! The {} is defeated.", enemy.name));
        ctx.log
            .success(format!("You gained {} XP.", enemy.xp_reward));

        ctx.player.set_flag(killed_flag(&enemy.template_id));
        if let Some(drop) = &enemy.drop_item
            && !ctx.player.has_item(drop)
        {
            ctx.player.add_item(drop.clone());
            ctx.log.success(format!(
                "LOOT: You found {}!",
                drop.to_uppercase().replace('_', " ")
            ));
        }
        ctx.player.kill_count += 1;

        if let Ok(location) = ctx.world.location(&ctx.player.current_location_id) {
            let exits: Vec<String> = location.open_exits().map(str::to_uppercase).collect();
            ctx.log.system(format!(
                "AREA SECURE. SUGGESTED ACTION: MOVE {}",
                exits.join(", ")
            ));
            ctx.log
                .system("Alternative: Type 'LOOK' to inspect surroundings.");
            let is_fragment = enemy
                .drop_item
                .as_deref()
                .is_some_and(|d| d.starts_with(MAP_FRAGMENT_PREFIX));
            if is_fragment {
                ctx.log
                    .success("IMPORTANT: Map fragment acquired. Type 'MAP' to view progress.");
            }
        }

        info!(
            enemy = %enemy.template_id,
            kills = ctx.player.kill_count,
            "enemy defeated"
        );
        CombatOutcome::Victory {
            template_id: enemy.template_id.clone(),
        }
    }
}

fn d20(dice: &mut dyn DiceSource) -> i32 {
    DiceFormula::D20.roll(dice).signed_total()
}

fn end_previous_turn(ctx: &mut CombatContext<'_>) {
    ctx.player.is_guarding = false;
    if ctx.player.temp_defense_bonus > 0 {
        ctx.player.temp_defense_bonus = 0;
        ctx.log.info("Your magical shield fades.");
    }
}

fn defend(ctx: &mut CombatContext<'_>) -> Step {
    ctx.player.is_guarding = true;
    if ctx.player.class == Some(ClassType::Fighter) {
        ctx.log
            .info("DEFENSIVE STANCE: You brace yourself. Damage -75%.");
    } else {
        ctx.log.info("You raise your guard. Damage -50%.");
    }
    Step::Used
}

fn spellbook(ctx: &mut CombatContext<'_>) -> Step {
    if ctx.player.class != Some(ClassType::Mage) {
        ctx.log
            .error("You don't know any spells. You are not a Mage.");
        return Step::Free;
    }
    let stats = ctx.player.stats;
    let spells: Vec<String> = Spell::ALL
        .iter()
        .map(|s| format!("{} ({} MP)", s.name(), s.mana_cost()))
        .collect();
    ctx.log
        .system(format!("MANA: {}/{}", stats.mana, stats.max_mana));
    ctx.log.system(format!("SPELLS: {}", spells.join(", ")));
    ctx.log.system("Usage: CAST FIREBALL");
    Step::Free
}

fn shield(ctx: &mut CombatContext<'_>) -> Step {
    let cost = Spell::Shield.mana_cost();
    if ctx.player.stats.mana < cost {
        ctx.log.error("Not enough Mana!");
        return Step::Free;
    }
    ctx.player.stats.mana -= cost;
    ctx.player.temp_defense_bonus = SHIELD_BONUS;
    ctx.log.success(format!(
        "A shimmering barrier surrounds you. (+{SHIELD_BONUS} DEF)"
    ));
    Step::Used
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::scaling::DEFAULT_BOSS_HP_THRESHOLD;

    struct Arena {
        world: World,
        player: PlayerState,
        log: GameLog,
        dice: ScriptedDice,
        combat: Combat,
    }

    impl Arena {
        fn new(class: ClassType, location: &str, enemy_id: &str, rolls: &[u32]) -> Self {
            let world = World::hawkins().unwrap();
            let mut player = PlayerState::new(location, world.class_stats(class).unwrap());
            player.class = Some(class);
            let combat = Combat::spawn(
                &world,
                enemy_id,
                enemy_id,
                0,
                DEFAULT_BOSS_HP_THRESHOLD,
            )
            .unwrap();
            Self {
                world,
                player,
                log: GameLog::new(),
                dice: ScriptedDice::with_rolls(rolls.iter().copied()),
                combat,
            }
        }

        fn run(&mut self, input: &str) -> CombatOutcome {
            let mut ctx = CombatContext {
                world: &self.world,
                player: &mut self.player,
                log: &mut self.log,
                dice: &mut self.dice,
            };
            self.combat.handle_command(&mut ctx, input)
        }
    }

    #[test]
    fn fighter_hit_kills_without_counterattack() {
        // Rat spawns at 5 hp. d20 10 hits AC 10; d12 1 -> (1 + 6) * 2 + 5 = 19.
        let mut a = Arena::new(ClassType::Fighter, "scrap_yard", "possessed_rat", &[10, 1, 20, 4]);
        let outcome = a.run("attack");
        assert_eq!(
            outcome,
            CombatOutcome::Victory {
                template_id: "possessed_rat".into()
            }
        );
        assert!(a.log.contains("Hit! 💥 Damage: 19"));
        assert!(a.log.contains("Enemy HP: 0"));
        assert!(a.log.contains("VICTORY! The Possessed Rat is defeated."));
        assert!(!a.log.contains("attacks! (Roll"));
        assert_eq!(a.dice.remaining_rolls(), 2);
        assert_eq!(a.player.kill_count, 1);
        assert!(a.player.has_flag("killed_possessed_rat"));
    }

    #[test]
    fn exact_zero_hp_is_victory() {
        // Mage d4 1 -> (1 + 0) * 2 = 2 against a rat with 2 hp left.
        let mut a = Arena::new(ClassType::Mage, "scrap_yard", "possessed_rat", &[20, 1, 20]);
        a.combat.enemy_mut().hp = 2;
        assert!(matches!(a.run("attack"), CombatOutcome::Victory { .. }));
        assert_eq!(a.combat.enemy().hp, 0);
        assert_eq!(a.dice.remaining_rolls(), 1);
    }

    #[test]
    fn rogue_hit_is_always_sneak_attack() {
        // Crawler: 35 hp, def 3. d8 2 -> (2 + 3) * 2 = 10 -> 15 + 7 = 22 -> 19.
        let mut a = Arena::new(ClassType::Rogue, "starcourt_ruins", "flesh_crawler", &[10, 2, 1]);
        let outcome = a.run("attack");
        assert_eq!(outcome, CombatOutcome::Ongoing);
        assert!(a.log.contains("SNEAK ATTACK! Critical Hit! 💥 Damage: 19"));
        assert_eq!(a.combat.enemy().hp, 16);
        assert!(a.log.contains("You dodge the attack!"));
    }

    #[test]
    fn miss_still_gives_enemy_a_turn() {
        // Fighter d20 1 -> 12 < AC 13. Enemy 20 + 2 hits, 2d6 [6, 6] - 4 = 8.
        let mut a = Arena::new(ClassType::Fighter, "starcourt_ruins", "flesh_crawler", &[1, 20, 6, 6]);
        assert_eq!(a.run("attack"), CombatOutcome::Ongoing);
        assert!(a.log.contains("Miss! (Target AC: 13)"));
        assert!(a.log.contains("The Flesh Crawler attacks! (Roll: 22)"));
        assert!(a.log.contains("You take 8 damage!"));
        assert_eq!(a.player.stats.hp, 152);
    }

    #[test]
    fn fireball_without_mana_costs_nothing() {
        let mut a = Arena::new(ClassType::Mage, "starcourt_ruins", "flesh_crawler", &[20, 20]);
        a.player.stats.mana = 5;
        assert_eq!(a.run("cast fireball"), CombatOutcome::Ongoing);
        assert!(a.log.contains("Not enough Mana! (5/15 required)."));
        assert_eq!(a.player.stats.mana, 5);
        assert_eq!(a.dice.remaining_rolls(), 2);
        assert_eq!(a.player.stats.hp, 80);
    }

    #[test]
    fn fireball_hits_and_enemy_replies() {
        let rolls = [5, 6, 6, 6, 6, 6, 20, 3, 3];
        let mut a = Arena::new(ClassType::Mage, "starcourt_ruins", "flesh_crawler", &rolls);
        assert_eq!(a.run("cast fireball"), CombatOutcome::Ongoing);
        assert_eq!(a.player.stats.mana, 135);
        assert!(a.log.contains("🔥 Fireball hits! Damage: 27"));
        assert_eq!(a.combat.enemy().hp, 8);
        assert!(a.log.contains("You take 5 damage!"));
        assert_eq!(a.player.stats.hp, 75);
    }

    #[test]
    fn fireball_fizzle_spends_mana_and_turn() {
        // Void hawk is unscaled with AC 14; 1 + 7 + 5 = 13 falls short.
        let mut a = Arena::new(ClassType::Mage, "quarry_edge", "void_hawk", &[1, 1]);
        a.run("cast fireball");
        assert!(a.log.contains("Fizzle! The spell dissipates. (Target AC: 14)"));
        assert_eq!(a.player.stats.mana, 135);
        assert!(a.log.contains("attacks!"));
    }

    #[test]
    fn non_mage_cannot_cast() {
        let mut a = Arena::new(ClassType::Fighter, "starcourt_ruins", "flesh_crawler", &[20]);
        a.run("cast fireball");
        assert!(a.log.contains("You lack the arcane affinity to cast spells."));
        a.run("cast");
        assert!(a.log.contains("You don't know any spells. You are not a Mage."));
        assert_eq!(a.dice.remaining_rolls(), 1);
    }

    #[test]
    fn spellbook_lists_spells() {
        let mut a = Arena::new(ClassType::Mage, "starcourt_ruins", "flesh_crawler", &[]);
        a.run("cast");
        assert!(a.log.contains("MANA: 150/150"));
        assert!(a.log.contains("SPELLS: FIREBALL (15 MP), SHIELD (10 MP)"));
        a.run("cast heal");
        assert!(a.log.contains("Unknown spell. Available: FIREBALL, SHIELD"));
        assert_eq!(a.player.stats.mana, 150);
    }

    #[test]
    fn shield_covers_one_enemy_turn() {
        // Mage AC 11 + 5. Enemy 13 + 2 = 15 misses.
        let mut a = Arena::new(ClassType::Mage, "starcourt_ruins", "flesh_crawler", &[13]);
        a.run("cast shield");
        assert_eq!(a.player.stats.mana, 140);
        assert_eq!(a.player.temp_defense_bonus, 5);
        assert!(a.log.contains("You dodge the attack!"));

        a.run("defend");
        assert!(a.log.contains("Your magical shield fades."));
        assert_eq!(a.player.temp_defense_bonus, 0);
        assert!(a.player.is_guarding);
    }

    #[test]
    fn fighter_guard_quarters_damage() {
        // 2d6 [6, 6] = 12 -> 3 -> 3 - 4 floors at 1.
        let mut a = Arena::new(ClassType::Fighter, "starcourt_ruins", "flesh_crawler", &[20, 6, 6]);
        a.run("defend");
        assert!(a.log.contains("DEFENSIVE STANCE"));
        assert!(a.log.contains("You take 1 damage!"));
        assert_eq!(a.player.stats.hp, 159);
    }

    #[test]
    fn rogue_guard_halves_damage() {
        // Rogue AC 19; 20 + 2 hits. 12 -> 6 -> 6 - 2 = 4.
        let mut a = Arena::new(ClassType::Rogue, "starcourt_ruins", "flesh_crawler", &[20, 6, 6]);
        a.run("defend");
        assert!(a.log.contains("You raise your guard. Damage -50%."));
        assert!(a.log.contains("You take 4 damage!"));
        assert_eq!(a.player.stats.hp, 106);
    }

    #[test]
    fn guard_lapses_on_next_turn() {
        let mut a = Arena::new(ClassType::Fighter, "starcourt_ruins", "flesh_crawler", &[1, 1, 20, 6, 6]);
        a.run("defend");
        assert!(a.player.is_guarding);
        a.run("attack");
        assert!(!a.player.is_guarding);
        assert!(a.log.contains("You take 8 damage!"));
    }

    #[test]
    fn help_does_not_end_guard() {
        let mut a = Arena::new(ClassType::Fighter, "starcourt_ruins", "flesh_crawler", &[]);
        a.player.is_guarding = true;
        assert_eq!(a.run("help"), CombatOutcome::Ongoing);
        assert!(a.player.is_guarding);
        assert!(a.log.contains("COMBAT: ATTACK, DEFEND, CAST, FLEE"));
    }

    #[test]
    fn cannot_flee_forbidden_enemy() {
        let mut a = Arena::new(ClassType::Rogue, "starcourt_ruins", "flesh_crawler", &[20]);
        assert_eq!(a.run("flee"), CombatOutcome::Ongoing);
        assert!(a.log.contains("You cannot flee from this enemy!"));
        assert_eq!(a.dice.remaining_rolls(), 1);
        assert!(!a.log.contains("attacks!"));
    }

    #[test]
    fn flee_must_beat_difficulty() {
        // 8 + 7 = 15 does not exceed 15.
        let mut a = Arena::new(ClassType::Rogue, "scrap_yard", "possessed_rat", &[8, 1]);
        assert_eq!(a.run("flee"), CombatOutcome::Ongoing);
        assert!(a.log.contains("Failed to escape!"));
        assert!(a.log.contains("attacks!"));

        a.dice.push_roll(9);
        assert_eq!(a.run("flee"), CombatOutcome::Fled);
        assert!(a.log.contains("You scramble away into the shadows!"));
    }

    #[test]
    fn invalid_command_costs_nothing() {
        let mut a = Arena::new(ClassType::Fighter, "scrap_yard", "possessed_rat", &[20]);
        assert_eq!(a.run("north"), CombatOutcome::Ongoing);
        assert!(a.log.contains("Invalid command. TRY: ATTACK, DEFEND, CAST [SPELL], FLEE"));
        assert_eq!(a.dice.remaining_rolls(), 1);
    }

    #[test]
    fn defeat_when_hp_reaches_zero() {
        let mut a = Arena::new(ClassType::Fighter, "starcourt_ruins", "flesh_crawler", &[1, 20, 1, 1]);
        a.player.stats.hp = 1;
        assert_eq!(a.run("attack"), CombatOutcome::Defeat);
        assert_eq!(a.player.stats.hp, 0);
        assert!(a.log.contains("CRITICAL FAILURE. VITAL SIGNS FLATLINING..."));
    }

    #[test]
    fn victory_drops_loot_once() {
        let mut a = Arena::new(ClassType::Fighter, "starcourt_ruins", "flesh_crawler", &[20, 12]);
        a.combat.enemy_mut().hp = 1;
        a.run("attack");
        assert!(a.log.contains("LOOT: You found MAP FRAGMENT 1!"));
        assert!(a.log.contains("AREA SECURE. SUGGESTED ACTION: MOVE WEST"));
        assert!(a.log.contains("IMPORTANT: Map fragment acquired."));
        assert_eq!(a.player.inventory, vec!["map_fragment_1".to_string()]);

        let mut again = Arena::new(ClassType::Fighter, "starcourt_ruins", "flesh_crawler", &[20, 12]);
        again.player.add_item("map_fragment_1");
        again.combat.enemy_mut().hp = 1;
        again.run("attack");
        assert!(!again.log.contains("LOOT"));
        assert_eq!(again.player.map_fragments(), 1);
    }

    #[test]
    fn rogue_armor_includes_agility() {
        let world = World::hawkins().unwrap();
        let mut rogue = PlayerState::new("town_square", world.class_stats(ClassType::Rogue).unwrap());
        rogue.class = Some(ClassType::Rogue);
        assert_eq!(player_armor_class(&rogue), 19);
        rogue.class = Some(ClassType::Fighter);
        assert_eq!(player_armor_class(&rogue), 12);
    }
}
