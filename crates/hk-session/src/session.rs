//! Game session management.
//!
//! `GameSession` owns the world, the player, the narrative log, and the
//! active fight. Each submitted line is echoed to the log and routed to
//! character creation, the exploration engine, or the combat engine
//! depending on the phase and mode.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use hk_core::{ClassType, GameLog, LogEntry, PlayerState, World};
use hk_fiction::{Command, Explorer};
use hk_mechanics::{Combat, CombatContext, CombatOutcome, DiceSource, Enemy};

use crate::config::GameConfig;
use crate::error::SessionResult;
use crate::phase::{CreationStep, GameMode, GamePhase};
use crate::store::{SaveData, SaveStore};

/// Lines shown when a fresh session boots.
pub const BOOT_SEQUENCE: &[&str] = &[
    "SYSTEM_BOOT_SEQUENCE_INITIATED...",
    "CHECKING_MEMORY... 64KB OK",
    "LOADING_KERNEL... HAWKINS_OS v2.1",
    "MOUNTING_DRIVE_A... SUCCESS",
    "ESTABLISHING_UPLINK... ENCRYPTED",
    " ",
    "WELCOME TO PROJECT_MK_ULTRA_TERMINAL",
    "AUTHORIZED PERSONNEL ONLY",
    " ",
];

const IDENTITY_PROMPT: &str = "PLEASE ENTER USER IDENTITY:";
const GAME_OVER_PROMPT: &str = "GAME OVER. TYPE 'RESTART'.";

/// A single-player game session.
pub struct GameSession {
    world: World,
    config: GameConfig,
    phase: GamePhase,
    creation: CreationStep,
    player: PlayerState,
    log: GameLog,
    combat: Option<Combat>,
    dice: Box<dyn DiceSource>,
    store: Box<dyn SaveStore>,
}

impl GameSession {
    /// Create a powered-off session. Call [`GameSession::start`] to boot it.
    pub fn new(world: World, config: GameConfig, store: Box<dyn SaveStore>) -> SessionResult<Self> {
        let player = fresh_player(&world)?;
        let dice: Box<dyn DiceSource> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_os_rng()),
        };
        Ok(Self {
            world,
            config,
            phase: GamePhase::Off,
            creation: CreationStep::Name,
            player,
            log: GameLog::new(),
            combat: None,
            dice,
            store,
        })
    }

    /// Replace the dice source.
    pub fn with_dice(mut self, dice: Box<dyn DiceSource>) -> Self {
        self.dice = dice;
        self
    }

    /// The current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The current mode. Only meaningful while playing.
    pub fn mode(&self) -> GameMode {
        if self.combat.is_some() {
            GameMode::Combat
        } else {
            GameMode::Explore
        }
    }

    /// The character creation prompt being answered.
    pub fn creation_step(&self) -> CreationStep {
        self.creation
    }

    /// The player snapshot.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The narrative log.
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Log entries, oldest first.
    pub fn history(&self) -> &[LogEntry] {
        self.log.entries()
    }

    /// The enemy being fought, if any.
    pub fn enemy(&self) -> Option<&Enemy> {
        self.combat.as_ref().map(Combat::enemy)
    }

    /// The save slot.
    pub fn store(&self) -> &dyn SaveStore {
        self.store.as_ref()
    }

    /// Boot the session.
    ///
    /// Restores the saved game if the slot holds one that fits the world,
    /// otherwise shows the boot sequence and asks for a name. Does nothing
    /// unless powered off.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Off {
            debug!(phase = %self.phase, "start ignored");
            return;
        }

        let save = self.store.load().filter(|save| match save.check_against(&self.world) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "saved game does not fit the world, ignoring it");
                false
            }
        });
        match save {
            Some(save) => {
                self.player = save.player;
                self.log = GameLog::from_entries(save.history);
                self.combat = None;
                self.log.system("SAVED SESSION RESTORED.");
                self.set_phase(GamePhase::Playing);
            }
            None => {
                self.log.clear();
                for line in BOOT_SEQUENCE {
                    self.log.info(*line);
                }
                self.log.system(IDENTITY_PROMPT);
                self.creation = CreationStep::Name;
                self.set_phase(GamePhase::StartScreen);
            }
        }
    }

    /// Suspend play. Only works while playing.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.set_phase(GamePhase::Paused);
        }
    }

    /// Resume from a pause.
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.set_phase(GamePhase::Playing);
        }
    }

    /// Power down. Any phase can be switched off.
    pub fn turn_off(&mut self) {
        self.set_phase(GamePhase::Off);
    }

    /// Wipe the save and start over at character creation.
    pub fn restart(&mut self) -> SessionResult<()> {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "could not clear save slot");
        }
        self.log.clear();
        self.player = fresh_player(&self.world)?;
        self.combat = None;
        self.creation = CreationStep::Name;
        self.set_phase(GamePhase::StartScreen);
        self.log.system("SYSTEM REBOOTED. MEMORY CLEARED.");
        self.log.system(IDENTITY_PROMPT);
        Ok(())
    }

    /// Process one submitted line.
    ///
    /// Blank lines and lines arriving while off or paused are dropped.
    /// Everything else is echoed to the log before it is handled.
    pub fn submit(&mut self, input: &str) -> SessionResult<()> {
        let input = input.trim();
        if input.is_empty() || self.phase.ignores_input() {
            return Ok(());
        }

        self.log.info(format!("> {input}"));
        let cmd = input.to_lowercase();

        match self.phase {
            GamePhase::StartScreen => self.do_creation(&cmd),
            GamePhase::Playing => match self.combat.take() {
                Some(combat) => self.do_combat(combat, &cmd),
                None => self.do_explore(&cmd),
            },
            phase if phase.is_ended() => {
                if cmd == "restart" {
                    self.restart()
                } else {
                    self.log.system(GAME_OVER_PROMPT);
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    fn do_creation(&mut self, cmd: &str) -> SessionResult<()> {
        match self.creation {
            CreationStep::Name => {
                let name: String = cmd
                    .to_uppercase()
                    .chars()
                    .take(self.config.name_max_len)
                    .collect();
                self.log.success(format!("IDENTITY CONFIRMED: {name}"));
                self.log.system("SELECT CLASS: FIGHTER, MAGE, ROGUE");
                self.player.name = name;
                self.creation = CreationStep::Class;
                Ok(())
            }
            CreationStep::Class => {
                let Some(class) = ClassType::parse(cmd) else {
                    self.log
                        .error("INVALID CLASS. CHOOSE FIGHTER, MAGE, OR ROGUE.");
                    return Ok(());
                };
                let stats = self.world.class_stats(class)?;
                self.player.choose_class(class, stats);
                self.set_phase(GamePhase::Playing);
                self.log.success(format!("CLASS CONFIRMED: {class}."));
                self.log.info("INITIATING NEURAL LINK...");
                self.explorer().execute(Command::Look)?;
                Ok(())
            }
        }
    }

    fn do_explore(&mut self, cmd: &str) -> SessionResult<()> {
        let outcome = self.explorer().handle_command(cmd)?;
        if outcome.moved {
            self.save();
        }
        self.combat = outcome.encounter;
        Ok(())
    }

    fn do_combat(&mut self, mut combat: Combat, cmd: &str) -> SessionResult<()> {
        let mut ctx = CombatContext {
            world: &self.world,
            player: &mut self.player,
            log: &mut self.log,
            dice: self.dice.as_mut(),
        };
        match combat.handle_command(&mut ctx, cmd) {
            CombatOutcome::Ongoing => self.combat = Some(combat),
            CombatOutcome::Fled => {}
            CombatOutcome::Defeat => self.set_phase(GamePhase::GameOver),
            CombatOutcome::Victory { template_id } => {
                if self.world.is_final_boss(&template_id) {
                    self.log.success("THE GATE COLLAPSES. HAWKINS IS SAFE.");
                    self.log.system("TYPE 'RESTART' TO BEGIN AGAIN.");
                    self.set_phase(GamePhase::Victory);
                }
            }
        }
        Ok(())
    }

    fn explorer(&mut self) -> Explorer<'_> {
        Explorer {
            world: &self.world,
            player: &mut self.player,
            log: &mut self.log,
            dice: self.dice.as_mut(),
            boss_hp_threshold: self.config.boss_hp_threshold,
        }
    }

    fn save(&mut self) {
        let data = SaveData::capture(&self.player, &self.log, self.config.history_limit);
        if let Err(e) = self.store.save(&data) {
            warn!(error = %e, "could not save game");
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!(from = %self.phase, to = %phase, "phase changed");
            self.phase = phase;
        }
    }
}

fn fresh_player(world: &World) -> SessionResult<PlayerState> {
    Ok(PlayerState::new(
        world.start_location.clone(),
        world.unclassed_stats()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use hk_mechanics::ScriptedDice;

    fn session_with(store: MemoryStore, rolls: &[u32]) -> GameSession {
        let world = World::hawkins().unwrap();
        GameSession::new(world, GameConfig::default(), Box::new(store))
            .unwrap()
            .with_dice(Box::new(ScriptedDice::with_rolls(rolls.iter().copied())))
    }

    fn session(rolls: &[u32]) -> GameSession {
        session_with(MemoryStore::new(), rolls)
    }

    fn playing(class: &str, rolls: &[u32]) -> GameSession {
        let mut s = session(rolls);
        s.start();
        s.submit("hopper").unwrap();
        s.submit(class).unwrap();
        assert_eq!(s.phase(), GamePhase::Playing);
        s
    }

    #[test]
    fn new_session_is_off() {
        let s = session(&[]);
        assert_eq!(s.phase(), GamePhase::Off);
        assert_eq!(s.mode(), GameMode::Explore);
        assert_eq!(s.player().name, "Stranger");
        assert_eq!(s.player().class, None);
        assert_eq!(s.player().stats.max_hp, 160);
        assert!(s.history().is_empty());
    }

    #[test]
    fn input_ignored_while_off() {
        let mut s = session(&[]);
        s.submit("north").unwrap();
        assert!(s.history().is_empty());
    }

    #[test]
    fn fresh_start_boots_to_name_prompt() {
        let mut s = session(&[]);
        s.start();
        assert_eq!(s.phase(), GamePhase::StartScreen);
        assert_eq!(s.creation_step(), CreationStep::Name);
        assert_eq!(s.history().len(), BOOT_SEQUENCE.len() + 1);
        assert_eq!(s.history()[0].text, "SYSTEM_BOOT_SEQUENCE_INITIATED...");
        assert_eq!(s.log().last().unwrap().text, IDENTITY_PROMPT);
    }

    #[test]
    fn start_only_from_off() {
        let mut s = session(&[]);
        s.start();
        let len = s.history().len();
        s.start();
        assert_eq!(s.history().len(), len);
    }

    #[test]
    fn name_is_uppercased_and_truncated() {
        let mut s = session(&[]);
        s.start();
        s.submit("  eleven the great hero  ").unwrap();
        assert_eq!(s.player().name, "ELEVEN THE GREA");
        assert_eq!(s.creation_step(), CreationStep::Class);
        assert!(s.log().contains("> eleven the great hero"));
        assert!(s.log().contains("IDENTITY CONFIRMED: ELEVEN THE GREA"));
        assert!(s.log().contains("SELECT CLASS: FIGHTER, MAGE, ROGUE"));
    }

    #[test]
    fn invalid_class_keeps_prompting() {
        let mut s = session(&[]);
        s.start();
        s.submit("hopper").unwrap();
        s.submit("wizard").unwrap();
        assert!(s.log().contains("INVALID CLASS. CHOOSE FIGHTER, MAGE, OR ROGUE."));
        assert_eq!(s.phase(), GamePhase::StartScreen);
        assert_eq!(s.creation_step(), CreationStep::Class);

        s.submit("MaGe").unwrap();
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.player().class, Some(ClassType::Mage));
        assert_eq!(s.player().stats.max_hp, 80);
        assert_eq!(s.player().stats.mana, 150);
    }

    #[test]
    fn class_choice_shows_start_location() {
        let s = playing("rogue", &[]);
        assert!(s.log().contains("CLASS CONFIRMED: ROGUE."));
        assert!(s.log().contains("INITIATING NEURAL LINK..."));
        assert!(s.log().contains("[TOWN CENTER (SAFE ZONE)]"));
        assert!(s.log().contains("You stand in the Town Center."));
    }

    #[test]
    fn blank_lines_are_dropped() {
        let mut s = playing("fighter", &[]);
        let len = s.history().len();
        s.submit("   ").unwrap();
        assert_eq!(s.history().len(), len);
    }

    #[test]
    fn every_line_is_echoed() {
        let mut s = playing("fighter", &[]);
        s.submit("Dance").unwrap();
        let tail = s.log().tail(2);
        assert_eq!(tail[0].text, "> Dance");
        assert_eq!(tail[1].text, "UNKNOWN COMMAND.");
    }

    #[test]
    fn pause_blocks_input() {
        let mut s = playing("fighter", &[]);
        s.pause();
        assert_eq!(s.phase(), GamePhase::Paused);
        let len = s.history().len();
        s.submit("west").unwrap();
        assert_eq!(s.history().len(), len);
        assert_eq!(s.player().current_location_id, "town_square");

        s.resume();
        assert_eq!(s.phase(), GamePhase::Playing);
        s.submit("west").unwrap();
        assert_eq!(s.player().current_location_id, "scrap_yard");
    }

    #[test]
    fn pause_only_while_playing() {
        let mut s = session(&[]);
        s.start();
        s.pause();
        assert_eq!(s.phase(), GamePhase::StartScreen);
        s.resume();
        assert_eq!(s.phase(), GamePhase::StartScreen);
        s.turn_off();
        assert_eq!(s.phase(), GamePhase::Off);
    }

    #[test]
    fn moving_saves_and_guardian_starts_combat() {
        let mut s = playing("fighter", &[]);
        s.submit("south").unwrap();
        assert_eq!(s.mode(), GameMode::Combat);
        assert_eq!(s.enemy().unwrap().template_id, "void_hawk");

        let save = s.store().load().unwrap();
        assert_eq!(save.player.current_location_id, "quarry_edge");
        assert_eq!(save.player.class, Some(ClassType::Fighter));
        assert!(save.history.len() <= 50);
    }

    #[test]
    fn looking_does_not_save() {
        let mut s = playing("fighter", &[]);
        s.submit("look").unwrap();
        assert!(s.store().load().is_none());
    }

    #[test]
    fn history_limit_applies_to_saves() {
        let world = World::hawkins().unwrap();
        let config = GameConfig::default().with_history_limit(5);
        let mut s = GameSession::new(world, config, Box::new(MemoryStore::new()))
            .unwrap()
            .with_dice(Box::new(ScriptedDice::new()));
        s.start();
        s.submit("hopper").unwrap();
        s.submit("fighter").unwrap();
        s.submit("west").unwrap();
        assert_eq!(s.store().load().unwrap().history.len(), 5);
    }

    #[test]
    fn flee_returns_to_exploration() {
        let mut s = playing("fighter", &[20]);
        s.player.current_location_id = "scrap_yard".into();
        s.combat = Some(Combat::spawn(&s.world, "rust_walker", "rust_walker", 0, 80).unwrap());
        s.submit("flee").unwrap();
        assert_eq!(s.mode(), GameMode::Explore);
        assert!(s.enemy().is_none());
        assert!(s.log().contains("You scramble away into the shadows!"));
    }

    #[test]
    fn defeat_ends_the_game_until_restart() {
        // Miss with a natural 1, then the hawk hits for the minimum 1 damage.
        let mut s = playing("fighter", &[1, 20, 1, 1]);
        s.submit("south").unwrap();
        s.player.stats.hp = 1;
        s.submit("attack").unwrap();
        assert_eq!(s.player().stats.hp, 0);
        assert_eq!(s.phase(), GamePhase::GameOver);
        assert!(s.log().contains("CRITICAL FAILURE. VITAL SIGNS FLATLINING..."));

        let len = s.history().len();
        s.submit("attack").unwrap();
        assert_eq!(s.history().len(), len + 2);
        assert_eq!(s.log().last().unwrap().text, GAME_OVER_PROMPT);
        assert_eq!(s.player().stats.hp, 0);

        s.submit("restart").unwrap();
        assert_eq!(s.phase(), GamePhase::StartScreen);
        assert_eq!(s.creation_step(), CreationStep::Name);
        assert_eq!(s.mode(), GameMode::Explore);
        assert_eq!(s.player().class, None);
        assert_eq!(s.player().current_location_id, "town_square");
        assert!(s.store().load().is_none());
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history()[0].text, "SYSTEM REBOOTED. MEMORY CLEARED.");
        assert_eq!(s.history()[1].text, IDENTITY_PROMPT);
    }

    #[test]
    fn final_boss_victory_ends_the_game() {
        let mut s = playing("fighter", &[20, 1]);
        s.player.current_location_id = "gate_nexus".into();
        let mut combat = Combat::spawn(&s.world, "veiled_mind", "veiled_mind", 9, 80).unwrap();
        combat.enemy_mut().hp = 1;
        s.combat = Some(combat);

        s.submit("attack").unwrap();
        assert_eq!(s.phase(), GamePhase::Victory);
        assert!(s.player().has_flag("killed_veiled_mind"));
        assert!(s.player().has_item("map_fragment_4"));
        assert!(s.log().contains("THE GATE COLLAPSES. HAWKINS IS SAFE."));

        s.submit("look").unwrap();
        assert_eq!(s.log().last().unwrap().text, GAME_OVER_PROMPT);
    }

    #[test]
    fn ordinary_victory_keeps_playing() {
        let mut s = playing("fighter", &[20, 1]);
        s.player.current_location_id = "scrap_yard".into();
        s.combat = Some(Combat::spawn(&s.world, "possessed_rat", "possessed_rat", 0, 80).unwrap());
        s.submit("attack").unwrap();
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.mode(), GameMode::Explore);
        assert_eq!(s.player().kill_count, 1);
    }

    #[test]
    fn restart_is_unknown_while_playing() {
        let mut s = playing("fighter", &[]);
        s.submit("restart").unwrap();
        assert!(s.log().contains("UNKNOWN COMMAND."));
        assert_eq!(s.phase(), GamePhase::Playing);
    }

    #[test]
    fn saved_game_is_restored() {
        let mut first = playing("rogue", &[]);
        first.submit("east").unwrap();
        let save = first.store().load().unwrap();

        let mut store = MemoryStore::new();
        store.save(&save).unwrap();
        let mut second = session_with(store, &[]);
        second.start();
        assert_eq!(second.phase(), GamePhase::Playing);
        assert_eq!(second.mode(), GameMode::Explore);
        assert_eq!(second.player(), &save.player);
        assert_eq!(second.player().current_location_id, "arcade");
        assert_eq!(second.history().len(), save.history.len() + 1);
        assert_eq!(second.log().last().unwrap().text, "SAVED SESSION RESTORED.");
    }

    #[test]
    fn corrupt_save_starts_fresh() {
        let mut s = session_with(MemoryStore::with_raw("{{{"), &[]);
        s.start();
        assert_eq!(s.phase(), GamePhase::StartScreen);
    }

    #[test]
    fn save_from_another_world_starts_fresh() {
        let world = World::hawkins().unwrap();
        let mut player = PlayerState::new("atlantis", world.class_stats(ClassType::Fighter).unwrap());
        player.class = Some(ClassType::Fighter);
        let mut store = MemoryStore::new();
        store
            .save(&SaveData::capture(&player, &GameLog::new(), 50))
            .unwrap();

        let mut s = session_with(store, &[]);
        s.start();
        assert_eq!(s.phase(), GamePhase::StartScreen);
        assert!(!s.log().contains("SAVED SESSION RESTORED."));
        s.submit("hopper").unwrap();
        s.submit("fighter").unwrap();
        s.submit("look").unwrap();
        assert_eq!(s.player().current_location_id, "town_square");
        assert!(s.log().contains("[TOWN CENTER (SAFE ZONE)]"));
    }

    #[test]
    fn unknown_previous_location_starts_fresh() {
        let mut first = playing("rogue", &[]);
        first.submit("east").unwrap();
        let mut save = first.store().load().unwrap();
        save.player.previous_location_id = Some("hawkins_lab_basement".into());

        let mut store = MemoryStore::new();
        store.save(&save).unwrap();
        let mut second = session_with(store, &[]);
        second.start();
        assert_eq!(second.phase(), GamePhase::StartScreen);
        assert_eq!(second.player().current_location_id, "town_square");
    }

    #[test]
    fn seeded_sessions_roll_alike() {
        let run = || {
            let world = World::hawkins().unwrap();
            let config = GameConfig::default().with_seed(99);
            let mut s = GameSession::new(world, config, Box::new(MemoryStore::new())).unwrap();
            s.start();
            s.submit("hopper").unwrap();
            s.submit("fighter").unwrap();
            for cmd in ["west", "east", "west", "east", "west"] {
                if s.mode() == GameMode::Explore {
                    s.submit(cmd).unwrap();
                }
            }
            (
                s.player().current_location_id.clone(),
                s.enemy().map(|e| (e.template_id.clone(), e.hp)),
            )
        };
        assert_eq!(run(), run());
    }
}
