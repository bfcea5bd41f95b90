//! Game mechanics for Hawkins.
//!
//! Provides permissive dice formulas behind an injectable [`DiceSource`],
//! kill-count encounter scaling, and the turn-based [`Combat`] resolver.
//! Everything here is synchronous: one command in, log lines and state
//! changes out.

pub mod combat;
pub mod dice;
pub mod error;
pub mod scaling;

pub use combat::{Combat, CombatAction, CombatContext, CombatOutcome, Enemy, Spell};
pub use dice::{DiceFormula, DiceSource, RollResult, ScriptedDice, roll_nds};
pub use error::{MechError, MechResult};
pub use scaling::{DEFAULT_BOSS_HP_THRESHOLD, ScalingBand, band_for};
