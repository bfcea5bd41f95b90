//! Core types for Hawkins: the world model, player state, and the narrative log.
//!
//! This crate holds data only. Rules live in `hk-mechanics` and
//! `hk-fiction`; this crate just defines what they operate on. The built-in
//! world ships as JSON and is loaded with [`World::hawkins`].

/// ASCII art for enemy portraits and the restored map.
pub mod art;
/// Playable classes and their base stat blocks.
pub mod class;
/// Static enemy definitions.
pub mod enemy;
/// Error types used throughout the crate.
pub mod error;
/// Locations, locks, and arrival triggers.
pub mod location;
/// The append-only narrative log.
pub mod log;
/// The mutable, saveable player state.
pub mod player;
/// The static world definition and its lookups.
pub mod world;

/// Re-export class types.
pub use class::{ClassType, Stats};
/// Re-export enemy templates.
pub use enemy::EnemyTemplate;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export location types.
pub use location::{Location, LocationTrigger, LockedExit, RandomEncounter, TriggerEvent};
/// Re-export log types.
pub use log::{GameLog, LogEntry, LogKind};
/// Re-export player state.
pub use player::PlayerState;
/// Re-export the world model.
pub use world::World;
