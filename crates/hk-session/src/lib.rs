//! Game session for Hawkins.
//!
//! Routes each submitted line to character creation, exploration, or
//! combat according to the session phase, and keeps the single save slot
//! up to date after every move.

/// Session configuration.
pub mod config;
/// Error types for the session.
pub mod error;
/// Phase, mode, and creation step enums.
pub mod phase;
/// The top-level command dispatcher.
pub mod session;
/// Save slot storage.
pub mod store;

pub use config::GameConfig;
pub use error::{SessionError, SessionResult};
pub use phase::{CreationStep, GameMode, GamePhase};
pub use session::{BOOT_SEQUENCE, GameSession};
pub use store::{DEFAULT_SAVE_FILE, JsonFileStore, MemoryStore, SaveData, SaveStore};
