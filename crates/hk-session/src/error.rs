//! Error types for the game session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while running a session.
///
/// Rule violations made by the player never show up here; they go to the
/// narrative log.
#[derive(Debug, Error)]
pub enum SessionError {
    /// World data error.
    #[error(transparent)]
    World(#[from] hk_core::CoreError),

    /// Combat engine error.
    #[error(transparent)]
    Mechanics(#[from] hk_mechanics::MechError),

    /// Exploration engine error.
    #[error(transparent)]
    Fiction(#[from] hk_fiction::FictionError),

    /// Save slot could not be read or written.
    #[error("save slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Save data could not be encoded.
    #[error("save data error: {0}")]
    Encode(#[from] serde_json::Error),
}
