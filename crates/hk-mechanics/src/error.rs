//! Error types for the mechanics engine.

use hk_core::CoreError;

/// Errors that can occur during mechanics operations.
///
/// In-game rule violations are never errors; they are logged and play
/// continues. This type only covers broken world data.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// An encounter referenced data missing from the world.
    #[error(transparent)]
    World(#[from] CoreError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
