//! Error types for the exploration engine.

use hk_core::CoreError;
use hk_mechanics::MechError;
use thiserror::Error;

/// Result type for exploration operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during exploration.
///
/// Bad player input is never an error; it is narrated and play goes on.
/// These variants only surface when the world data itself is inconsistent.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A location or enemy lookup failed.
    #[error(transparent)]
    World(#[from] CoreError),

    /// An encounter could not be spawned.
    #[error(transparent)]
    Mechanics(#[from] MechError),
}
