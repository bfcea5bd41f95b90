use crate::class::ClassType;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or querying a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested location ID does not exist in the world.
    #[error("location not found: {0}")]
    LocationNotFound(String),

    /// The requested enemy ID does not exist in the world.
    #[error("enemy not found: {0}")]
    EnemyNotFound(String),

    /// The world defines no base stats for a playable class.
    #[error("no base stats defined for class {0}")]
    MissingClassStats(ClassType),

    /// A location refers to an ID that is not defined anywhere in the world.
    #[error("dangling reference in \"{location}\": {field} points to unknown id \"{target}\"")]
    DanglingReference {
        /// The location holding the reference.
        location: String,
        /// Which field held it (e.g. `exits.north`, `enemy_id`).
        field: String,
        /// The unresolved ID.
        target: String,
    },

    /// The world data could not be parsed.
    #[error("invalid world data: {0}")]
    InvalidData(#[from] serde_json::Error),
}
