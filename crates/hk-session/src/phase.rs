//! The session's top-level phase, nested mode, and creation step.

use serde::{Deserialize, Serialize};

/// Where the session is in its lifecycle.
///
/// `Off → StartScreen → Playing ⇄ Paused`, `Playing → GameOver | Victory`,
/// and any phase can be switched `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Powered down. Input is ignored.
    #[default]
    Off,
    /// Character creation.
    StartScreen,
    /// Exploring or fighting.
    Playing,
    /// Suspended. Input is ignored.
    Paused,
    /// The player died. Only `restart` is accepted.
    GameOver,
    /// The final boss fell. Only `restart` is accepted.
    Victory,
}

impl GamePhase {
    /// Whether submitted lines are ignored entirely.
    pub fn ignores_input(self) -> bool {
        matches!(self, Self::Off | Self::Paused)
    }

    /// Whether the game has ended and waits for a restart.
    pub fn is_ended(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "OFF"),
            Self::StartScreen => write!(f, "START_SCREEN"),
            Self::Playing => write!(f, "PLAYING"),
            Self::Paused => write!(f, "PAUSED"),
            Self::GameOver => write!(f, "GAME_OVER"),
            Self::Victory => write!(f, "VICTORY"),
        }
    }
}

/// What kind of command the session expects while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    /// Movement and inspection.
    #[default]
    Explore,
    /// A fight is in progress.
    Combat,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explore => write!(f, "EXPLORE"),
            Self::Combat => write!(f, "COMBAT"),
        }
    }
}

/// The two prompts of character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreationStep {
    /// Waiting for a display name.
    #[default]
    Name,
    /// Waiting for a class choice.
    Class,
}
