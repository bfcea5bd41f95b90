//! Exploration engine for Hawkins.
//!
//! Parses free-text exploration commands and resolves them against the
//! world graph: movement through exits and locks, arrival triggers,
//! encounter rolls, and the read-only reports (look, map, status,
//! inventory). Combat itself lives in `hk-mechanics`; this crate only
//! decides when a fight starts.

/// Error types for the exploration engine.
pub mod error;
/// Exploration command handling and location changes.
pub mod explore;
/// Command parsing and item name resolution.
pub mod parser;

pub use error::{FictionError, FictionResult};
pub use explore::{ExploreOutcome, Explorer};
pub use parser::{Command, Direction, parse_command};
