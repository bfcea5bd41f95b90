//! Command parsing and item name resolution.

mod command;
mod resolver;

pub use command::{Command, Direction, parse_command};
pub use resolver::{normalize_item, suggest_item};
