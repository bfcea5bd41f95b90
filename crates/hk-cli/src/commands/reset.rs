//! Delete the saved game.

use std::path::Path;

use colored::Colorize;

use hk_session::{JsonFileStore, SaveStore};

/// Clear the save slot at `save`. A missing slot is not an error.
pub fn run(save: &Path) -> Result<(), String> {
    let existed = save.exists();
    JsonFileStore::new(save)
        .clear()
        .map_err(|e| format!("cannot clear {}: {e}", save.display()))?;

    if existed {
        println!("  {} {}", "Cleared".bold(), save.display());
    } else {
        println!("  No saved game at {}", save.display());
    }
    Ok(())
}
