//! CLI frontend for the Hawkins terminal adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use hk_session::DEFAULT_SAVE_FILE;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter.
const LOG_ENV: &str = "HAWKINS_LOG";

#[derive(Parser)]
#[command(
    name = "hawkins",
    about = "Hawkins: a retro terminal RPG in a town gone wrong",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, resuming the saved game if there is one
    Play {
        /// Save slot file
        #[arg(short, long, default_value = DEFAULT_SAVE_FILE)]
        save: PathBuf,

        /// Keep the game in memory only
        #[arg(long)]
        no_save: bool,

        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Delete the saved game
    Reset {
        /// Save slot file
        #[arg(short, long, default_value = DEFAULT_SAVE_FILE)]
        save: PathBuf,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            save,
            no_save,
            seed,
        } => commands::play::run(&save, no_save, seed),
        Commands::Reset { save } => commands::reset::run(&save),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Diagnostics go to stderr so they never mix with the game on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
