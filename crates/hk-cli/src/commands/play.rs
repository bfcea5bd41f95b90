//! Run an interactive game on stdin and stdout.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::{ColoredString, Colorize};
use tracing::info;

use hk_core::{LogEntry, LogKind, World};
use hk_session::{GameConfig, GamePhase, GameSession, JsonFileStore, MemoryStore, SaveStore};

/// Play until `quit` or end of input.
///
/// The slot at `save` is restored on boot and rewritten after every move,
/// unless `no_save` keeps everything in memory. `seed` makes the dice
/// repeatable.
pub fn run(save: &Path, no_save: bool, seed: Option<u64>) -> Result<(), String> {
    let world = World::hawkins().map_err(|e| format!("cannot load world: {e}"))?;
    let mut config = GameConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let store: Box<dyn SaveStore> = if no_save {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::new(save))
    };
    info!(save = %save.display(), no_save, ?seed, "starting session");

    let mut session =
        GameSession::new(world, config, store).map_err(|e| format!("failed to start session: {e}"))?;
    session.start();

    let mut feed = Feed::default();
    feed.print_new(&session);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        match input.to_lowercase().as_str() {
            "quit" | "q" => break,
            ":pause" => {
                session.pause();
                if session.phase() == GamePhase::Paused {
                    println!("{}", "-- PAUSED (:resume to continue) --".cyan());
                }
            }
            ":resume" => session.resume(),
            _ => session
                .submit(input)
                .map_err(|e| format!("session error: {e}"))?,
        }
        feed.print_new(&session);
    }

    Ok(())
}

/// Prints each log entry once, starting over when the log is replaced.
#[derive(Default)]
struct Feed {
    shown: usize,
    first: Option<LogEntry>,
}

impl Feed {
    fn print_new(&mut self, session: &GameSession) {
        let history = session.history();
        if history.len() < self.shown || history.first() != self.first.as_ref() {
            self.shown = 0;
            self.first = history.first().cloned();
        }
        for entry in &history[self.shown..] {
            println!("{}", paint(entry));
        }
        self.shown = history.len();
    }
}

fn paint(entry: &LogEntry) -> ColoredString {
    let text = entry.text.as_str();
    match entry.kind {
        LogKind::Info => text.normal(),
        LogKind::Error => text.red(),
        LogKind::Success => text.green(),
        LogKind::Combat => text.magenta(),
        LogKind::System => text.cyan(),
        LogKind::Dialogue => text.yellow(),
    }
}
