//! The narrative log: an append-only feed consumed by the presentation layer.
//!
//! The engine only ever appends; it never reads its own history to make
//! decisions. Persistence is the one consumer that looks back, and only to
//! keep the most recent entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category tag driving how an entry is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// Neutral narration.
    #[default]
    Info,
    /// A rule violation or failed action.
    Error,
    /// A successful action or reward.
    Success,
    /// Combat exchange.
    Combat,
    /// Spoken lines.
    Dialogue,
    /// Terminal/system chatter.
    System,
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
            Self::Success => write!(f, "success"),
            Self::Combat => write!(f, "combat"),
            Self::Dialogue => write!(f, "dialogue"),
            Self::System => write!(f, "system"),
        }
    }
}

/// A single line of narrative output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID.
    pub id: Uuid,
    /// The text to show.
    pub text: String,
    /// Presentation category.
    pub kind: LogKind,
    /// When the entry was appended.
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Create an entry stamped now.
    pub fn new(text: impl Into<String>, kind: LogKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// An ordered, append-only log of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vec<LogEntry>,
}

impl GameLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from saved entries.
    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry.
    pub fn push(&mut self, text: impl Into<String>, kind: LogKind) {
        self.entries.push(LogEntry::new(text, kind));
    }

    /// Append an [`LogKind::Info`] entry.
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text, LogKind::Info);
    }

    /// Append an [`LogKind::Error`] entry.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text, LogKind::Error);
    }

    /// Append a [`LogKind::Success`] entry.
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(text, LogKind::Success);
    }

    /// Append a [`LogKind::Combat`] entry.
    pub fn combat(&mut self, text: impl Into<String>) {
        self.push(text, LogKind::Combat);
    }

    /// Append a [`LogKind::System`] entry.
    pub fn system(&mut self, text: impl Into<String>) {
        self.push(text, LogKind::System);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The most recent `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// The last entry, if any.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry (used on restart).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether any entry's text contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.text.contains(needle))
    }
}
