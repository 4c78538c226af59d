// Logging sinks handed to the CommandManager
//
// The manager never logs through global state: it receives a CommandLogger
// at construction. FacadeLogger forwards to the `log` crate so any installed
// backend (env_logger in the demo binary) picks entries up. MemoryLogger keeps
// entries in memory so callers and tests can inspect what was reported.

use log::Level;
use std::sync::{Mutex, PoisonError};

/// Default `log` target used by [`FacadeLogger`]
pub const DEFAULT_TARGET: &str = "command_pattern";

/// Leveled logging capability injected into the manager
pub trait CommandLogger: Send + Sync {
    /// Record `message` at `level`
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Forwards entries to the `log` facade under a fixed target
#[derive(Debug, Clone)]
pub struct FacadeLogger {
    target: String,
}

impl FacadeLogger {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for FacadeLogger {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl CommandLogger for FacadeLogger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: self.target.as_str(), level, "{}", message);
    }
}

/// A single entry recorded by [`MemoryLogger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub level: Level,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Records every entry in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: Mutex<Vec<LogMessage>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn messages(&self) -> Vec<LogMessage> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&self) -> Vec<LogMessage> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    /// Number of entries recorded at exactly `level`
    pub fn count(&self, level: Level) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|m| m.level == level)
            .count()
    }

    /// Whether an entry at `level` contains `needle`
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|m| m.level == level && m.message.contains(needle))
    }
}

impl CommandLogger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        // A poisoned lock only means another thread panicked mid-push
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogMessage::new(level, message));
    }
}
