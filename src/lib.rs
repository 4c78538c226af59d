// Command pattern - Library exports for tests and the demo binary

pub mod command;
pub mod config;
pub mod logging;

// Re-export commonly used types for convenience
pub use command::commands::{AddOneCommand, ResetCounterCommand, SetCounterCommand};
pub use command::{
    Command, CommandError, CommandManager, CommandResult, CounterStore, UndoReport,
};
pub use config::{ConfigError, ManagerConfig};
pub use logging::{CommandLogger, FacadeLogger, LogMessage, MemoryLogger};
