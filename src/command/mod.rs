// Command Pattern with bulk undo
//
// Architecture:
// - Command trait: async execute() and undo(), plus a name for log entries
// - CommandManager: history stack, drained newest-first by undo()
// - Concrete commands: AddOneCommand, SetCounterCommand, ResetCounterCommand
//
// Undo failures never reach the caller of CommandManager::undo(). They are
// reported through the CommandLogger handed to the manager and summarized in
// the returned UndoReport.

pub mod commands;
pub mod manager;
pub mod state;
pub mod trait_def;

pub use manager::{CommandManager, UndoReport};
pub use state::CounterStore;
pub use trait_def::{Command, CommandError, CommandResult};
