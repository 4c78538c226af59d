// CommandManager - Executes commands and drains them on undo

use crate::command::trait_def::{Command, CommandError, CommandResult};
use crate::config::ManagerConfig;
use crate::logging::{CommandLogger, FacadeLogger};
use std::sync::Arc;

/// Upper bound on the capacity reserved up front, whatever the config asks for
const MAX_INITIAL_CAPACITY: usize = 1024;

/// Outcome of a bulk undo
///
/// `undo()` never fails from the caller's point of view; this only tells how
/// each drained command fared. The details are in the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoReport {
    /// Commands whose undo succeeded
    pub undone: usize,
    /// Commands that declined undo with `UndoUnsupported`
    pub unsupported: usize,
    /// Commands whose undo failed for any other reason
    pub failed: usize,
}

impl UndoReport {
    /// Number of commands drained from the history
    pub fn total(&self) -> usize {
        self.undone + self.unsupported + self.failed
    }

    /// True when every drained command was undone
    pub fn is_clean(&self) -> bool {
        self.unsupported == 0 && self.failed == 0
    }
}

/// Manages command execution and bulk undo
///
/// The history is a stack of every command handed to `execute()` that has
/// not been undone yet, oldest at the bottom.
///
/// When a command is executed:
/// 1. Push it onto the history
/// 2. Await its `execute()`
///
/// The push happens first, so a command whose execution fails stays on the
/// history and is undone like any other.
///
/// `undo()` drains the whole history newest-first. Per-command failures are
/// logged and never stop the drain.
pub struct CommandManager {
    /// Executed commands (most recent at the back)
    history: Vec<Box<dyn Command>>,

    /// Sink for undo progress and failures
    logger: Arc<dyn CommandLogger>,

    /// Whether to log before each undo attempt
    trace_undo: bool,
}

impl CommandManager {
    /// Create a new CommandManager reporting to `logger`
    pub fn new(logger: Arc<dyn CommandLogger>) -> Self {
        Self::with_config(logger, &ManagerConfig::default())
    }

    /// Create a new CommandManager with custom settings
    ///
    /// `initial_capacity` is clamped to 1024; the history still grows past it.
    pub fn with_config(logger: Arc<dyn CommandLogger>, config: &ManagerConfig) -> Self {
        Self {
            history: Vec::with_capacity(config.initial_capacity.min(MAX_INITIAL_CAPACITY)),
            logger,
            trace_undo: config.trace_undo,
        }
    }

    /// Create a manager that forwards to the `log` facade under the configured target
    pub fn from_config(config: &ManagerConfig) -> Self {
        Self::with_config(
            Arc::new(FacadeLogger::new(config.log_target.clone())),
            config,
        )
    }

    /// Execute a command and record it in the history
    ///
    /// # Errors
    /// Returns whatever the command's `execute()` returns. The command is
    /// still on the history in that case.
    pub async fn execute(&mut self, command: Box<dyn Command>) -> CommandResult<()> {
        let index = self.history.len();
        self.history.push(command);

        self.history[index].execute().await
    }

    /// Execute a command that may be absent
    ///
    /// # Errors
    /// Returns `CommandError::InvalidArgument` for `None`, leaving the history
    /// untouched. Otherwise behaves like [`CommandManager::execute`].
    pub async fn execute_optional(
        &mut self,
        command: Option<Box<dyn Command>>,
    ) -> CommandResult<()> {
        let command = command
            .ok_or_else(|| CommandError::InvalidArgument("command must not be None".into()))?;
        self.execute(command).await
    }

    /// Undo every command in the history, most recent first
    ///
    /// Each command is undone exactly once. `UndoUnsupported` is logged at
    /// info level, any other error at error level; neither stops the drain.
    /// The history is empty afterwards.
    pub async fn undo(&mut self) -> UndoReport {
        let mut report = UndoReport::default();

        while let Some(mut command) = self.history.pop() {
            let name = command.name().to_string();

            if self.trace_undo {
                self.logger.debug(&format!("Undoing command {}", name));
            }

            match command.undo().await {
                Ok(()) => {
                    report.undone += 1;
                    self.logger
                        .info(&format!("Command {} was undone successfully", name));
                }
                Err(CommandError::UndoUnsupported) => {
                    report.unsupported += 1;
                    self.logger.info(&format!(
                        "Undo operation not implemented for command {}",
                        name
                    ));
                }
                Err(e) => {
                    report.failed += 1;
                    self.logger.error(&format!(
                        "An error occurred while undoing command {}: {}",
                        name, e
                    ));
                }
            }
        }

        report
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get the number of commands in the history
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Name of the command that would be undone first
    pub fn peek_name(&self) -> Option<&str> {
        self.history.last().map(|cmd| cmd.name())
    }

    /// Names of the commands in the history, oldest first
    pub fn history_names(&self) -> Vec<&str> {
        self.history.iter().map(|cmd| cmd.name()).collect()
    }
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new(Arc::new(FacadeLogger::default()))
    }
}
