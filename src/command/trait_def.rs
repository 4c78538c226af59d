// Command trait definition

use async_trait::async_trait;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while executing or undoing a command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The manager was handed an absent command
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// The command does not support being undone
    #[error("Undo operation not implemented")]
    UndoUnsupported,

    /// Undo operation failed
    #[error("Undo failed: {0}")]
    UndoFailed(String),

    /// Invalid state for this operation
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// An executable, reversible unit of work
///
/// Commands close over whatever external state they act on; the manager
/// only drives `execute()` and `undo()`. Both may suspend (e.g. on I/O)
/// and both may fail.
///
/// `undo()` is expected to reverse the effect of `execute()`. Nothing
/// enforces this. A command that cannot be reversed should return
/// [`CommandError::UndoUnsupported`] so the manager can tell it apart from
/// a genuine failure.
///
/// # Thread Safety
/// Commands must be Send as the futures driving them may move between threads.
///
/// # Example
/// ```no_run
/// use async_trait::async_trait;
/// use command_pattern::command::trait_def::{Command, CommandError, CommandResult};
/// use command_pattern::command::state::CounterStore;
///
/// struct AddTen {
///     store: CounterStore,
/// }
///
/// #[async_trait]
/// impl Command for AddTen {
///     async fn execute(&mut self) -> CommandResult<()> {
///         self.store
///             .add(10)
///             .await
///             .map(|_| ())
///             .ok_or_else(|| CommandError::ExecutionFailed("overflow".into()))
///     }
///
///     async fn undo(&mut self) -> CommandResult<()> {
///         self.store
///             .add(-10)
///             .await
///             .map(|_| ())
///             .ok_or_else(|| CommandError::UndoFailed("underflow".into()))
///     }
/// }
/// ```
#[async_trait]
pub trait Command: Send {
    /// Execute the command
    async fn execute(&mut self) -> CommandResult<()>;

    /// Undo the command
    ///
    /// Return `Err(CommandError::UndoUnsupported)` to decline.
    async fn undo(&mut self) -> CommandResult<()>;

    /// Name used when the manager reports on this command
    ///
    /// Defaults to the concrete type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
