// Concrete command implementations over CounterStore

use crate::command::state::CounterStore;
use crate::command::trait_def::{Command, CommandError, CommandResult};
use async_trait::async_trait;

/// Command that increments the counter by one
///
/// Undo decrements it again; no old value is captured. Either direction
/// fails instead of wrapping when the counter is at its limit.
pub struct AddOneCommand {
    store: CounterStore,
}

impl AddOneCommand {
    pub fn new(store: CounterStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Command for AddOneCommand {
    async fn execute(&mut self) -> CommandResult<()> {
        self.store
            .add(1)
            .await
            .map(|_| ())
            .ok_or_else(|| CommandError::ExecutionFailed("Counter overflow".into()))
    }

    async fn undo(&mut self) -> CommandResult<()> {
        self.store
            .add(-1)
            .await
            .map(|_| ())
            .ok_or_else(|| CommandError::UndoFailed("Counter underflow".into()))
    }

    fn name(&self) -> &str {
        "AddOne"
    }
}

/// Command to overwrite the counter
///
/// It stores the old value on execute to enable undo.
pub struct SetCounterCommand {
    store: CounterStore,
    new_value: i64,
    old_value: Option<i64>,
}

impl SetCounterCommand {
    pub fn new(store: CounterStore, value: i64) -> Self {
        Self {
            store,
            new_value: value,
            old_value: None,
        }
    }
}

#[async_trait]
impl Command for SetCounterCommand {
    async fn execute(&mut self) -> CommandResult<()> {
        // Store old value for undo
        self.old_value = Some(self.store.get().await);
        self.store.set(self.new_value).await;
        Ok(())
    }

    async fn undo(&mut self) -> CommandResult<()> {
        let old_value = self
            .old_value
            .take()
            .ok_or_else(|| CommandError::UndoFailed("No previous value stored".into()))?;

        self.store.set(old_value).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "SetCounter"
    }
}

/// Command that resets the counter to zero and cannot be reversed
pub struct ResetCounterCommand {
    store: CounterStore,
}

impl ResetCounterCommand {
    pub fn new(store: CounterStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Command for ResetCounterCommand {
    async fn execute(&mut self) -> CommandResult<()> {
        self.store.set(0).await;
        Ok(())
    }

    async fn undo(&mut self) -> CommandResult<()> {
        Err(CommandError::UndoUnsupported)
    }

    fn name(&self) -> &str {
        "ResetCounter"
    }
}
