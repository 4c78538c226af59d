// CounterStore - Shared integer that the demo commands modify
//
// Cloning a store hands out another handle to the same value, so a command
// can close over it while the caller keeps reading it.

use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory counter shared between commands and their caller
#[derive(Debug, Clone, Default)]
pub struct CounterStore {
    value: Arc<Mutex<i64>>,
}

impl CounterStore {
    /// Create a store holding `initial`
    pub fn new(initial: i64) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
        }
    }

    /// Current value
    pub async fn get(&self) -> i64 {
        *self.value.lock().await
    }

    /// Overwrite the value, returning what is now stored
    pub async fn set(&self, value: i64) -> i64 {
        let mut guard = self.value.lock().await;
        *guard = value;
        *guard
    }

    /// Add `delta` under a single lock, returning the new value
    ///
    /// Returns `None` and leaves the value untouched on overflow.
    pub async fn add(&self, delta: i64) -> Option<i64> {
        let mut guard = self.value.lock().await;
        *guard = guard.checked_add(delta)?;
        Some(*guard)
    }
}
