//! Randomized checks of the undo drain
//!
//! Builds histories of random length where each command's undo randomly
//! succeeds, declines or fails, then checks ordering, counts and log output.

use async_trait::async_trait;
use command_pattern::{Command, CommandError, CommandManager, CommandResult, MemoryLogger};
use log::Level;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy)]
enum UndoOutcome {
    Ok,
    Unsupported,
    Failed,
}

struct ScriptedCommand {
    id: usize,
    outcome: UndoOutcome,
    undone: Arc<Mutex<Vec<usize>>>,
}

#[async_trait]
impl Command for ScriptedCommand {
    async fn execute(&mut self) -> CommandResult<()> {
        tokio::task::yield_now().await;
        Ok(())
    }

    async fn undo(&mut self) -> CommandResult<()> {
        tokio::task::yield_now().await;
        self.undone.lock().unwrap().push(self.id);

        match self.outcome {
            UndoOutcome::Ok => Ok(()),
            UndoOutcome::Unsupported => Err(CommandError::UndoUnsupported),
            UndoOutcome::Failed => Err(CommandError::UndoFailed(format!("command {}", self.id))),
        }
    }
}

#[tokio::test]
async fn test_random_histories_drain_in_reverse() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let logger = Arc::new(MemoryLogger::new());
        let mut manager = CommandManager::new(logger.clone());
        let undone = Arc::new(Mutex::new(Vec::new()));

        let len = rng.gen_range(0..20);
        let mut expected = (0usize, 0usize, 0usize);

        for id in 0..len {
            let outcome = match rng.gen_range(0..3) {
                0 => {
                    expected.0 += 1;
                    UndoOutcome::Ok
                }
                1 => {
                    expected.1 += 1;
                    UndoOutcome::Unsupported
                }
                _ => {
                    expected.2 += 1;
                    UndoOutcome::Failed
                }
            };

            manager
                .execute(Box::new(ScriptedCommand {
                    id,
                    outcome,
                    undone: Arc::clone(&undone),
                }))
                .await
                .unwrap();
        }
        assert_eq!(manager.len(), len);

        let report = manager.undo().await;

        let order = undone.lock().unwrap().clone();
        let reversed: Vec<usize> = (0..len).rev().collect();
        assert_eq!(order, reversed, "each command undone once, newest first");

        assert!(manager.is_empty());
        assert_eq!(report.total(), len);
        assert_eq!((report.undone, report.unsupported, report.failed), expected);

        // One debug entry per attempt, one outcome entry per command
        assert_eq!(logger.count(Level::Debug), len);
        assert_eq!(logger.count(Level::Info), expected.0 + expected.1);
        assert_eq!(logger.count(Level::Error), expected.2);
    }
}

#[tokio::test]
async fn test_default_name_is_type_name() {
    let undone = Arc::new(Mutex::new(Vec::new()));
    let mut manager = CommandManager::default();

    manager
        .execute(Box::new(ScriptedCommand {
            id: 0,
            outcome: UndoOutcome::Ok,
            undone,
        }))
        .await
        .unwrap();

    let name = manager.peek_name().unwrap();
    assert!(name.ends_with("ScriptedCommand"), "unexpected name {}", name);
}
