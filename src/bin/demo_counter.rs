// Quick demonstration of executing and undoing counter commands
// Run with: RUST_LOG=debug cargo run --bin demo_counter [config.ron]

use command_pattern::{
    AddOneCommand, CommandManager, CounterStore, ManagerConfig, ResetCounterCommand,
    SetCounterCommand,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ManagerConfig::load(path)?,
        None => ManagerConfig::default(),
    };

    println!("🔁 Command Pattern - Undo Demo");
    println!("==============================");

    let store = CounterStore::new(0);
    let mut manager = CommandManager::from_config(&config);

    manager.execute(Box::new(AddOneCommand::new(store.clone()))).await?;
    manager.execute(Box::new(AddOneCommand::new(store.clone()))).await?;
    println!("✅ After two AddOne: {}", store.get().await);

    manager
        .execute(Box::new(SetCounterCommand::new(store.clone(), 40)))
        .await?;
    manager.execute(Box::new(AddOneCommand::new(store.clone()))).await?;
    println!("✅ After SetCounter(40) + AddOne: {}", store.get().await);

    manager
        .execute(Box::new(ResetCounterCommand::new(store.clone())))
        .await?;
    println!("✅ After ResetCounter: {}", store.get().await);

    println!("\n📜 History (oldest first): {:?}", manager.history_names());

    let report = manager.undo().await;

    println!("\n↩️  Undo drained {} commands:", report.total());
    println!("   - Undone: {}", report.undone);
    println!("   - Unsupported: {}", report.unsupported);
    println!("   - Failed: {}", report.failed);
    println!("   - Counter now: {}", store.get().await);

    Ok(())
}
