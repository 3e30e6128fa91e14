//! Counter Store
//!
//! This demo wires the counter reducer into a store, subscribes a logger,
//! and walks through the basic scenarios.
//!
//! Key concepts:
//! - One store, one state, replaced only through dispatch
//! - Subscribers read the new state via `get_state`
//! - Unknown action types leave the state unchanged
//!
//! Actions can also be passed as JSON on the command line:
//!
//! Run with: cargo run --example counter -- '{"type":"ADD"}' '{"type":"NOPE"}'

use tracing::info;
use tracing_subscriber::EnvFilter;
use unistore::counter::{counter_store, decrement, increment, reset, CounterAction};

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Counter Store Example ===\n");

    let store = counter_store();

    let reader = store.clone();
    let unsubscribe = store.subscribe(move || {
        let state = reader.get_state();
        match serde_json::to_string(&*state) {
            Ok(json) => println!("{json}"),
            Err(err) => info!(%err, "state could not be rendered"),
        }
    });

    println!("Initial state: {}", serde_json::to_string(&*store.get_state())?);

    println!("\n--- Incrementing ---");
    increment(&store);
    increment(&store);

    println!("\n--- Decrementing ---");
    decrement(&store);

    println!("\n--- Resetting ---");
    reset(&store);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        println!("\n--- Command line actions ---");
        for arg in &args {
            let action: CounterAction = serde_json::from_str(arg)?;
            info!(?action, "dispatching");
            store.dispatch(action);
        }
    }

    unsubscribe.unsubscribe();
    info!(metadata = ?store.metadata(), "done");

    println!("\n=== Example Complete ===");
    Ok(())
}
