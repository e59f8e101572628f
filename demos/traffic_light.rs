//! Traffic Light State Machine
//!
//! This example walks a cyclic state machine forwards and backwards.
//!
//! Key concepts:
//! - Event-driven transitions with `trigger`
//! - Direct jumps with `change_state`
//! - Undo/redo over the visited-state history
//!
//! Run with: RUST_LOG=undo_fsm=debug cargo run --example traffic_light

use undo_fsm::{machine_config, MachineError, StateMachine};

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "undo_fsm=info".to_string()))
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = machine_config! {
        initial: "green",
        states: {
            "green" => { "next" => "yellow", "emergency" => "red" },
            "yellow" => { "next" => "red" },
            "red" => { "next" => "green" },
        }
    };
    let mut machine = StateMachine::new(config);

    println!("Initial state: {}", machine.state());
    println!("States: {:?}", machine.states(None));
    println!("Emergency stop possible from: {:?}\n", machine.states(Some("emergency")));

    machine.trigger("next")?;
    println!("next      -> {}", machine.state());
    machine.trigger("next")?;
    println!("next      -> {}", machine.state());

    let undone = machine.undo();
    println!("undo      -> {} (moved: {})", machine.state(), undone);
    let redone = machine.redo();
    println!("redo      -> {} (moved: {})", machine.state(), redone);

    match machine.change_state("blue") {
        Ok(()) => println!("change    -> {}", machine.state()),
        Err(err) => println!("change    -> rejected: {}", err),
    }

    machine.reset();
    println!("reset     -> {}", machine.state());

    let path: Vec<_> = machine.history().states().collect();
    println!("\nHistory: {}", path.join(" -> "));

    machine.clear_history();
    println!("History cleared, undo available: {}", machine.undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
