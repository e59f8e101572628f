//! End-to-end walk through a traffic light configuration.

use undo_fsm::{MachineConfig, MachineError, StateMachine};

const TRAFFIC_LIGHT: &str = r#"{
    "initial": "green",
    "states": {
        "green": { "transitions": { "next": "yellow" } },
        "yellow": { "transitions": { "next": "red" } },
        "red": { "transitions": { "next": "green" } }
    }
}"#;

fn machine() -> StateMachine {
    let config = MachineConfig::from_json(TRAFFIC_LIGHT).unwrap();
    config.validate().unwrap();
    StateMachine::new(config)
}

#[test]
fn cycle_with_undo_and_redo() {
    let mut machine = machine();

    machine.trigger("next").unwrap();
    assert_eq!(machine.state(), "yellow");
    assert_eq!(
        machine.history().states().collect::<Vec<_>>(),
        vec!["green", "yellow"]
    );

    machine.trigger("next").unwrap();
    assert_eq!(machine.state(), "red");
    assert_eq!(machine.history().len(), 3);

    assert!(machine.undo());
    assert_eq!(machine.state(), "yellow");

    assert!(machine.redo());
    assert_eq!(machine.state(), "red");

    let err = machine.change_state("unknown").unwrap_err();
    assert_eq!(
        err,
        MachineError::InvalidState {
            state: "unknown".to_string()
        }
    );
    assert_eq!(machine.state(), "red");
    assert_eq!(machine.history().len(), 3);
}

#[test]
fn states_follow_document_order() {
    let machine = machine();

    assert_eq!(machine.states(None), vec!["green", "yellow", "red"]);
    assert_eq!(machine.states(Some("next")), vec!["green", "yellow", "red"]);
    assert!(machine.states(Some("stop")).is_empty());
}

#[test]
fn errors_render_readable_messages() {
    let mut machine = machine();

    let err = machine.trigger("stop").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No transition for event 'stop' from state 'green'"
    );

    let err = machine.change_state("blue").unwrap_err();
    assert_eq!(err.to_string(), "State 'blue' is not declared");
}

#[test]
fn full_cycle_returns_to_start_and_undo_uses_first_visit() {
    let mut machine = machine();
    for _ in 0..3 {
        machine.trigger("next").unwrap();
    }
    // history: green, yellow, red, green
    assert_eq!(machine.state(), "green");

    // "green" first appears at the start of history
    assert!(!machine.undo());
    assert_eq!(machine.state(), "green");

    // and also last, so there is nothing to redo
    assert!(!machine.redo());
}
