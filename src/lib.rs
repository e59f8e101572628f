//! Undo-FSM: a small finite state machine with history navigation.
//!
//! A machine is driven by a declarative configuration of states and named
//! events. It tracks the current state, validates every move, and records
//! each state it enters so callers can step backwards and forwards.
//!
//! # Core Concepts
//!
//! - **Configuration**: initial state plus a transition table per state
//! - **Trigger**: follow the current state's rule for an event
//! - **Change state**: jump to any declared state
//! - **History**: ordered log of entered states, navigated by undo/redo
//!
//! # Example
//!
//! ```rust
//! use undo_fsm::{ConfigBuilder, MachineError, StateMachine};
//!
//! let config = ConfigBuilder::new()
//!     .initial("green")
//!     .state("green", |s| s.on("next", "yellow"))
//!     .state("yellow", |s| s.on("next", "red"))
//!     .state("red", |s| s.on("next", "green"))
//!     .build()
//!     .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("next").unwrap();
//! assert_eq!(machine.state(), "yellow");
//! assert_eq!(machine.states(Some("next")), vec!["green", "yellow", "red"]);
//!
//! assert!(matches!(
//!     machine.trigger("stop"),
//!     Err(MachineError::InvalidTransition { .. })
//! ));
//! ```
//!
//! # History quirks
//!
//! Undo and redo search history by state name. Undo steps back from the
//! *first* occurrence of the current state. Redo is allowed only when an
//! entry follows the *last* occurrence, yet moves to the entry after the
//! first one. With repeated state names the two can disagree.

pub mod builder;
pub mod core;
pub mod fsm;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use crate::core::{ConfigError, History, MachineConfig, StateDefinition, StateTable};
pub use fsm::{MachineError, StateMachine};
