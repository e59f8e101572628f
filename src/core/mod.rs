//! Core configuration and history types.
//!
//! This module contains the data the machine operates on:
//! - The declarative configuration (states and their transition tables)
//! - The ordered log of visited states
//!
//! Nothing here mutates on its own; `StateMachine` drives all changes.

mod config;
mod error;
mod history;

pub use config::{MachineConfig, StateDefinition, StateTable};
pub use error::ConfigError;
pub use history::{History, HistoryEntry};
