//! Errors raised by machine operations.

use thiserror::Error;

/// Errors that can occur when moving the machine.
///
/// A failed call leaves the current state and the history exactly as they
/// were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// `change_state` was asked for a state that is not declared
    #[error("State '{state}' is not declared")]
    InvalidState { state: String },

    /// `trigger` found no rule for the event in the current state
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidTransition { state: String, event: String },
}

/// Result alias for machine operations.
pub type Result<T, E = MachineError> = std::result::Result<T, E>;
