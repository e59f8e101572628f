//! State machine over a declarative configuration.

use crate::core::{History, MachineConfig};
use crate::fsm::error::{MachineError, Result};

/// Finite state machine with undo/redo over its visited-state history.
///
/// # Example
///
/// ```rust
/// use undo_fsm::machine_config;
/// use undo_fsm::StateMachine;
///
/// let config = machine_config! {
///     initial: "green",
///     states: {
///         "green" => { "next" => "yellow" },
///         "yellow" => { "next" => "red" },
///         "red" => { "next" => "green" },
///     }
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("next").unwrap();
/// machine.trigger("next").unwrap();
/// assert_eq!(machine.state(), "red");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "yellow");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "red");
///
/// assert!(machine.change_state("unknown").is_err());
/// assert_eq!(machine.state(), "red");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The configuration is taken as is. Use [`MachineConfig::validate`]
    /// beforehand if it comes from an untrusted source.
    pub fn new(config: MachineConfig) -> Self {
        let current = config.initial.clone();
        let history = History::starting_at(current.clone());
        Self {
            config,
            current,
            history,
        }
    }

    /// Get the active state.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Get the configured initial state.
    pub fn initial(&self) -> &str {
        &self.config.initial
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Get the visited-state history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Jump to any declared state, regardless of transition rules.
    ///
    /// Fails with [`MachineError::InvalidState`] if `state` is not declared.
    pub fn change_state(&mut self, state: &str) -> Result<()> {
        if !self.config.states.contains(state) {
            tracing::debug!(from = %self.current, to = state, "rejected change to undeclared state");
            return Err(MachineError::InvalidState {
                state: state.to_string(),
            });
        }

        tracing::debug!(from = %self.current, to = state, "state changed");
        self.enter(state.to_string());
        Ok(())
    }

    /// Follow the current state's transition rule for `event`.
    ///
    /// Fails with [`MachineError::InvalidTransition`] if the current state is
    /// not declared or has no rule for `event`. Targets are not checked, so a
    /// rule pointing at an undeclared state is still followed.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let Some(target) = self
            .config
            .target(&self.current, event)
            .map(str::to_owned)
        else {
            tracing::debug!(state = %self.current, event, "no transition for event");
            return Err(MachineError::InvalidTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };

        tracing::debug!(from = %self.current, to = %target, event, "transition fired");
        self.enter(target);
        Ok(())
    }

    /// Return to the initial state. History is left untouched.
    pub fn reset(&mut self) {
        tracing::debug!(from = %self.current, to = %self.config.initial, "reset");
        self.current = self.config.initial.clone();
    }

    /// Declared states, in declaration order.
    ///
    /// With `Some(event)`, only the states that have a rule for that event.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.states.names().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.target(event).is_some())
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Move to the entry preceding the first occurrence of the current
    /// state in history.
    ///
    /// Returns `false` without moving when history holds at most one entry,
    /// or when that occurrence has no predecessor (including when the
    /// current state was never recorded).
    ///
    /// Because the search uses the *first* occurrence, undo from a state
    /// that was visited more than once lands before its earliest visit.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            tracing::trace!(len = self.history.len(), "undo unavailable");
            return false;
        }

        let previous = match self.history.first_index_of(&self.current) {
            Some(index) if index > 0 => self.history.get(index - 1).map(str::to_owned),
            _ => None,
        };

        match previous {
            Some(state) => {
                tracing::debug!(from = %self.current, to = %state, "undo");
                self.current = state;
                true
            }
            None => {
                tracing::trace!(state = %self.current, "nothing to undo");
                false
            }
        }
    }

    /// Move to the entry following the first occurrence of the current
    /// state in history.
    ///
    /// Availability is decided by the *last* occurrence: redo returns
    /// `false` when no entry follows it. The destination is still taken
    /// from the first occurrence. A state absent from history counts as
    /// position -1, so redo then moves to the first entry.
    pub fn redo(&mut self) -> bool {
        if self.history.len() <= 1 {
            tracing::trace!(len = self.history.len(), "redo unavailable");
            return false;
        }

        let probe = self
            .history
            .last_index_of(&self.current)
            .map_or(0, |index| index + 1);
        if probe >= self.history.len() {
            tracing::trace!(state = %self.current, "nothing to redo");
            return false;
        }

        let destination = self
            .history
            .first_index_of(&self.current)
            .map_or(0, |index| index + 1);
        // first occurrence <= last occurrence, so destination <= probe
        let Some(next) = self.history.get(destination).map(str::to_owned) else {
            return false;
        };

        tracing::debug!(from = %self.current, to = %next, "redo");
        self.current = next;
        true
    }

    /// Forget every recorded state. The current state is kept.
    pub fn clear_history(&mut self) {
        tracing::debug!(len = self.history.len(), "history cleared");
        self.history.clear();
    }

    fn enter(&mut self, state: String) {
        self.history.record(state.clone());
        self.current = state;
    }
}
