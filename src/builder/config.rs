//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{MachineConfig, StateDefinition, StateTable};
use crate::fsm::StateMachine;

/// Builder for constructing configurations with a fluent API.
///
/// States are kept in the order they are declared.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: StateTable,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, describing its transitions with a closure.
    pub fn state<F>(mut self, name: impl Into<String>, define: F) -> Self
    where
        F: FnOnce(StateDefinition) -> StateDefinition,
    {
        self.states.insert(name, define(StateDefinition::new()));
        self
    }

    /// Declare a state without transitions.
    pub fn terminal(self, name: impl Into<String>) -> Self {
        self.state(name, |definition| definition)
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig::new(initial, self.states))
    }

    /// Build the configuration and wrap it in a machine.
    pub fn build_machine(self) -> Result<StateMachine, BuildError> {
        self.build().map(StateMachine::new)
    }
}
