//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every declared state,
//! a transition table mapping event names to target state names. The
//! configuration is plain data: it is never validated implicitly, and all
//! lookups return `Option` so callers decide what absence means.

use super::error::ConfigError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Transition table of a single state.
///
/// # Example
///
/// ```rust
/// use undo_fsm::core::StateDefinition;
///
/// let green = StateDefinition::new().on("next", "yellow");
/// assert_eq!(green.target("next"), Some("yellow"));
/// assert_eq!(green.target("stop"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name -> target state name
    #[serde(default)]
    pub transitions: HashMap<String, String>,
}

impl StateDefinition {
    /// Create a definition without transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition rule, returning the updated definition.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state reached by `event`, if a rule exists.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }
}

/// Ordered mapping from state name to its definition.
///
/// Iteration follows declaration order, including when the table is read
/// from a document. Declaring a name twice replaces the earlier definition
/// but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateTable {
    entries: Vec<(String, StateDefinition)>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a state definition.
    pub fn insert(&mut self, name: impl Into<String>, definition: StateDefinition) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = definition,
            None => self.entries.push((name, definition)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&StateDefinition> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, definition)| definition)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// State names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDefinition)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (N, StateDefinition)>>(iter: I) -> Self {
        let mut table = StateTable::new();
        for (name, definition) in iter {
            table.insert(name, definition);
        }
        table
    }
}

impl Serialize for StateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, definition) in &self.entries {
            map.serialize_entry(name, definition)?;
        }
        map.end()
    }
}

struct StateTableVisitor;

impl<'de> Visitor<'de> for StateTableVisitor {
    type Value = StateTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of state names to state definitions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = StateTable::new();
        while let Some((name, definition)) = access.next_entry::<String, StateDefinition>()? {
            table.insert(name, definition);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StateTableVisitor)
    }
}

/// Complete machine configuration.
///
/// Serializes to and from the document shape
/// `{ "initial": "...", "states": { "<state>": { "transitions": { "<event>": "<state>" } } } }`.
///
/// # Example
///
/// ```rust
/// use undo_fsm::core::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.target("idle", "start"), Some("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub initial: String,
    #[serde(default)]
    pub states: StateTable,
}

impl MachineConfig {
    pub fn new(initial: impl Into<String>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Target of `event` from `state`. `None` when either is undeclared.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state)?.target(event)
    }

    /// Check that the initial state and every transition target are declared.
    ///
    /// Machines accept unchecked configurations; call this when the
    /// configuration comes from an untrusted source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.states.contains(&self.initial) {
            return Err(ConfigError::UnknownInitialState {
                state: self.initial.clone(),
            });
        }

        for (name, definition) in self.states.iter() {
            for (event, target) in &definition.transitions {
                if !self.states.contains(target) {
                    return Err(ConfigError::UnknownTarget {
                        from: name.to_string(),
                        event: event.clone(),
                        to: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
