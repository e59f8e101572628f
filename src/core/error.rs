//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not a well-formed configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// `initial` names a state that is not declared
    #[error("Initial state '{state}' is not declared")]
    UnknownInitialState { state: String },

    /// A transition points at a state that is not declared
    #[error("Transition '{event}' from '{from}' targets undeclared state '{to}'")]
    UnknownTarget {
        from: String,
        event: String,
        to: String,
    },
}
