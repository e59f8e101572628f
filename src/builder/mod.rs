//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for describing
//! machine configurations with minimal boilerplate.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
