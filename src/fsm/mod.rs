//! The state machine runtime.
//!
//! `StateMachine` owns a configuration, the current state and the history
//! of visited states. Two primitives move it:
//!
//! - **`trigger`**: event-driven, follows the current state's transition table
//! - **`change_state`**: jumps to any declared state, ignoring the table
//!
//! Undo and redo navigate the recorded history without rewriting it.
//!
//! The machine holds no locks. Share it across threads behind an external
//! `Mutex` if needed.

mod error;
mod machine;

pub use error::{MachineError, Result};
pub use machine::StateMachine;
