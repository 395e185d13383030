//! Reference model for model-based testing.
//!
//! The model is a simplified implementation that captures the intended
//! behaviour of a timed door without threads, atomics or an executor.
//! It serves as the oracle against which the real implementation is verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Behaviour not implementation: Captures WHAT, not HOW
//! - Deterministic: Same inputs produce same outputs

mod door;
pub mod operation;

pub use door::{ModelDoor, ObservableState};
pub use operation::{Operation, OperationResult};
