//! Runtime error types.

use thiserror::Error;
use timedoor_core::DoorError;

/// Errors that can occur while running a door on the tokio runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No tokio runtime is available to spawn timer tasks onto.
    #[error("no tokio runtime available: {0}")]
    NoRuntime(String),

    /// Door error (configuration or violation).
    #[error("door error: {0}")]
    Door(#[from] DoorError),
}

impl RuntimeError {
    /// Returns true if this error reports a door left open too long.
    pub fn is_violation(&self) -> bool {
        match self {
            Self::Door(err) => err.is_violation(),
            Self::NoRuntime(_) => false,
        }
    }
}
