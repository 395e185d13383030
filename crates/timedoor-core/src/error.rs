//! Door error types.

use thiserror::Error;

/// Errors from door operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DoorError {
    /// The door was found open after its allotted timeout.
    ///
    /// Raised by [`Door::throw_state`](crate::Door::throw_state) whenever the
    /// door is open at the moment of the call.
    #[error("door left open too long")]
    LeftOpen,

    /// The configured timeout is not a positive number of seconds.
    #[error("invalid timeout: {timeout_secs}s (must be at least 1s)")]
    InvalidTimeout {
        /// The rejected timeout.
        timeout_secs: u64,
    },
}

impl DoorError {
    /// Returns true if this error is a safety violation.
    ///
    /// Violations are terminal signals for the operator. Everything else is a
    /// configuration mistake caught before any door exists.
    pub fn is_violation(&self) -> bool {
        match self {
            Self::LeftOpen => true,
            Self::InvalidTimeout { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_open_is_violation() {
        assert!(DoorError::LeftOpen.is_violation());
    }

    #[test]
    fn invalid_timeout_is_not_violation() {
        let err = DoorError::InvalidTimeout { timeout_secs: 0 };
        assert!(!err.is_violation());
    }

    #[test]
    fn error_display() {
        assert_eq!(DoorError::LeftOpen.to_string(), "door left open too long");

        let err = DoorError::InvalidTimeout { timeout_secs: 0 };
        assert_eq!(err.to_string(), "invalid timeout: 0s (must be at least 1s)");
    }
}
