//! Operations for model-based testing.
//!
//! Operations represent everything that can happen to a door. They are
//! generated randomly (by proptest or a fuzzer) and applied to both the model
//! and the real implementation.

use arbitrary::Arbitrary;

/// Operations that can be applied to a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Open the door (arms a timer).
    Unlock,

    /// Close the door.
    Lock,

    /// Advance simulation time.
    ///
    /// Fires every timer whose deadline falls inside the step.
    AdvanceTime {
        /// Milliseconds to advance.
        millis: u16,
    },

    /// Run the violation check (`throw_state`).
    Check,
}

/// Result of applying an operation.
///
/// Used to compare model and real system behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded.
    Ok,

    /// The check found the door left open.
    Violation,
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Check if the operation reported a violation.
    pub fn is_violation(&self) -> bool {
        !self.is_ok()
    }
}
