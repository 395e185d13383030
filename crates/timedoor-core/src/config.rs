//! Door configuration.

use crate::error::DoorError;

/// Default time a door may stay open before it is in violation.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Configuration for a [`TimedDoor`](crate::TimedDoor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorConfig {
    /// Seconds the door may stay open before a violation is raised.
    pub timeout_secs: u64,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self { timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl DoorConfig {
    /// Check the configuration before building a door from it.
    pub fn validate(&self) -> Result<(), DoorError> {
        if self.timeout_secs == 0 {
            return Err(DoorError::InvalidTimeout { timeout_secs: self.timeout_secs });
        }
        Ok(())
    }
}
