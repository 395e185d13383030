//! Model door - the reference implementation.
//!
//! Tracks the open flag, a virtual clock and the deadlines of armed timers.
//! No concurrency, no adapter: a timer firing is just a deadline being
//! crossed while advancing time.

use std::time::Duration;

use super::operation::{Operation, OperationResult};

/// Observable state for oracle comparison.
///
/// This is the subset of door state that can be compared against the real
/// implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservableState {
    /// Whether the door is open.
    pub opened: bool,
    /// Timers armed but not yet fired.
    pub pending_timers: usize,
    /// Timers that have fired.
    pub fired: usize,
    /// Timers that fired while the door was open.
    pub violations: usize,
}

/// Reference model of a timed door.
#[derive(Debug, Clone)]
pub struct ModelDoor {
    timeout: Duration,
    opened: bool,
    now: Duration,
    /// Deadlines of armed timers, in arming order.
    deadlines: Vec<Duration>,
    fired: usize,
    violations: usize,
}

impl ModelDoor {
    /// Create a closed model door.
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
            opened: false,
            now: Duration::ZERO,
            deadlines: Vec::new(),
            fired: 0,
            violations: 0,
        }
    }

    /// Apply an operation and return the result.
    ///
    /// The result should match the real implementation's result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Unlock => {
                self.opened = true;
                self.deadlines.push(self.now + self.timeout);
                OperationResult::Ok
            },
            Operation::Lock => {
                self.opened = false;
                OperationResult::Ok
            },
            Operation::AdvanceTime { millis } => {
                self.advance(Duration::from_millis(u64::from(*millis)));
                OperationResult::Ok
            },
            Operation::Check => {
                if self.opened {
                    OperationResult::Violation
                } else {
                    OperationResult::Ok
                }
            },
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            opened: self.opened,
            pending_timers: self.deadlines.len(),
            fired: self.fired,
            violations: self.violations,
        }
    }

    /// Timers that have fired so far.
    pub fn fired(&self) -> usize {
        self.fired
    }

    /// Timers that fired while the door was open.
    pub fn violations(&self) -> usize {
        self.violations
    }

    /// Virtual time since the model was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    fn advance(&mut self, step: Duration) {
        self.now += step;

        // State cannot change during a step, so every timer crossed here sees
        // the current flag.
        let now = self.now;
        let before = self.deadlines.len();
        self.deadlines.retain(|deadline| *deadline > now);
        let crossed = before - self.deadlines.len();

        self.fired += crossed;
        if self.opened {
            self.violations += crossed;
        }
    }
}
