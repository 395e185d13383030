//! Recording timer client.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use timedoor_core::TimerClient;

/// Error returned by a [`RecordingClient`] configured to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("recording client failure #{call}")]
pub struct RecordedFailure {
    /// 1-based index of the failing call.
    pub call: usize,
}

/// Timer client that records every notification it receives.
///
/// Stands in for a real client when testing the timer on its own.
#[derive(Debug, Default)]
pub struct RecordingClient {
    calls: AtomicUsize,
    fail: bool,
    failures: Mutex<Vec<RecordedFailure>>,
}

impl RecordingClient {
    /// Client that accepts every notification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client that fails every notification.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    /// Number of `timeout()` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Failures returned so far, in call order.
    pub fn failures(&self) -> Vec<RecordedFailure> {
        self.failures.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

impl TimerClient for RecordingClient {
    type Error = RecordedFailure;

    fn timeout(&self) -> Result<(), Self::Error> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.fail {
            return Ok(());
        }

        let failure = RecordedFailure { call };
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(failure);
        }
        Err(failure)
    }
}
