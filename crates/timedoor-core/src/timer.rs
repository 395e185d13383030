//! One-shot timer.
//!
//! A [`Timer`] schedules a single deferred notification to a [`TimerClient`].
//! It keeps no state beyond the environment it spawns onto: each
//! registration is an independent task that nobody tracks afterwards.
//!
//! # Invariants
//!
//! - Non-blocking: `register()` returns before the delay starts elapsing
//! - Exactly-once: each registration invokes `timeout()` exactly once
//! - No cancellation: a registration always runs to completion

use std::{sync::Arc, time::Duration};

use crate::env::Environment;

/// Receiver of timer notifications.
///
/// The timer knows nothing about what the client does on timeout; that is
/// what lets a generic scheduler drive domain-specific checks.
pub trait TimerClient: Send + Sync + 'static {
    /// Failure reported by the client when it handles a timeout.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once when a registered delay has elapsed.
    ///
    /// Runs on the timer task, not on the thread that registered the client.
    fn timeout(&self) -> Result<(), Self::Error>;
}

/// Scheduler of one-shot delayed notifications.
#[derive(Debug, Clone)]
pub struct Timer<E: Environment> {
    env: E,
}

impl<E: Environment> Timer<E> {
    /// Create a timer that spawns its tasks through `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Schedule `client.timeout()` to run after `timeout_secs` seconds.
    ///
    /// Returns immediately. The spawned task is detached: there is no handle
    /// to await or cancel. A zero delay fires on the next executor turn.
    ///
    /// The task has no caller to hand a client error back to, so a failure
    /// from `timeout()` goes to [`Environment::report_failure`].
    pub fn register<C: TimerClient>(&self, timeout_secs: u64, client: Arc<C>) {
        tracing::debug!(timeout_secs, "timer registered");

        let env = self.env.clone();
        self.env.spawn(async move {
            env.sleep(Duration::from_secs(timeout_secs)).await;
            tracing::trace!(timeout_secs, "timer fired");

            if let Err(e) = client.timeout() {
                env.report_failure(&e);
            }
        });
    }
}

/// Block the calling thread for `seconds`.
///
/// Synchronous utility for callers outside any executor. The scheduling path
/// never uses it.
pub fn sleep(seconds: u64) {
    std::thread::sleep(Duration::from_secs(seconds));
}
