//! Environment abstraction for deferred execution.
//!
//! The `Environment` trait decouples the door and timer logic from the
//! executor that actually runs timer tasks. This enables:
//!
//! - Deterministic Testing: a paused tokio clock advances virtual time
//!   instantly, so a one-second timeout costs no wall-clock time.
//!
//! - Production Runtime: a tokio runtime handle spawns real tasks that sleep
//!   on the system clock, without any change to the door logic.
//!
//! # Invariants
//!
//! - Fire-and-forget: `spawn()` returns nothing; the spawned task can be
//!   neither joined nor cancelled by the caller
//! - Completion: a spawned task runs to completion unless the executor itself
//!   shuts down
//! - Isolation: Implementations must not share global state

use std::{error::Error, future::Future, time::Duration};

/// Abstract environment providing sleeping and task spawning.
///
/// Every [`Timer`](crate::Timer) is bound to one environment, and every
/// [`TimedDoor`](crate::TimedDoor) hands its environment to the timers it
/// creates.
///
/// # Safety
///
/// Implementations MUST guarantee:
///
/// 1. Non-blocking spawn: `spawn()` returns without waiting for the task
/// 2. At-least-the-delay sleeping: `sleep(d)` never completes before `d` has
///    elapsed on the environment's clock
pub trait Environment: Clone + Send + Sync + 'static {
    /// Sleeps for the specified duration.
    ///
    /// Only timer tasks await this; door operations never suspend.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;

    /// Spawns a detached task.
    ///
    /// # Invariants
    ///
    /// - The returned handle (if the executor has one) is dropped immediately
    /// - The task runs concurrently with the caller
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static;

    /// Surfaces a failure raised on a spawned task.
    ///
    /// Timer tasks have no caller to return a client error to, so they hand
    /// it here instead. The default emits an `error` tracing event.
    fn report_failure(&self, error: &(dyn Error + 'static)) {
        tracing::error!(error = %error, "timer client failed");
    }
}
