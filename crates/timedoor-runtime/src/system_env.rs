//! Production Environment implementation on a tokio runtime.
//!
//! This module provides `SystemEnv`, the production implementation of the
//! `Environment` trait that sleeps on the system clock and spawns timer
//! tasks onto a tokio runtime.

use std::{future::Future, time::Duration};

use timedoor_core::Environment;
use tokio::runtime::Handle;

use crate::error::RuntimeError;

/// Production environment backed by a tokio runtime handle.
///
/// This implementation:
/// - Uses `tokio::time::sleep()` for async sleeping
/// - Spawns onto the captured runtime, so `spawn()` works from any thread,
///   including threads outside the runtime
#[derive(Debug, Clone)]
pub struct SystemEnv {
    handle: Handle,
}

impl SystemEnv {
    /// Create an environment spawning onto `handle`.
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Create an environment for the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NoRuntime`] when called outside a tokio runtime.
    pub fn current() -> Result<Self, RuntimeError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| RuntimeError::NoRuntime(e.to_string()))
    }
}

impl Environment for SystemEnv {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Dropping the JoinHandle detaches the task.
        drop(self.handle.spawn(task));
    }
}
