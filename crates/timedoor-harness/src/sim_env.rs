//! Simulated environment on a paused tokio clock.
//!
//! A [`Simulation`] owns a single-threaded tokio runtime whose clock starts
//! paused. Timer tasks spawned through its [`SimEnv`] only make progress when
//! the simulation advances virtual time, so every interleaving of door
//! operations and timer firings is reproducible. Failures reported by timer
//! tasks are counted so tests can assert on them.

use std::{
    error::Error,
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use timedoor_core::Environment;
use tokio::runtime::{Builder, Handle, Runtime};

/// Errors from building a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The tokio runtime could not be built.
    #[error("failed to build simulation runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Environment spawning onto a simulation's runtime.
#[derive(Debug, Clone)]
pub struct SimEnv {
    handle: Handle,
    failures: Arc<AtomicUsize>,
}

impl Environment for SimEnv {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        drop(self.handle.spawn(task));
    }

    fn report_failure(&self, error: &(dyn Error + 'static)) {
        self.failures.fetch_add(1, Ordering::SeqCst);
        tracing::error!(error = %error, "timer client failed");
    }
}

/// Driver for virtual time.
///
/// Tasks spawned through [`Simulation::env`] are queued and only run inside
/// [`Simulation::advance`].
#[derive(Debug)]
pub struct Simulation {
    runtime: Runtime,
    elapsed: Duration,
    /// Shared with every `SimEnv` handed out.
    failures: Arc<AtomicUsize>,
}

impl Simulation {
    /// Create a simulation at virtual time zero.
    pub fn new() -> Result<Self, SimError> {
        let runtime = Builder::new_current_thread().enable_time().start_paused(true).build()?;
        Ok(Self { runtime, elapsed: Duration::ZERO, failures: Arc::new(AtomicUsize::new(0)) })
    }

    /// Environment whose tasks run on this simulation.
    pub fn env(&self) -> SimEnv {
        SimEnv { handle: self.runtime.handle().clone(), failures: Arc::clone(&self.failures) }
    }

    /// Failures reported by timer tasks so far.
    pub fn failures_reported(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }

    /// Virtual time elapsed since the simulation started.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advance virtual time by `duration`, running every task that becomes
    /// ready along the way.
    ///
    /// Tasks due exactly at the new time also run before this returns.
    pub fn advance(&mut self, duration: Duration) {
        self.runtime.block_on(async {
            tokio::time::sleep(duration).await;
            tokio::task::yield_now().await;
        });
        self.elapsed += duration;
    }
}
