//! Shared fixtures for unit tests.

use std::{
    error::Error,
    future::Future,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use crate::{Door, env::Environment, timer::TimerClient};

/// Environment spawning onto the ambient tokio runtime.
#[derive(Debug, Clone, Copy)]
pub struct TokioEnv;

impl Environment for TokioEnv {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        drop(tokio::spawn(task));
    }
}

/// Tokio environment that records reported failures.
#[derive(Debug, Clone, Default)]
pub struct RecordingEnv {
    failures: Arc<Mutex<Vec<String>>>,
}

impl RecordingEnv {
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl Environment for RecordingEnv {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        drop(tokio::spawn(task));
    }

    fn report_failure(&self, error: &(dyn Error + 'static)) {
        self.failures.lock().unwrap().push(error.to_string());
    }
}

#[derive(Debug, thiserror::Error)]
#[error("forced failure")]
pub struct ForcedFailure;

/// Timer client that counts notifications.
#[derive(Debug, Default)]
pub struct CountingClient {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { calls: AtomicUsize::new(0), fail: true }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TimerClient for CountingClient {
    type Error = ForcedFailure;

    fn timeout(&self) -> Result<(), Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail { Err(ForcedFailure) } else { Ok(()) }
    }
}

/// Door double with a settable state and a read counter.
#[derive(Debug, Default)]
pub struct StubDoor {
    opened: AtomicBool,
    reads: AtomicUsize,
}

impl StubDoor {
    pub fn with_state(opened: bool) -> Self {
        Self { opened: AtomicBool::new(opened), reads: AtomicUsize::new(0) }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Door for StubDoor {
    fn lock(&self) {
        self.opened.store(false, Ordering::SeqCst);
    }

    fn unlock(&self) {
        self.opened.store(true, Ordering::SeqCst);
    }

    fn is_door_opened(&self) -> bool {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.opened.load(Ordering::SeqCst)
    }
}
