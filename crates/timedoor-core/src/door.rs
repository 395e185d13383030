//! Door state machine.
//!
//! A door is either closed or open. A [`TimedDoor`] additionally arms a
//! one-shot timer every time it is unlocked; if the door is still open when
//! the timer fires, the check reports [`DoorError::LeftOpen`].
//!
//! ```text
//!            unlock (arms timer)
//!   Closed ───────────────────────▶ Open ──┐
//!     ▲                              │     │ timer fires while open:
//!     └──────────── lock ────────────┘ ◀───┘ violation, stays Open
//! ```
//!
//! # Invariants
//!
//! - The `opened` flag is the single source of truth for lock state
//! - A new door is closed
//! - `lock()` never cancels a timer armed by an earlier `unlock()`

use std::{
    fmt,
    sync::{
        Arc, Weak,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{
    adapter::DoorTimerAdapter, config::DoorConfig, env::Environment, error::DoorError,
    timer::Timer,
};

/// Door capability.
///
/// Anything that can be locked, unlocked and asked whether it is open.
/// Methods take `&self` because a door is shared with the timer tasks that
/// check it.
pub trait Door: Send + Sync {
    /// Close the door.
    fn lock(&self);

    /// Open the door.
    fn unlock(&self);

    /// Whether the door is currently open.
    fn is_door_opened(&self) -> bool;

    /// Check the door for a violation.
    ///
    /// Fails with [`DoorError::LeftOpen`] exactly when the door is open at the
    /// moment of the call. This is a state check, not an event consumer: it
    /// may be called at any time, from any thread.
    fn throw_state(&self) -> Result<(), DoorError> {
        if self.is_door_opened() { Err(DoorError::LeftOpen) } else { Ok(()) }
    }
}

/// Door that reports a violation when left open past its timeout.
pub struct TimedDoor<E: Environment> {
    /// Seconds the door may stay open.
    timeout_secs: u64,
    /// Lock state, shared with timer tasks.
    opened: AtomicBool,
    /// Timer client bound to this door, reused by every `unlock()`.
    adapter: Arc<DoorTimerAdapter<Self>>,
    /// Environment timer tasks are spawned onto.
    env: E,
}

impl<E: Environment> TimedDoor<E> {
    /// Create a closed door with the given timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DoorError::InvalidTimeout`] if `timeout_secs` is zero.
    pub fn new(env: E, timeout_secs: u64) -> Result<Arc<Self>, DoorError> {
        Self::from_config(env, &DoorConfig { timeout_secs })
    }

    /// Create a closed door from a configuration.
    pub fn from_config(env: E, config: &DoorConfig) -> Result<Arc<Self>, DoorError> {
        config.validate()?;

        let door = Arc::new_cyclic(|door: &Weak<Self>| Self {
            timeout_secs: config.timeout_secs,
            opened: AtomicBool::new(false),
            adapter: Arc::new(DoorTimerAdapter::new(door.clone())),
            env,
        });

        tracing::debug!(timeout_secs = config.timeout_secs, "door created");
        Ok(door)
    }

    /// Configured timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// The timer client this door registers on every unlock.
    pub fn adapter(&self) -> Arc<DoorTimerAdapter<Self>> {
        Arc::clone(&self.adapter)
    }
}

impl<E: Environment> Door for TimedDoor<E> {
    fn lock(&self) {
        self.opened.store(false, Ordering::Release);
        tracing::debug!("door locked");
    }

    fn unlock(&self) {
        self.opened.store(true, Ordering::Release);
        tracing::debug!(timeout_secs = self.timeout_secs, "door unlocked");

        Timer::new(self.env.clone()).register(self.timeout_secs, self.adapter());
    }

    fn is_door_opened(&self) -> bool {
        self.opened.load(Ordering::Acquire)
    }
}

impl<E: Environment> fmt::Debug for TimedDoor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedDoor")
            .field("timeout_secs", &self.timeout_secs)
            .field("opened", &self.is_door_opened())
            .finish_non_exhaustive()
    }
}
