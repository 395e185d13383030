//! Timed door production runtime.
//!
//! This crate runs the door from `timedoor-core` on a real tokio runtime:
//! - `SystemEnv` spawns timer tasks onto a runtime handle
//! - `run_scenario` drives one unlock/hold/lock/check cycle
//! - the `timedoor` binary exposes that cycle on the command line
//!
//! ## Architecture
//!
//! ```text
//! timedoor-runtime
//!   ├─ SystemEnv          (production Environment impl)
//!   ├─ RuntimeConfig      (door timeout + scenario timings)
//!   └─ run_scenario       (unlock, hold, lock?, wait, throw_state)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod system_env;

use std::time::Duration;

pub use error::RuntimeError;
pub use system_env::SystemEnv;
use timedoor_core::{Door, DoorConfig, Environment, TimedDoor};

/// Extra time waited past the door timeout before checking, so the timer
/// armed by `unlock()` has fired.
pub const GRACE_SECS: u64 = 1;

/// Configuration for one door scenario.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Door configuration (timeout).
    pub door: DoorConfig,
    /// Seconds the door is held open after unlocking.
    pub hold_secs: u64,
    /// Whether the door is locked once the hold period ends.
    pub lock_after_hold: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { door: DoorConfig::default(), hold_secs: 1, lock_after_hold: true }
    }
}

impl RuntimeConfig {
    /// Check the configuration before running a scenario.
    pub fn validate(&self) -> Result<(), RuntimeError> {
        self.door.validate()?;
        Ok(())
    }

    /// Total time from unlock to the final check.
    pub fn observation_window(&self) -> Duration {
        let until_fired = Duration::from_secs(self.door.timeout_secs.saturating_add(GRACE_SECS));
        until_fired.max(Duration::from_secs(self.hold_secs))
    }
}

/// Run one unlock/hold/check cycle against a fresh door.
///
/// Unlocks the door, keeps it open for `hold_secs`, optionally locks it,
/// then waits until the timeout (plus [`GRACE_SECS`]) has passed and checks
/// the door.
///
/// # Errors
///
/// Returns [`RuntimeError::Door`] with `DoorError::LeftOpen` if the door is
/// still open at the check, or with `DoorError::InvalidTimeout` for a bad
/// configuration.
pub async fn run_scenario<E: Environment>(env: E, config: &RuntimeConfig) -> Result<(), RuntimeError> {
    config.validate()?;

    let door = TimedDoor::from_config(env.clone(), &config.door)?;
    tracing::info!(
        timeout_secs = config.door.timeout_secs,
        hold_secs = config.hold_secs,
        lock_after_hold = config.lock_after_hold,
        "running door scenario"
    );

    door.unlock();
    let hold = Duration::from_secs(config.hold_secs);
    env.sleep(hold).await;

    if config.lock_after_hold {
        door.lock();
    }

    env.sleep(config.observation_window().saturating_sub(hold)).await;

    door.throw_state()?;
    tracing::info!("door check passed");
    Ok(())
}
