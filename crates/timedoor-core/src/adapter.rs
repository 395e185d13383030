//! Adapter from timer notifications to door checks.
//!
//! [`Timer`](crate::Timer) only knows the [`TimerClient`] contract and
//! [`Door`] knows nothing about timers. `DoorTimerAdapter` sits between the
//! two: on timeout it looks at the door and runs the violation check only if
//! the door is still open.

use std::sync::Weak;

use crate::{door::Door, error::DoorError, timer::TimerClient};

/// Timer client that checks one door for a violation.
///
/// Holds a non-owning reference: the door owns its adapter, and an adapter
/// outliving its door (a pending timer after the door was dropped) simply
/// has nothing left to check.
#[derive(Debug)]
pub struct DoorTimerAdapter<D> {
    door: Weak<D>,
}

impl<D: Door> DoorTimerAdapter<D> {
    /// Bind an adapter to `door`.
    pub fn new(door: Weak<D>) -> Self {
        Self { door }
    }
}

impl<D: Door + 'static> TimerClient for DoorTimerAdapter<D> {
    type Error = DoorError;

    /// Check the door once its timeout has elapsed.
    ///
    /// The open check is done twice: once here, once inside `throw_state()`.
    /// `throw_state()` is authoritative, so a `lock()` that lands between the
    /// two reads suppresses the violation rather than reporting a closed door.
    fn timeout(&self) -> Result<(), DoorError> {
        let Some(door) = self.door.upgrade() else {
            tracing::debug!("timer fired for a dropped door");
            return Ok(());
        };

        if door.is_door_opened() {
            tracing::warn!("door still open after timeout");
            return door.throw_state();
        }

        Ok(())
    }
}
