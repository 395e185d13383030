//! Real door on a simulated clock.
//!
//! `SimWorld` mirrors [`ModelDoor`](crate::ModelDoor)'s interface so the same
//! operation sequence can be applied to both and compared.

use std::{sync::Arc, time::Duration};

use timedoor_core::{Door, DoorError, DoorTimerAdapter, TimedDoor};

use crate::{
    model::{ObservableState, Operation, OperationResult},
    sim_env::{SimEnv, SimError, Simulation},
};

/// Errors from building a simulated world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// Simulation setup failed.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// Door construction failed.
    #[error(transparent)]
    Door(#[from] DoorError),
}

/// A `TimedDoor` driven by a [`Simulation`].
pub struct SimWorld {
    sim: Simulation,
    door: Arc<TimedDoor<SimEnv>>,
    /// Held so pending timers can be counted from the adapter's strong count.
    adapter: Arc<DoorTimerAdapter<TimedDoor<SimEnv>>>,
    unlocks: usize,
}

impl SimWorld {
    /// Create a world with a closed door.
    pub fn new(timeout_secs: u64) -> Result<Self, WorldError> {
        let sim = Simulation::new()?;
        let door = TimedDoor::new(sim.env(), timeout_secs)?;
        let adapter = door.adapter();
        Ok(Self { sim, door, adapter, unlocks: 0 })
    }

    /// The door under test.
    pub fn door(&self) -> &Arc<TimedDoor<SimEnv>> {
        &self.door
    }

    /// Virtual time elapsed.
    pub fn elapsed(&self) -> Duration {
        self.sim.elapsed()
    }

    /// Apply an operation to the real door.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Unlock => {
                self.door.unlock();
                self.unlocks += 1;
                OperationResult::Ok
            },
            Operation::Lock => {
                self.door.lock();
                OperationResult::Ok
            },
            Operation::AdvanceTime { millis } => {
                self.sim.advance(Duration::from_millis(u64::from(*millis)));
                OperationResult::Ok
            },
            Operation::Check => match self.door.throw_state() {
                Ok(()) => OperationResult::Ok,
                Err(_) => OperationResult::Violation,
            },
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        let pending_timers = self.pending_timers();
        ObservableState {
            opened: self.door.is_door_opened(),
            pending_timers,
            fired: self.unlocks.saturating_sub(pending_timers),
            violations: self.violations(),
        }
    }

    /// Violations raised on timer tasks, as reported to the simulation.
    pub fn violations(&self) -> usize {
        self.sim.failures_reported()
    }

    /// Timers spawned by `unlock()` that have not fired yet.
    ///
    /// Every pending timer task holds one reference to the adapter; the door
    /// and this world hold the other two.
    pub fn pending_timers(&self) -> usize {
        Arc::strong_count(&self.adapter).saturating_sub(2)
    }
}
