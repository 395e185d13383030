//! Fuzz target for the `TimedDoor` state machine
//!
//! Drive the real door and the reference model with the same operation
//! sequence and compare them after every step.
//!
//! # Strategy
//!
//! - Operation sequences: Arbitrary interleavings of unlock, lock, check and
//!   time advances
//! - Timer storms: Repeated unlocks arm many overlapping timers
//! - Boundary probing: Time advances landing exactly on timer deadlines
//!
//! # Invariants
//!
//! - `throw_state` fails IFF the door is open
//! - `lock` is never undone by a stale timer
//! - Every unlock arms exactly one timer, which fires exactly once
//! - NEVER panic on any operation sequence

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use timedoor_harness::{ModelDoor, Operation, SimWorld};

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    /// Door timeout, mapped to 1..=8 seconds.
    timeout_selector: u8,
    /// Operation sequence to process.
    ops: Vec<Operation>,
}

fuzz_target!(|input: FuzzInput| {
    let timeout_secs = u64::from(input.timeout_selector % 8) + 1;

    let mut model = ModelDoor::new(timeout_secs);
    let Ok(mut real) = SimWorld::new(timeout_secs) else {
        return;
    };

    for (i, op) in input.ops.iter().take(256).enumerate() {
        let model_result = model.apply(op);
        let real_result = real.apply(op);

        assert_eq!(model_result, real_result, "result divergence at op {i}: {op:?}");
        assert_eq!(
            model.observable_state(),
            real.observable_state(),
            "state divergence at op {i}: {op:?}"
        );
    }
});
