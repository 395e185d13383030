//! Deterministic simulation harness for timed door testing.
//!
//! Paused-clock implementation of the `Environment` trait plus a reference
//! model, for deterministic, reproducible testing of door/timer interleavings.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation for model-based
//! testing. Operations are applied to both the model and a [`SimWorld`]
//! (the real door on a simulated clock), and their observable states are
//! compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod recording;
pub mod sim_env;
pub mod world;

pub use model::{ModelDoor, ObservableState, Operation, OperationResult};
pub use recording::{RecordedFailure, RecordingClient};
pub use sim_env::{SimEnv, SimError, Simulation};
pub use world::{SimWorld, WorldError};
