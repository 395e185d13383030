//! Timed door core.
//!
//! A door that reports a violation when it stays unlocked longer than its
//! configured timeout.
//!
//! ## Architecture
//!
//! ```text
//! TimedDoor::unlock()
//!   └─ Timer::register(timeout, adapter)      returns immediately
//!        └─ (timer task, after timeout)
//!             DoorTimerAdapter::timeout()
//!               └─ door.is_door_opened()?
//!                    └─ door.throw_state() -> Err(DoorError::LeftOpen)
//! ```
//!
//! The timer only sees the [`TimerClient`] trait and the door only sees its
//! own state; the adapter is the only piece that knows both. Timer tasks are
//! spawned through an [`Environment`], so the same code runs on a real tokio
//! runtime or on a paused test clock.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adapter;
pub mod config;
pub mod door;
pub mod env;
pub mod error;
pub mod timer;

#[cfg(test)]
mod testing;

pub use adapter::DoorTimerAdapter;
pub use config::{DEFAULT_TIMEOUT_SECS, DoorConfig};
pub use door::{Door, TimedDoor};
pub use env::Environment;
pub use error::DoorError;
pub use timer::{Timer, TimerClient};
