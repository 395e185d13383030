//! TimedDoor behaviour tests.
//!
//! All timing runs on a paused tokio clock: sleeping auto-advances virtual
//! time, so the multi-second scenarios finish instantly and deterministically.

use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use proptest::prelude::*;
use timedoor_core::{Door, DoorError, DoorTimerAdapter, Environment, TimedDoor, Timer, TimerClient};

// Test environment spawning onto the current tokio runtime
#[derive(Clone)]
struct TestEnv;

impl Environment for TestEnv {
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        drop(tokio::spawn(task));
    }
}

/// Test environment that also records failures reported by timer tasks.
#[derive(Clone, Default)]
struct ReportingEnv {
    reported: Arc<Mutex<Vec<String>>>,
}

impl ReportingEnv {
    fn reported(&self) -> Vec<String> {
        self.reported.lock().unwrap().clone()
    }
}

impl Environment for ReportingEnv {
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        drop(tokio::spawn(task));
    }

    fn report_failure(&self, error: &(dyn Error + 'static)) {
        self.reported.lock().unwrap().push(error.to_string());
    }
}

/// Timer client that records how often it was notified.
#[derive(Default)]
struct MockTimerClient {
    calls: AtomicUsize,
}

impl TimerClient for MockTimerClient {
    type Error = std::convert::Infallible;

    fn timeout(&self) -> Result<(), Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Door double that always reports closed and refuses to change.
struct ClosedDoor;

impl Door for ClosedDoor {
    fn lock(&self) {}

    fn unlock(&self) {}

    fn is_door_opened(&self) -> bool {
        false
    }
}

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .expect("failed to build paused runtime")
}

#[tokio::test(start_paused = true)]
async fn door_is_initially_closed() {
    let door = TimedDoor::new(TestEnv, 2).unwrap();
    assert!(!door.is_door_opened());
}

#[tokio::test(start_paused = true)]
async fn door_can_be_opened() {
    let door = TimedDoor::new(TestEnv, 2).unwrap();
    door.unlock();
    assert!(door.is_door_opened());
}

#[tokio::test(start_paused = true)]
async fn door_can_be_closed_after_opening() {
    let door = TimedDoor::new(TestEnv, 2).unwrap();
    door.unlock();
    door.lock();
    assert!(!door.is_door_opened());
}

#[tokio::test(start_paused = true)]
async fn door_left_open_too_long_fails_check() {
    let door = TimedDoor::new(TestEnv, 1).unwrap();
    door.unlock();

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(door.throw_state(), Err(DoorError::LeftOpen));
}

#[tokio::test(start_paused = true)]
async fn door_locked_before_timeout_passes_check() {
    let door = TimedDoor::new(TestEnv, 1).unwrap();
    door.unlock();
    door.lock();

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(door.throw_state().is_ok());
}

#[tokio::test(start_paused = true)]
async fn door_stays_open_after_timer_fires() {
    let door = TimedDoor::new(TestEnv, 1).unwrap();
    door.unlock();

    tokio::time::sleep(Duration::from_secs(5)).await;

    // The violation is a signal, not a transition.
    assert!(door.is_door_opened());
}

#[tokio::test(start_paused = true)]
async fn new_door_never_fails_check() {
    let door = TimedDoor::new(TestEnv, 2).unwrap();
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert!(!door.is_door_opened());
    assert!(door.throw_state().is_ok());
}

#[tokio::test(start_paused = true)]
async fn stale_timer_sees_reopened_door() {
    // Timer armed by the first unlock is not cancelled by lock, so it checks
    // the door again after the second unlock.
    let door = TimedDoor::new(TestEnv, 3).unwrap();
    door.unlock();
    door.lock();

    tokio::time::sleep(Duration::from_secs(2)).await;
    door.unlock();

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(door.is_door_opened());
    assert_eq!(door.adapter().timeout(), Err(DoorError::LeftOpen));
}

#[tokio::test(start_paused = true)]
async fn timer_on_open_door_reports_one_violation() {
    let env = ReportingEnv::default();
    let door = TimedDoor::new(env.clone(), 1).unwrap();
    door.unlock();

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(env.reported().is_empty(), "violation reported before the timeout");

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(env.reported(), vec![DoorError::LeftOpen.to_string()]);
}

#[tokio::test(start_paused = true)]
async fn timer_on_locked_door_reports_nothing() {
    let env = ReportingEnv::default();
    let door = TimedDoor::new(env.clone(), 1).unwrap();
    door.unlock();
    door.lock();

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(env.reported().is_empty());
}

#[tokio::test(start_paused = true)]
async fn each_unlock_reports_its_own_violation() {
    let env = ReportingEnv::default();
    let door = TimedDoor::new(env.clone(), 2).unwrap();
    door.unlock();
    tokio::time::sleep(Duration::from_secs(1)).await;
    door.unlock();

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(env.reported().len(), 1);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(env.reported().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn timer_calls_client_once() {
    let client = Arc::new(MockTimerClient::default());
    let timer = Timer::new(TestEnv);

    timer.register(1, Arc::clone(&client));
    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn adapter_passes_for_closed_door_double() {
    let door = Arc::new(ClosedDoor);
    let adapter = DoorTimerAdapter::new(Arc::downgrade(&door));

    assert!(adapter.timeout().is_ok());
}

#[tokio::test(start_paused = true)]
async fn adapter_fails_when_door_open_too_long() {
    let door = TimedDoor::new(TestEnv, 1).unwrap();
    let adapter = DoorTimerAdapter::new(Arc::downgrade(&door));
    door.unlock();

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(adapter.timeout(), Err(DoorError::LeftOpen));
}

#[tokio::test(start_paused = true)]
async fn timer_outliving_door_is_harmless() {
    let door = TimedDoor::new(TestEnv, 1).unwrap();
    let adapter = door.adapter();
    door.unlock();
    drop(door);

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert!(adapter.timeout().is_ok());
}

proptest! {
    /// Unlocking and waiting past the timeout always fails the check.
    #[test]
    fn prop_open_past_timeout_violates(timeout_secs in 1u64..3600, extra_ms in 1u64..5000) {
        let result = paused_runtime().block_on(async move {
            let door = TimedDoor::new(TestEnv, timeout_secs).unwrap();
            door.unlock();
            tokio::time::sleep(Duration::from_secs(timeout_secs) + Duration::from_millis(extra_ms))
                .await;
            door.throw_state()
        });

        prop_assert_eq!(result, Err(DoorError::LeftOpen));
    }

    /// Locking before the timeout always passes the check, however late.
    #[test]
    fn prop_locked_before_timeout_passes(
        timeout_secs in 1u64..3600,
        lock_after_ms in 0u64..1000,
        extra_ms in 1u64..5000,
    ) {
        let result = paused_runtime().block_on(async move {
            let door = TimedDoor::new(TestEnv, timeout_secs).unwrap();
            door.unlock();
            tokio::time::sleep(Duration::from_millis(lock_after_ms)).await;
            door.lock();
            tokio::time::sleep(Duration::from_secs(timeout_secs) + Duration::from_millis(extra_ms))
                .await;
            (door.is_door_opened(), door.throw_state())
        });

        prop_assert_eq!(result, (false, Ok(())));
    }

    /// Every registration fires exactly once, regardless of delay.
    #[test]
    fn prop_each_registration_fires_once(delays in prop::collection::vec(0u64..30, 1..10)) {
        let count = delays.len();
        let calls = paused_runtime().block_on(async move {
            let client = Arc::new(MockTimerClient::default());
            let timer = Timer::new(TestEnv);
            for delay in &delays {
                timer.register(*delay, Arc::clone(&client));
            }
            tokio::time::sleep(Duration::from_secs(31)).await;
            client.calls.load(Ordering::SeqCst)
        });

        prop_assert_eq!(calls, count);
    }
}
