//! Single-shot and continuous run modes.
//!
//! The loop keeps no state between cycles: each iteration reads the clock,
//! builds a fresh commit message and runs one sync cycle. Time and waiting
//! are injected through [`Clock`] and [`Waiter`].

use crate::constants::{CONTINUOUS_COMMIT_PREFIX, ONCE_COMMIT_MESSAGE, TIMESTAMP_FORMAT};
use crate::git::VersionControl;
use crate::sync::{self, SyncCallbacks};
use chrono::NaiveDateTime;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Blocks between cycles.
pub trait Waiter {
    /// Waits up to `duration`. Returns `true` if shutdown was requested,
    /// either before or during the wait.
    fn wait(&self, duration: Duration) -> bool;

    /// Checked between commands without blocking.
    fn is_interrupted(&self) -> bool;
}

/// Shutdown flag that also wakes a pending [`Waiter::wait`].
#[derive(Debug, Default)]
pub struct Shutdown {
    requested: AtomicBool,
    lock: Mutex<()>,
    wake: Condvar,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.requested.store(true, Ordering::SeqCst);
        self.wake.notify_all();
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

impl Waiter for Shutdown {
    fn wait(&self, duration: Duration) -> bool {
        let guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let _guard = self
            .wake
            .wait_timeout_while(guard, duration, |_| !self.is_requested())
            .unwrap_or_else(PoisonError::into_inner);
        self.is_requested()
    }

    fn is_interrupted(&self) -> bool {
        self.is_requested()
    }
}

/// `Update leaderboard [YYYY-MM-DD HH:MM:SS]`
#[must_use]
pub fn continuous_commit_message(at: NaiveDateTime) -> String {
    format!(
        "{} [{}]",
        CONTINUOUS_COMMIT_PREFIX,
        at.format(TIMESTAMP_FORMAT)
    )
}

/// Runs one sync cycle with the fixed single-shot message.
pub fn run_once(vcs: &dyn VersionControl, callbacks: &dyn SyncCallbacks) -> bool {
    sync::commit_and_push(vcs, ONCE_COMMIT_MESSAGE, callbacks)
}

/// Runs sync cycles every `interval` until the waiter reports shutdown.
///
/// Shutdown is checked before each cycle and between stage, commit and push;
/// a command already running is not cancelled. Returns the number of cycles
/// started.
pub fn run_continuous(
    vcs: &dyn VersionControl,
    clock: &dyn Clock,
    waiter: &dyn Waiter,
    interval: Duration,
    callbacks: &dyn SyncCallbacks,
) -> usize {
    callbacks.on_watch_start(interval);

    let mut cycles = 0;
    while !waiter.is_interrupted() {
        let message = continuous_commit_message(clock.now());
        let interrupted = || waiter.is_interrupted();
        let changed = sync::commit_and_push_until(vcs, &message, callbacks, &interrupted);
        cycles += 1;

        if waiter.is_interrupted() {
            break;
        }
        if changed {
            callbacks.on_pushed();
        }

        callbacks.on_wait_start(interval);
        let interrupted = waiter.wait(interval);
        callbacks.on_wait_end();

        if interrupted {
            break;
        }
    }

    callbacks.on_stopped();
    cycles
}
