//! Auto-rotate as a cancellable periodic task.
//!
//! The driver never sleeps or spawns anything. The event loop asks for the next
//! deadline, wakes up, and calls [`AutoRotateDriver::poll`]. Cancellation is a
//! flag shared with the handle returned by `start`, re-checked on every poll,
//! so a cancelled sweep stops before its next scheduling decision.

use crate::constants::{AUTO_ROTATE_INTERVAL_MS, AUTO_ROTATE_STEP};
use crate::state::EmotionState;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Handle to a running sweep. Clones share the same flag.
#[derive(Clone, Debug)]
pub struct RotateHandle {
    running: Rc<Cell<bool>>,
}

impl RotateHandle {
    fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

#[derive(Debug)]
pub struct AutoRotateDriver {
    interval: Duration,
    step: f64,
    handle: Option<RotateHandle>,
    next_due: Option<Instant>,
}

impl Default for AutoRotateDriver {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(AUTO_ROTATE_INTERVAL_MS),
            AUTO_ROTATE_STEP,
        )
    }
}

impl AutoRotateDriver {
    pub fn new(interval: Duration, step: f64) -> Self {
        Self {
            interval,
            step,
            handle: None,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(RotateHandle::is_running)
    }

    /// Restarts the sweep from phase 0. The first tick is due immediately.
    pub fn start(&mut self, state: &mut EmotionState, now: Instant) -> RotateHandle {
        if let Some(old) = self.handle.take() {
            old.cancel();
        }
        state.restart_auto_rotate();
        let handle = RotateHandle::new();
        self.handle = Some(handle.clone());
        self.next_due = Some(now);
        log::info!("[rotate] started, interval={:?}", self.interval);
        handle
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            log::info!("[rotate] stopped");
        }
        self.next_due = None;
    }

    /// When the event loop should wake up next, if a sweep is live.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.is_running() {
            self.next_due
        } else {
            None
        }
    }

    /// Advances the sweep by one step if a tick is due.
    ///
    /// Returns `true` when the state changed and an interactive frame should
    /// follow. A late poll runs one tick and reschedules from `now`.
    pub fn poll(&mut self, state: &mut EmotionState, now: Instant) -> bool {
        if !self.is_running() {
            self.handle = None;
            self.next_due = None;
            return false;
        }
        match self.next_due {
            Some(due) if now >= due => {
                state.advance_auto_rotate(self.step);
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
