//! Deferred close after the input loses focus
//!
//! Blur arms the timer instead of closing straight away so that a click on a
//! menu item, which blurs the input first, can still select. Focus, item
//! clicks and unmount cancel it. At most one close is pending per widget; a
//! second blur restarts the delay.

use std::time::{Duration, Instant};

pub const DEFAULT_BLUR_CLOSE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug)]
pub struct BlurTimer {
    delay: Duration,
    /// When the pending close was armed, `None` when nothing is pending
    armed_at: Option<Instant>,
}

impl Default for BlurTimer {
    fn default() -> Self {
        Self::new(DEFAULT_BLUR_CLOSE_DELAY)
    }
}

impl BlurTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            armed_at: None,
        }
    }

    pub fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    /// Arm (or re-arm) the pending close starting at `now`.
    pub fn arm_at(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    /// Drop the pending close. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.armed_at.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn is_due_at(&self, now: Instant) -> bool {
        match self.armed_at {
            Some(armed_at) => now.saturating_duration_since(armed_at) >= self.delay,
            None => false,
        }
    }

    /// Fire-and-clear: returns `true` exactly once per armed close, when due.
    pub fn take_due_at(&mut self, now: Instant) -> bool {
        if self.is_due_at(now) {
            self.armed_at = None;
            true
        } else {
            false
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }
}

#[cfg(test)]
#[path = "blur_timer_tests.rs"]
mod blur_timer_tests;
