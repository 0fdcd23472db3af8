//! Minimum-interval gate for rate-limited sound effects

use std::time::{Duration, Instant};

/// Suppresses triggers that arrive within `window` of the last accepted one
#[derive(Debug, Clone, Copy)]
pub struct Cooldown {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Try to pass the gate at `now`.
    ///
    /// Returns `true` and records `now` when the window has elapsed since the
    /// last accepted trigger. A rejected trigger leaves the timestamp untouched.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.window {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}
