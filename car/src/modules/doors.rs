/// ----- DOORS MODULE -----
/// Keeps track of when the door was opened, so the controller can
/// tell when the hold time has run out.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Door {
    open_since: Option<Duration>,
}

impl Door {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, now: Duration) {
        self.open_since = Some(now);
    }

    pub fn close(&mut self) {
        self.open_since = None;
    }

    pub fn is_open(&self) -> bool {
        self.open_since.is_some()
    }

    /// True once the door has been open for at least `hold`.
    pub fn hold_expired(&self, now: Duration, hold: Duration) -> bool {
        self.open_since
            .is_some_and(|since| now.saturating_sub(since) >= hold)
    }
}
