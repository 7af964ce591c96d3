//! Debounced reaction to viewport resizes.
//!
//! Resize events arrive in bursts. The adapter only re-measures the
//! element's viewport offsets once no event has been seen for
//! [`Debouncer::THRESHOLD`]; re-measuring never interrupts a running
//! sequence.

use web_time::{Duration, Instant};

/// What a debounce timer should do when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncePoll {
    /// The burst is over: re-measure now.
    Fire,
    /// More events arrived meanwhile; check again after this delay.
    Rearm(Duration),
    /// Nothing pending.
    Idle,
}

/// Coalesces bursts of resize events into one callback.
#[derive(Debug, Default, Clone)]
pub struct Debouncer {
    last_event: Option<Instant>,
    armed: bool,
}

impl Debouncer {
    /// Quiet period that ends a burst.
    pub const THRESHOLD: Duration = Duration::from_millis(50);

    /// Idle debouncer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event at `now`. Returns true when the caller must arm a
    /// timer for [`THRESHOLD`](Self::THRESHOLD); false if one is already
    /// pending.
    pub fn notify(&mut self, now: Instant) -> bool {
        self.last_event = Some(now);
        if self.armed {
            false
        } else {
            self.armed = true;
            true
        }
    }

    /// Called when the armed timer fires at `now`.
    pub fn poll(&mut self, now: Instant) -> DebouncePoll {
        let Some(last) = self.last_event else {
            self.armed = false;
            return DebouncePoll::Idle;
        };
        let quiet = now.saturating_duration_since(last);
        if quiet >= Self::THRESHOLD {
            self.last_event = None;
            self.armed = false;
            DebouncePoll::Fire
        } else {
            DebouncePoll::Rearm(Self::THRESHOLD - quiet)
        }
    }

    /// Whether a timer is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
