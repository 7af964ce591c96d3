//! Deterministic host loop.
//!
//! Plays the scheduler role for a [`PaperFold`] without a real clock:
//! timers advance virtual time by their delay and a pending transition is
//! assumed to complete after one step duration, before its backstop. Used
//! by tests and the demo binary to run whole sequences offline.

use web_time::Duration;

use crate::sequencer::{PaperFold, Signal, Wake};
use crate::surface::Surface;

/// One delivered event, stamped with virtual time since the driver
/// started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Virtual time the event was delivered at.
    pub at: Duration,
    /// What was delivered.
    pub signal: Signal,
    /// What the machine asked for next.
    pub wake: Wake,
}

/// Virtual-time scheduler.
#[derive(Debug, Default, Clone)]
pub struct Driver {
    now: Duration,
    log: Vec<Tick>,
}

impl Driver {
    /// Driver at virtual time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Every delivered event, oldest first.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.log
    }

    /// Deliver the signal `wake` asks for, advancing virtual time.
    ///
    /// Returns `None` when `wake` requests nothing.
    pub fn step<S: Surface + ?Sized>(
        &mut self,
        fold: &mut PaperFold,
        surface: &mut S,
        wake: Wake,
    ) -> Option<Wake> {
        let signal = match wake {
            Wake::After(delay) => {
                self.now += delay;
                Signal::Timer
            }
            Wake::TransitionEnd { .. } => {
                self.now += fold.options().step_duration();
                Signal::TransitionEnd {
                    from_overlay: false,
                }
            }
            Wake::Idle | Wake::Unchanged => return None,
        };
        let next = fold.handle(surface, signal);
        self.log.push(Tick {
            at: self.now,
            signal,
            wake: next,
        });
        Some(next)
    }

    /// Drive the machine until it goes idle (or stops asking for events).
    /// Returns the last wake-up requested.
    ///
    /// A sequence of N folds takes at most 3N + 1 events; the run stops
    /// there even if the machine keeps asking.
    pub fn run<S: Surface + ?Sized>(
        &mut self,
        fold: &mut PaperFold,
        surface: &mut S,
        mut wake: Wake,
    ) -> Wake {
        let limit = 3 * fold.options().folds + 1;
        for _ in 0..limit {
            match self.step(fold, surface, wake) {
                Some(next) => wake = next,
                None => return wake,
            }
        }
        if wake != Wake::Idle {
            log::warn!("driver stopped after {limit} events");
        }
        wake
    }
}
