//! Debounced commit of search input.
//!
//! The visible input string updates on every keystroke; the expensive part
//! (a network round-trip) only runs once typing pauses. Each keystroke
//! re-arms a single pending commit, so a burst of input produces exactly
//! one downstream query carrying the final value.

use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before the value is committed.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone, Debug)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Deadline-based debouncer, driven by the event loop.
///
/// There is no timer thread: the owner calls [`Debouncer::poll`] on every
/// loop tick with the current time and receives the committed value once
/// the deadline has passed. Dropping the debouncer (or calling
/// [`Debouncer::cancel`]) discards a pending commit, which covers the
/// disposal-while-armed case.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm (or re-arm) the pending commit with a new value. A previously
    /// armed value is superseded and will never be committed.
    pub fn submit(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.delay,
        });
    }

    /// Commit the pending value immediately, bypassing the delay.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Commit the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            return self.flush();
        }
        None
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}
