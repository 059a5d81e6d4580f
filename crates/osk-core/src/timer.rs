#![forbid(unsafe_code)]

//! Single-shot cancellable deadlines.
//!
//! A [`TimerSlot`] holds at most one scheduled task: a deadline plus the
//! payload the task needs when it fires. There is no background thread. The
//! owner polls with the current time and takes the payload once it is due.
//!
//! # Invariants
//!
//! 1. At most one task is pending per slot.
//! 2. [`reschedule`](TimerSlot::reschedule) is the only way to arm a slot and
//!    always drops whatever was pending, so a slot can never leak a stale task.
//! 3. A task is due when `now >= deadline`, and is handed out exactly once.

use web_time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Scheduled<P> {
    deadline: Instant,
    payload: P,
}

/// At most one pending single-shot task.
#[derive(Debug, Clone)]
pub struct TimerSlot<P> {
    pending: Option<Scheduled<P>>,
}

impl<P> Default for TimerSlot<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> TimerSlot<P> {
    /// An idle slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Replace any pending task with one due at `now + after`.
    ///
    /// Returns the payload of the task that was replaced, if any.
    pub fn reschedule(&mut self, now: Instant, after: Duration, payload: P) -> Option<P> {
        self.pending
            .replace(Scheduled {
                deadline: now + after,
                payload,
            })
            .map(|s| s.payload)
    }

    /// Drop the pending task without firing it.
    pub fn cancel(&mut self) -> Option<P> {
        self.pending.take().map(|s| s.payload)
    }

    /// Whether a task is scheduled (due or not).
    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a task is scheduled and not yet due at `now`.
    #[inline]
    #[must_use]
    pub fn is_armed_at(&self, now: Instant) -> bool {
        self.pending.as_ref().is_some_and(|s| now < s.deadline)
    }

    /// Deadline of the pending task.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|s| s.deadline)
    }

    /// Payload of the pending task.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<&P> {
        self.pending.as_ref().map(|s| &s.payload)
    }

    /// Take the task if it is due at `now`, returning its deadline and payload.
    pub fn take_due(&mut self, now: Instant) -> Option<(Instant, P)> {
        if !self.pending.as_ref().is_some_and(|s| now >= s.deadline) {
            return None;
        }
        self.pending.take().map(|s| (s.deadline, s.payload))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
