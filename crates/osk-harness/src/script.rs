#![forbid(unsafe_code)]

//! Deterministic press streams.
//!
//! A [`PressScript`] is an ordered list of notifications stamped with
//! millisecond offsets from a [`VirtualClock`] origin. Replaying it into a
//! [`PressSink`] produces the same engine decisions on every run, regardless
//! of wall-clock jitter, because the sink only ever sees the scripted `now`.
//!
//! ```rust,ignore
//! let clock = VirtualClock::new();
//! PressScript::new()
//!     .tap(ContactId::new(1), key_a, 0, 40)
//!     .tap(ContactId::new(1), key_a, 200, 40)
//!     .replay(&clock, &mut engine);
//! ```

use osk_core::{ContactId, Point, Press, PressNotification, PressSink, Target};
use web_time::{Duration, Instant};

/// A fixed origin that millisecond offsets are measured from.
#[derive(Debug, Clone, Copy)]
pub struct VirtualClock {
    origin: Instant,
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Instant `ms` milliseconds after the origin.
    #[must_use]
    pub fn at(&self, ms: u64) -> Instant {
        self.origin + Duration::from_millis(ms)
    }

    #[must_use]
    pub fn origin(&self) -> Instant {
        self.origin
    }
}

/// Timed notification list.
#[derive(Debug, Clone)]
pub struct PressScript<T> {
    steps: Vec<(u64, PressNotification<T>)>,
}

impl<T> Default for PressScript<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T: Target> PressScript<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contact `id` goes down on `target` at `at_ms`.
    #[must_use]
    pub fn start(self, at_ms: u64, id: ContactId, target: Option<T>, position: Point) -> Self {
        self.push(at_ms, PressNotification::Start {
            id,
            press: Press::at(target, position),
        })
    }

    /// Contact `id` slides onto `target` at `at_ms`.
    #[must_use]
    pub fn slide(self, at_ms: u64, id: ContactId, target: Option<T>, position: Point) -> Self {
        self.push(at_ms, PressNotification::Move {
            id,
            press: Press {
                target,
                position,
                moved: true,
            },
        })
    }

    /// Contact `id` lifts at `at_ms`.
    #[must_use]
    pub fn end(self, at_ms: u64, id: ContactId, target: Option<T>, position: Point) -> Self {
        self.push(at_ms, PressNotification::End {
            id,
            press: Press {
                target,
                position,
                moved: false,
            },
        })
    }

    /// Start at `at_ms` and end `hold_ms` later, in place, over `target`.
    #[must_use]
    pub fn tap(self, id: ContactId, target: T, at_ms: u64, hold_ms: u64) -> Self {
        self.start(at_ms, id, Some(target.clone()), Point::default())
            .end(at_ms + hold_ms, id, Some(target), Point::default())
    }

    /// Append an arbitrary notification.
    #[must_use]
    pub fn push(mut self, at_ms: u64, notification: PressNotification<T>) -> Self {
        self.steps.push((at_ms, notification));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Offset of the last step.
    #[must_use]
    pub fn last_ms(&self) -> u64 {
        self.steps.iter().map(|(ms, _)| *ms).max().unwrap_or(0)
    }

    /// Deliver every step in time order (stable for equal offsets).
    pub fn replay<S: PressSink<T> + ?Sized>(&self, clock: &VirtualClock, sink: &mut S) {
        let mut order: Vec<_> = self.steps.iter().collect();
        order.sort_by_key(|(ms, _)| *ms);
        for (ms, notification) in order {
            notification.dispatch(sink, clock.at(*ms));
        }
    }

    /// Replay, then advance the sink to `settle_ms` past the last step.
    pub fn replay_and_settle<S: PressSink<T> + ?Sized>(
        &self,
        clock: &VirtualClock,
        sink: &mut S,
        settle_ms: u64,
    ) {
        self.replay(clock, sink);
        sink.advance(clock.at(self.last_ms() + settle_ms));
    }
}
