#![forbid(unsafe_code)]

//! Normalized press notifications from the touch capture layer.
//!
//! A [`Press`] is the snapshot a press source hands over with each
//! notification: the target resolved under the contact (if any), where the
//! contact is, and whether it has moved since it went down. The capture layer
//! owns contacts; consumers only read presses.
//!
//! # Invariants
//!
//! 1. For a given [`ContactId`], notifications arrive as one `Start`, zero or
//!    more `Move`, then one `End`. Distinct contacts may interleave freely.
//! 2. `moved` never flips back to `false` within a contact's lifetime.

use std::fmt;

use web_time::Instant;

use crate::target::Target;

// ---------------------------------------------------------------------------
// ContactId
// ---------------------------------------------------------------------------

/// Stable identifier for one physical touch or pointer from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(pub u32);

impl ContactId {
    /// The single mouse pointer contact.
    pub const MOUSE: Self = Self(u32::MAX);

    /// Create an id from a touch identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::MOUSE {
            f.write_str("mouse")
        } else {
            write!(f, "touch#{}", self.0)
        }
    }
}

impl From<u32> for ContactId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// Screen position of a contact in CSS-style pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Press
// ---------------------------------------------------------------------------

/// One notification's view of a contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Press<T> {
    /// Target under the contact, or `None` over empty space.
    pub target: Option<T>,
    /// Current position.
    pub position: Point,
    /// Whether the contact has moved since it went down.
    pub moved: bool,
}

impl<T> Press<T> {
    /// A fresh, unmoved press over `target`.
    #[must_use]
    pub fn at(target: Option<T>, position: Point) -> Self {
        Self {
            target,
            position,
            moved: false,
        }
    }

    /// A fresh press over `target` at the origin.
    #[must_use]
    pub fn on(target: T) -> Self {
        Self::at(Some(target), Point::default())
    }

    /// A fresh press over empty space.
    #[must_use]
    pub fn empty(position: Point) -> Self {
        Self::at(None, position)
    }

    /// The same contact after moving to `position` over `target`.
    ///
    /// Sets `moved`, which stays set for the rest of the contact.
    #[must_use]
    pub fn moved_to(&self, target: Option<T>, position: Point) -> Self {
        Self {
            target,
            position,
            moved: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Source / sink contracts
// ---------------------------------------------------------------------------

/// Lifecycle of the capture layer that produces presses.
///
/// `start` subscribes to raw input; `stop` unsubscribes. Notifications are
/// delivered to a [`PressSink`] by the host loop between the two.
pub trait PressSource {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Consumer of normalized press notifications.
///
/// Every method takes the host's current time. `advance` lets the host run
/// deferred work (timers) when no press is arriving.
pub trait PressSink<T: Target> {
    fn press_start(&mut self, press: &Press<T>, id: ContactId, now: Instant);
    fn press_move(&mut self, press: &Press<T>, id: ContactId, now: Instant);
    fn press_end(&mut self, press: &Press<T>, id: ContactId, now: Instant);
    fn advance(&mut self, now: Instant);
}

/// A single notification, for queues and recorded scripts.
#[derive(Debug, Clone, PartialEq)]
pub enum PressNotification<T> {
    Start { id: ContactId, press: Press<T> },
    Move { id: ContactId, press: Press<T> },
    End { id: ContactId, press: Press<T> },
}

impl<T: Target> PressNotification<T> {
    /// Contact this notification belongs to.
    #[must_use]
    pub fn id(&self) -> ContactId {
        match self {
            Self::Start { id, .. } | Self::Move { id, .. } | Self::End { id, .. } => *id,
        }
    }

    /// Press payload.
    #[must_use]
    pub fn press(&self) -> &Press<T> {
        match self {
            Self::Start { press, .. } | Self::Move { press, .. } | Self::End { press, .. } => {
                press
            }
        }
    }

    /// Deliver this notification to `sink`.
    pub fn dispatch<S: PressSink<T> + ?Sized>(&self, sink: &mut S, now: Instant) {
        match self {
            Self::Start { id, press } => sink.press_start(press, *id, now),
            Self::Move { id, press } => sink.press_move(press, *id, now),
            Self::End { id, press } => sink.press_end(press, *id, now),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
