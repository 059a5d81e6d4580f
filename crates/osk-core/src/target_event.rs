#![forbid(unsafe_code)]

//! Key-target lifecycle events.
//!
//! [`TargetEvent`] is what the resolution engine decides about a target:
//! activated, moved in or out, long-pressed, and finally exactly one of
//! committed, double-tapped, or cancelled. Consumers subscribe through
//! [`TargetObserver`]; every method has a no-op default so an observer only
//! implements the events it cares about.
//!
//! # Invariants
//!
//! 1. Each logical event is delivered at most once, synchronously, before the
//!    engine handler that produced it returns.
//! 2. A tracked contact ends in exactly one of `Committed`, `DoubleTapped`, or
//!    `Cancelled`.

use std::sync::mpsc::Sender;

use crate::press::Press;

// ---------------------------------------------------------------------------
// TargetEvent
// ---------------------------------------------------------------------------

/// A recorded target lifecycle event.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetEvent<T> {
    /// A sibling contact is about to activate; `target` is already active.
    NewTargetWillActivate(T),
    Activated(T),
    LongPressed(T),
    MovedOut { target: T, press: Press<T> },
    MovedIn(T),
    Committed(T),
    Cancelled(T),
    DoubleTapped(T),
}

impl<T> TargetEvent<T> {
    /// The target this event concerns.
    #[must_use]
    pub fn target(&self) -> &T {
        match self {
            Self::NewTargetWillActivate(t)
            | Self::Activated(t)
            | Self::LongPressed(t)
            | Self::MovedIn(t)
            | Self::Committed(t)
            | Self::Cancelled(t)
            | Self::DoubleTapped(t) => t,
            Self::MovedOut { target, .. } => target,
        }
    }

    /// Short event name for logs and assertions.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewTargetWillActivate(_) => "new_target_will_activate",
            Self::Activated(_) => "activated",
            Self::LongPressed(_) => "long_pressed",
            Self::MovedOut { .. } => "moved_out",
            Self::MovedIn(_) => "moved_in",
            Self::Committed(_) => "committed",
            Self::Cancelled(_) => "cancelled",
            Self::DoubleTapped(_) => "double_tapped",
        }
    }

    /// Whether this event ends the target's press (commit, double-tap, cancel).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Committed(_) | Self::DoubleTapped(_) | Self::Cancelled(_)
        )
    }
}

// ---------------------------------------------------------------------------
// TargetObserver
// ---------------------------------------------------------------------------

/// Receives target lifecycle callbacks from the resolution engine.
#[allow(unused_variables)]
pub trait TargetObserver<T> {
    fn activated(&mut self, target: &T) {}
    fn long_pressed(&mut self, target: &T) {}
    fn moved_out(&mut self, target: &T, press: &Press<T>) {}
    fn moved_in(&mut self, target: &T) {}
    fn committed(&mut self, target: &T) {}
    fn cancelled(&mut self, target: &T) {}
    fn double_tapped(&mut self, target: &T) {}
    fn new_target_will_activate(&mut self, target: &T) {}
}

impl<T> TargetObserver<T> for () {}

/// Records every event in delivery order.
impl<T: Clone> TargetObserver<T> for Vec<TargetEvent<T>> {
    fn activated(&mut self, target: &T) {
        self.push(TargetEvent::Activated(target.clone()));
    }
    fn long_pressed(&mut self, target: &T) {
        self.push(TargetEvent::LongPressed(target.clone()));
    }
    fn moved_out(&mut self, target: &T, press: &Press<T>) {
        self.push(TargetEvent::MovedOut {
            target: target.clone(),
            press: press.clone(),
        });
    }
    fn moved_in(&mut self, target: &T) {
        self.push(TargetEvent::MovedIn(target.clone()));
    }
    fn committed(&mut self, target: &T) {
        self.push(TargetEvent::Committed(target.clone()));
    }
    fn cancelled(&mut self, target: &T) {
        self.push(TargetEvent::Cancelled(target.clone()));
    }
    fn double_tapped(&mut self, target: &T) {
        self.push(TargetEvent::DoubleTapped(target.clone()));
    }
    fn new_target_will_activate(&mut self, target: &T) {
        self.push(TargetEvent::NewTargetWillActivate(target.clone()));
    }
}

/// Forwards every event over a channel. A hung-up receiver drops events.
impl<T: Clone> TargetObserver<T> for Sender<TargetEvent<T>> {
    fn activated(&mut self, target: &T) {
        let _ = self.send(TargetEvent::Activated(target.clone()));
    }
    fn long_pressed(&mut self, target: &T) {
        let _ = self.send(TargetEvent::LongPressed(target.clone()));
    }
    fn moved_out(&mut self, target: &T, press: &Press<T>) {
        let _ = self.send(TargetEvent::MovedOut {
            target: target.clone(),
            press: press.clone(),
        });
    }
    fn moved_in(&mut self, target: &T) {
        let _ = self.send(TargetEvent::MovedIn(target.clone()));
    }
    fn committed(&mut self, target: &T) {
        let _ = self.send(TargetEvent::Committed(target.clone()));
    }
    fn cancelled(&mut self, target: &T) {
        let _ = self.send(TargetEvent::Cancelled(target.clone()));
    }
    fn double_tapped(&mut self, target: &T) {
        let _ = self.send(TargetEvent::DoubleTapped(target.clone()));
    }
    fn new_target_will_activate(&mut self, target: &T) {
        let _ = self.send(TargetEvent::NewTargetWillActivate(target.clone()));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
