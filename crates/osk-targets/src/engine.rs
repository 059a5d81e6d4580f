#![forbid(unsafe_code)]

//! Target resolution engine: raw contacts in, key-target lifecycle out.
//!
//! [`ActiveTargets`] turns press-start/move/end notifications for any number
//! of concurrent contacts into [`TargetObserver`] callbacks, arbitrating with
//! the alternate-character menu and the handwriting surface along the way.
//!
//! # State machine
//!
//! Each outstanding contact is a row in the contact table, tagged
//! [`ContactState::Vacant`], [`ContactState::Tracked`], or
//! [`ContactState::HandwritingOwned`]. Around the table sit two single-shot
//! timers:
//!
//! - **Long-press**: armed only while exactly one contact is down and that
//!   contact is tracked on a key. Any table mutation re-evaluates it.
//! - **Double-tap**: remembers the last committed target for one window. A
//!   second release on the same target inside the window is a double-tap.
//!
//! # Invariants
//!
//! 1. A contact is in the table iff its start was accepted and neither its end
//!    nor a cancellation has been processed.
//! 2. A tracked contact ends in exactly one of committed, double-tapped, or
//!    cancelled.
//! 3. At most one long-press and one double-tap task are pending. Every arm
//!    goes through `TimerSlot::reschedule`, which drops the previous task.
//! 4. Deferred work re-checks the table when it fires; a released contact
//!    never long-presses.
//!
//! # Failure Modes
//!
//! - Move/end for an unknown contact: ignored.
//! - `clear_all_targets` with contacts outstanding: a warning is logged (the
//!   caller lost track of input) and every contact is cancelled.
//!
//! # Time
//!
//! Handlers take the host's `now`. Before handling a notification the engine
//! fires every timer due at or before `now`, in deadline order, so late
//! polling never reorders a long-press after the release that followed it.

use std::fmt;

use osk_core::{
    AltMenuArbiter, ContactId, HandwritingArbiter, Press, PressSink, PressSource, Target,
    TargetObserver, TimerSlot, TimingConfig,
};
use tracing::{debug, trace, warn};
use web_time::Instant;

use crate::contact_table::{ContactState, ContactTable};
use crate::error::Result;

const LOG_TARGET: &str = "osk.targets";

/// The collaborators an engine runs with, handed back on [`ActiveTargets::stop`].
#[derive(Debug, Clone, Default)]
pub struct Peripherals<M, H, O> {
    pub menu: M,
    pub handwriting: H,
    pub observer: O,
}

/// Multi-contact press-to-target resolution engine.
pub struct ActiveTargets<T, M, H, O> {
    config: TimingConfig,
    contacts: ContactTable<T>,
    long_press: TimerSlot<ContactId>,
    double_tap: TimerSlot<T>,
    menu: M,
    handwriting: H,
    observer: O,
}

impl<T: Target, M, H, O> fmt::Debug for ActiveTargets<T, M, H, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveTargets")
            .field("contacts", &self.contacts.len())
            .field("long_press", &self.long_press.pending())
            .field("last_tap", &self.double_tap.pending())
            .finish()
    }
}

impl<T, M, H, O> ActiveTargets<T, M, H, O>
where
    T: Target,
    M: AltMenuArbiter<T>,
    H: HandwritingArbiter<T>,
    O: TargetObserver<T>,
{
    /// Validate `config`, subscribe to `source`, and start resolving.
    pub fn start<S>(
        config: TimingConfig,
        source: &mut S,
        peripherals: Peripherals<M, H, O>,
    ) -> Result<Self>
    where
        S: PressSource + ?Sized,
    {
        config.validate()?;
        source.start();
        debug!(
            target: LOG_TARGET,
            long_press_ms = config.long_press_timeout.as_millis() as u64,
            double_tap_ms = config.double_tap_timeout.as_millis() as u64,
            "target resolution started"
        );
        Ok(Self {
            config,
            contacts: ContactTable::default(),
            long_press: TimerSlot::new(),
            double_tap: TimerSlot::new(),
            menu: peripherals.menu,
            handwriting: peripherals.handwriting,
            observer: peripherals.observer,
        })
    }

    /// Unsubscribe from `source`, drop all state without callbacks, and hand
    /// the collaborators back.
    pub fn stop<S>(mut self, source: &mut S) -> Peripherals<M, H, O>
    where
        S: PressSource + ?Sized,
    {
        source.stop();
        let dropped = self.contacts.len();
        self.contacts.clear();
        self.long_press.cancel();
        self.double_tap.cancel();
        debug!(target: LOG_TARGET, dropped, "target resolution stopped");

        let Self {
            menu,
            handwriting,
            observer,
            ..
        } = self;
        Peripherals {
            menu,
            handwriting,
            observer,
        }
    }

    // -----------------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------------

    /// A contact went down.
    pub fn press_start(&mut self, press: &Press<T>, id: ContactId, now: Instant) {
        self.advance(now);

        // A modal sub-interaction owns input; new touches are locked out.
        if self.menu.is_shown() || self.handwriting.is_writing() {
            debug!(target: LOG_TARGET, %id, "press locked out");
            return;
        }

        for other in self.contacts.others(id) {
            self.observer.new_target_will_activate(other);
        }

        let Some(target) = press.target.clone() else {
            trace!(target: LOG_TARGET, %id, "press started over empty space");
            self.contacts.insert(id, ContactState::Vacant, press.clone());
            self.long_press.cancel();
            return;
        };

        if self.handwriting.is_handwriting_pad(&target) {
            // The pad takes a contact of its own; no key can be held alone now.
            self.contacts
                .insert(id, ContactState::HandwritingOwned(target), press.clone());
            self.long_press.cancel();
            self.handwriting.press_start(press);
            return;
        }

        self.contacts
            .insert(id, ContactState::Tracked(target.clone()), press.clone());
        self.observer.activated(&target);
        self.rearm_long_press(id, now);
    }

    /// A contact moved.
    pub fn press_move(&mut self, press: &Press<T>, id: ContactId, now: Instant) {
        self.advance(now);
        self.resolve_move(press, id, now);
    }

    /// A contact lifted.
    pub fn press_end(&mut self, _press: &Press<T>, id: ContactId, now: Instant) {
        self.advance(now);

        let Some(contact) = self.contacts.remove(id) else {
            trace!(target: LOG_TARGET, %id, "end for untracked contact ignored");
            return;
        };

        if self.handwriting.is_writing() || contact.state.is_handwriting() {
            if let Some(target) = contact.state.target() {
                self.handwriting.press_end(target);
            }
            if self.contacts.is_empty() {
                self.menu.hide();
                self.long_press.cancel();
            }
            return;
        }

        self.menu.hide();
        self.long_press.cancel();

        let ContactState::Tracked(target) = contact.state else {
            // A tap on empty space breaks a tap sequence.
            self.double_tap.cancel();
            return;
        };

        if self.double_tap.is_armed_at(now) && self.double_tap.pending() == Some(&target) {
            self.double_tap.cancel();
            debug!(target: LOG_TARGET, %id, key = ?target, "double tap");
            self.observer.double_tapped(&target);
        } else {
            self.double_tap
                .reschedule(now, self.config.double_tap_timeout, target.clone());
            self.observer.committed(&target);
        }
    }

    /// Cancel every outstanding contact (focus loss, layout switch).
    ///
    /// Leaves the double-tap memory alone; see [`forget_last_tap`](Self::forget_last_tap).
    pub fn clear_all_targets(&mut self) {
        if !self.contacts.is_empty() {
            warn!(
                target: LOG_TARGET,
                outstanding = self.contacts.len() as u64,
                "active targets exist; clearing them"
            );
        }
        for contact in self.contacts.drain() {
            if let Some(target) = contact.state.target() {
                self.observer.cancelled(target);
            }
        }
        self.menu.hide();
        self.long_press.cancel();
    }

    /// Drop the remembered last tap so the next release always commits.
    pub fn forget_last_tap(&mut self) {
        self.double_tap.cancel();
    }

    // -----------------------------------------------------------------------
    // Timers
    // -----------------------------------------------------------------------

    /// Fire every timer due at or before `now`, earliest first.
    pub fn advance(&mut self, now: Instant) {
        loop {
            let long_press = self.long_press.deadline().filter(|d| *d <= now);
            let double_tap = self.double_tap.deadline().filter(|d| *d <= now);
            match (long_press, double_tap) {
                (None, None) => break,
                (Some(lp), Some(dt)) if dt < lp => self.expire_double_tap(now),
                (Some(_), _) => {
                    if let Some((at, id)) = self.long_press.take_due(now) {
                        self.fire_long_press(id, at);
                    }
                }
                (None, Some(_)) => self.expire_double_tap(now),
            }
        }
    }

    /// When the host loop should next call [`advance`](Self::advance).
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.long_press.deadline(), self.double_tap.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn fire_long_press(&mut self, id: ContactId, at: Instant) {
        let Some(contact) = self.contacts.get(id) else {
            return;
        };
        let ContactState::Tracked(target) = &contact.state else {
            return;
        };
        let target = target.clone();
        let press = contact.press.clone();

        debug!(target: LOG_TARGET, %id, key = ?target, "long press");
        self.observer.long_pressed(&target);
        self.menu.show(&target);
        if self.menu.is_shown() {
            // Re-evaluate the resting finger against the popup that just appeared.
            self.resolve_move(&press, id, at);
        }
    }

    fn expire_double_tap(&mut self, now: Instant) {
        if let Some((_, target)) = self.double_tap.take_due(now) {
            trace!(target: LOG_TARGET, key = ?target, "double tap window closed");
        }
    }

    fn rearm_long_press(&mut self, id: ContactId, now: Instant) {
        if self.contacts.len() == 1 {
            self.long_press
                .reschedule(now, self.config.long_press_timeout, id);
        } else {
            self.long_press.cancel();
        }
    }

    // -----------------------------------------------------------------------
    // Move resolution
    // -----------------------------------------------------------------------

    fn resolve_move(&mut self, press: &Press<T>, id: ContactId, now: Instant) {
        let Some(contact) = self.contacts.get_mut(id) else {
            trace!(target: LOG_TARGET, %id, "move for untracked contact ignored");
            return;
        };
        contact.press = press.clone();
        let previous = contact.state.target().cloned();

        let resolved = if self.menu.is_shown() && self.menu.is_in_menu_area(press) {
            self.menu.menu_target(press)
        } else {
            press.target.clone()
        };
        let Some(target) = resolved else {
            return;
        };

        // Selection targets scroll; a moved contact on one is not a key drag.
        if press.moved
            && let Some(old) = previous.as_ref()
            && old.is_selection()
        {
            self.contacts.remove(id);
            debug!(target: LOG_TARGET, %id, key = ?old, "selection drag cancels press");
            self.observer.cancelled(old);
            self.menu.hide();
            self.long_press.cancel();
            return;
        }

        let on_pad = self.handwriting.is_handwriting_pad(&target);
        if self.handwriting.is_writing() {
            if on_pad {
                self.handwriting.press_move(press);
            }
            return;
        }
        if on_pad {
            self.handwriting.press_start(press);
            self.contacts
                .set_state(id, ContactState::HandwritingOwned(target.clone()));
            if let Some(old) = previous.as_ref()
                && *old != target
            {
                self.observer.moved_out(old, press);
            }
            self.hide_menu_unless_claimed(&target, press);
            self.long_press.cancel();
            return;
        }

        if previous.as_ref() == Some(&target) {
            return;
        }

        self.contacts
            .set_state(id, ContactState::Tracked(target.clone()));
        if let Some(old) = previous.as_ref() {
            self.observer.moved_out(old, press);
        }
        self.observer.moved_in(&target);
        self.hide_menu_unless_claimed(&target, press);
        self.rearm_long_press(id, now);
    }

    fn hide_menu_unless_claimed(&mut self, target: &T, press: &Press<T>) {
        if !self.menu.is_menu_target(target) && !self.menu.is_in_menu_area(press) {
            self.menu.hide();
        }
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    /// Number of outstanding contacts.
    #[inline]
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_tracking(&self, id: ContactId) -> bool {
        self.contacts.get(id).is_some()
    }

    #[must_use]
    pub fn contact_state(&self, id: ContactId) -> Option<&ContactState<T>> {
        self.contacts.get(id).map(|c| &c.state)
    }

    /// Target currently attributed to `id`.
    #[must_use]
    pub fn active_target(&self, id: ContactId) -> Option<&T> {
        self.contact_state(id).and_then(ContactState::target)
    }

    /// Contact the pending long-press belongs to.
    #[must_use]
    pub fn long_press_pending(&self) -> Option<ContactId> {
        self.long_press.pending().copied()
    }

    /// Target remembered for double-tap detection.
    #[must_use]
    pub fn last_tap(&self) -> Option<&T> {
        self.double_tap.pending()
    }

    pub fn menu(&self) -> &M {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut M {
        &mut self.menu
    }

    pub fn handwriting(&self) -> &H {
        &self.handwriting
    }

    pub fn handwriting_mut(&mut self) -> &mut H {
        &mut self.handwriting
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

impl<T, M, H, O> PressSink<T> for ActiveTargets<T, M, H, O>
where
    T: Target,
    M: AltMenuArbiter<T>,
    H: HandwritingArbiter<T>,
    O: TargetObserver<T>,
{
    fn press_start(&mut self, press: &Press<T>, id: ContactId, now: Instant) {
        ActiveTargets::press_start(self, press, id, now);
    }

    fn press_move(&mut self, press: &Press<T>, id: ContactId, now: Instant) {
        ActiveTargets::press_move(self, press, id, now);
    }

    fn press_end(&mut self, press: &Press<T>, id: ContactId, now: Instant) {
        ActiveTargets::press_end(self, press, id, now);
    }

    fn advance(&mut self, now: Instant) {
        ActiveTargets::advance(self, now);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
