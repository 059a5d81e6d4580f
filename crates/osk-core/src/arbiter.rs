#![forbid(unsafe_code)]

//! Peripheral arbiters the resolution engine consults.
//!
//! Both arbiters are synchronous query/command services. The engine asks
//! them questions and issues commands; it never shares mutable state with
//! them. They are assumed infallible.

use crate::press::Press;

/// Owner of the alternate-character popup for a long-pressed key.
///
/// While shown, the popup claims a locked hit-area: contacts inside it
/// resolve to menu targets instead of the keys underneath.
pub trait AltMenuArbiter<T> {
    /// Whether the popup is currently visible.
    fn is_shown(&self) -> bool;

    /// Show the popup of alternates for `target`.
    ///
    /// May decline (the key has no alternates); callers re-check
    /// [`is_shown`](Self::is_shown) afterwards.
    fn show(&mut self, target: &T);

    /// Hide the popup. Hiding a hidden popup is a no-op.
    fn hide(&mut self);

    /// Whether `target` is one of the popup's alternates.
    fn is_menu_target(&self, target: &T) -> bool;

    /// Whether the press lies inside the popup's locked hit-area.
    fn is_in_menu_area(&self, press: &Press<T>) -> bool;

    /// Resolve the press position to a popup alternate.
    fn menu_target(&self, press: &Press<T>) -> Option<T>;
}

/// Owner of the handwriting surface.
///
/// Once writing starts, every contact's routing belongs to this arbiter until
/// the stroke ends.
pub trait HandwritingArbiter<T> {
    /// Whether a handwriting stroke is in progress.
    fn is_writing(&self) -> bool;

    /// Whether `target` is the handwriting surface.
    fn is_handwriting_pad(&self, target: &T) -> bool;

    fn press_start(&mut self, press: &Press<T>);
    fn press_move(&mut self, press: &Press<T>);
    fn press_end(&mut self, target: &T);
}

/// Layout without an alternate-character popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoAltMenu;

impl<T> AltMenuArbiter<T> for NoAltMenu {
    fn is_shown(&self) -> bool {
        false
    }
    fn show(&mut self, _target: &T) {}
    fn hide(&mut self) {}
    fn is_menu_target(&self, _target: &T) -> bool {
        false
    }
    fn is_in_menu_area(&self, _press: &Press<T>) -> bool {
        false
    }
    fn menu_target(&self, _press: &Press<T>) -> Option<T> {
        None
    }
}

/// Layout without a handwriting pad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHandwriting;

impl<T> HandwritingArbiter<T> for NoHandwriting {
    fn is_writing(&self) -> bool {
        false
    }
    fn is_handwriting_pad(&self, _target: &T) -> bool {
        false
    }
    fn press_start(&mut self, _press: &Press<T>) {}
    fn press_move(&mut self, _press: &Press<T>) {}
    fn press_end(&mut self, _target: &T) {}
}
