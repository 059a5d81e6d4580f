#![forbid(unsafe_code)]

//! Logical key targets.

use std::fmt::Debug;

/// An opaque, comparable handle to a logical key or interactive element.
///
/// Targets are compared by equality, never by position: two presses over the
/// same key resolve to equal targets regardless of where inside the key cap
/// they landed. Handles are cloned freely, so implementors should be cheap to
/// clone (an index, an `Rc`, or a small struct).
pub trait Target: Clone + Eq + Debug {
    /// Whether this target is a selection (scrollable) surface, such as a
    /// candidate strip. Dragging a moved contact off a selection target
    /// cancels it instead of sliding to the neighbouring key.
    fn is_selection(&self) -> bool {
        false
    }
}
