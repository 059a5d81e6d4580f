#![forbid(unsafe_code)]

//! Per-contact active-target table.
//!
//! Maps each outstanding [`ContactId`] to its [`ContactState`] and the latest
//! press seen for it. Membership is the single source of truth for "is this
//! contact still down": a contact is present iff its start has been seen and
//! neither its end nor a cancellation has been processed.
//!
//! Contact counts are bounded by the number of fingers on the glass, so the
//! table is a small vector with stable insertion-order iteration.

use osk_core::press::{ContactId, Press};

/// What regime a tracked contact is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactState<T> {
    /// Went down over empty space and has not reached a target yet.
    Vacant,
    /// Attributed to a key target.
    Tracked(T),
    /// Routed to the handwriting surface.
    HandwritingOwned(T),
}

impl<T> ContactState<T> {
    /// Target attributed to the contact, whatever the regime.
    #[must_use]
    pub fn target(&self) -> Option<&T> {
        match self {
            Self::Vacant => None,
            Self::Tracked(t) | Self::HandwritingOwned(t) => Some(t),
        }
    }

    #[must_use]
    pub fn is_handwriting(&self) -> bool {
        matches!(self, Self::HandwritingOwned(_))
    }
}

/// One table row.
#[derive(Debug, Clone)]
pub(crate) struct Contact<T> {
    pub(crate) id: ContactId,
    pub(crate) state: ContactState<T>,
    /// Latest press for this contact, refreshed on every tracked move.
    pub(crate) press: Press<T>,
}

/// Outstanding contacts keyed by id.
#[derive(Debug, Clone)]
pub(crate) struct ContactTable<T> {
    rows: Vec<Contact<T>>,
}

impl<T> Default for ContactTable<T> {
    fn default() -> Self {
        Self {
            rows: Vec::with_capacity(4),
        }
    }
}

impl<T> ContactTable<T> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn get(&self, id: ContactId) -> Option<&Contact<T>> {
        self.rows.iter().find(|c| c.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ContactId) -> Option<&mut Contact<T>> {
        self.rows.iter_mut().find(|c| c.id == id)
    }

    /// Insert or replace the row for `id`.
    ///
    /// A repeated start for a live id replaces the row in place; the press
    /// source should never do that, but the table stays one-row-per-id.
    pub(crate) fn insert(&mut self, id: ContactId, state: ContactState<T>, press: Press<T>) {
        match self.get_mut(id) {
            Some(row) => {
                row.state = state;
                row.press = press;
            }
            None => self.rows.push(Contact { id, state, press }),
        }
    }

    pub(crate) fn set_state(&mut self, id: ContactId, state: ContactState<T>) {
        if let Some(row) = self.get_mut(id) {
            row.state = state;
        }
    }

    pub(crate) fn remove(&mut self, id: ContactId) -> Option<Contact<T>> {
        let idx = self.rows.iter().position(|c| c.id == id)?;
        Some(self.rows.remove(idx))
    }

    /// Targets of every contact other than `id`, in insertion order.
    pub(crate) fn others(&self, id: ContactId) -> impl Iterator<Item = &T> {
        self.rows
            .iter()
            .filter(move |c| c.id != id)
            .filter_map(|c| c.state.target())
    }

    /// Empty the table, yielding every row in insertion order.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = Contact<T>> + '_ {
        self.rows.drain(..)
    }

    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> ContactId {
        ContactId::new(n)
    }

    fn tracked(c: char) -> ContactState<char> {
        ContactState::Tracked(c)
    }

    #[test]
    fn insert_get_remove() {
        let mut table = ContactTable::default();
        table.insert(id(1), tracked('a'), Press::on('a'));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(id(1)).map(|c| &c.state), Some(&tracked('a')));

        let row = table.remove(id(1)).unwrap();
        assert_eq!(row.state, tracked('a'));
        assert!(table.is_empty());
        assert!(table.remove(id(1)).is_none());
    }

    #[test]
    fn repeated_insert_keeps_one_row() {
        let mut table = ContactTable::default();
        table.insert(id(1), tracked('a'), Press::on('a'));
        table.insert(id(1), tracked('b'), Press::on('b'));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(id(1)).unwrap().state, tracked('b'));
    }

    #[test]
    fn others_skips_self_and_vacant() {
        let mut table = ContactTable::default();
        table.insert(id(1), tracked('a'), Press::on('a'));
        table.insert(id(2), ContactState::Vacant, Press::empty(Default::default()));
        table.insert(id(3), ContactState::HandwritingOwned('p'), Press::on('p'));
        table.insert(id(4), tracked('d'), Press::on('d'));

        let others: Vec<_> = table.others(id(4)).copied().collect();
        assert_eq!(others, ['a', 'p']);
    }

    #[test]
    fn drain_preserves_insertion_order() {
        let mut table = ContactTable::default();
        table.insert(id(5), tracked('x'), Press::on('x'));
        table.insert(id(2), tracked('y'), Press::on('y'));

        let ids: Vec<_> = table.drain().map(|c| c.id).collect();
        assert_eq!(ids, [id(5), id(2)]);
        assert!(table.is_empty());
    }

    #[test]
    fn state_target_accessors() {
        assert_eq!(ContactState::<char>::Vacant.target(), None);
        assert_eq!(tracked('k').target(), Some(&'k'));
        assert!(ContactState::HandwritingOwned('p').is_handwriting());
        assert!(!tracked('k').is_handwriting());
    }
}
