#![forbid(unsafe_code)]

//! Recording alternate-character menu.
//!
//! The mock lays its alternates out left to right in equal-width slots across
//! a fixed locked area. `show` only succeeds for keys that were registered
//! with alternates, like a real popup declining keys with nothing to offer.

use osk_core::{AltMenuArbiter, Point, Press};

use crate::key::TestKey;

/// Axis-aligned rectangle, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// A command the engine issued to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCall {
    Show(TestKey),
    Hide,
}

/// Alternate-character menu double.
#[derive(Debug, Clone)]
pub struct MockAltMenu {
    area: Rect,
    alternates: Vec<(TestKey, Vec<TestKey>)>,
    shown_for: Option<TestKey>,
    calls: Vec<MenuCall>,
}

impl MockAltMenu {
    /// A menu whose popup, when shown, claims `area`.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            alternates: Vec::new(),
            shown_for: None,
            calls: Vec::new(),
        }
    }

    /// Register the alternates offered for `base`.
    #[must_use]
    pub fn with_alternates(
        mut self,
        base: TestKey,
        alternates: impl IntoIterator<Item = TestKey>,
    ) -> Self {
        self.alternates.push((base, alternates.into_iter().collect()));
        self
    }

    /// Put the popup up without going through `show` (test setup).
    pub fn force_show(&mut self, base: TestKey) {
        self.shown_for = Some(base);
    }

    /// Key the popup is currently shown for.
    #[must_use]
    pub fn shown_for(&self) -> Option<TestKey> {
        self.shown_for
    }

    #[must_use]
    pub fn calls(&self) -> &[MenuCall] {
        &self.calls
    }

    #[must_use]
    pub fn show_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, MenuCall::Show(_)))
            .count()
    }

    #[must_use]
    pub fn hide_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == MenuCall::Hide).count()
    }

    /// Centre of the `index`th alternate slot of the popup for `base`.
    #[must_use]
    pub fn slot_center(&self, base: TestKey, index: usize) -> Point {
        let n = self.alternates_for(base).len().max(1) as f32;
        let slot = self.area.width / n;
        Point::new(
            self.area.x + slot * (index as f32 + 0.5),
            self.area.y + self.area.height / 2.0,
        )
    }

    fn alternates_for(&self, base: TestKey) -> &[TestKey] {
        self.alternates
            .iter()
            .find(|(b, _)| *b == base)
            .map(|(_, alts)| alts.as_slice())
            .unwrap_or_default()
    }

    fn current(&self) -> &[TestKey] {
        match self.shown_for {
            Some(base) => self.alternates_for(base),
            None => &[],
        }
    }
}

impl AltMenuArbiter<TestKey> for MockAltMenu {
    fn is_shown(&self) -> bool {
        self.shown_for.is_some()
    }

    fn show(&mut self, target: &TestKey) {
        self.calls.push(MenuCall::Show(*target));
        if !self.alternates_for(*target).is_empty() {
            self.shown_for = Some(*target);
        }
    }

    fn hide(&mut self) {
        self.calls.push(MenuCall::Hide);
        self.shown_for = None;
    }

    fn is_menu_target(&self, target: &TestKey) -> bool {
        self.current().contains(target)
    }

    fn is_in_menu_area(&self, press: &Press<TestKey>) -> bool {
        self.is_shown() && self.area.contains(press.position)
    }

    fn menu_target(&self, press: &Press<TestKey>) -> Option<TestKey> {
        if !self.is_in_menu_area(press) {
            return None;
        }
        let alts = self.current();
        if alts.is_empty() {
            return None;
        }
        let slot = self.area.width / alts.len() as f32;
        let idx = ((press.position.x - self.area.x) / slot) as usize;
        alts.get(idx.min(alts.len() - 1)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: TestKey = TestKey::key("e");
    const E_ACUTE: TestKey = TestKey::alternate("é");
    const E_GRAVE: TestKey = TestKey::alternate("è");

    fn menu() -> MockAltMenu {
        MockAltMenu::new(Rect::new(0.0, 0.0, 100.0, 40.0)).with_alternates(E, [E_ACUTE, E_GRAVE])
    }

    #[test]
    fn show_declines_keys_without_alternates() {
        let mut m = menu();
        m.show(&TestKey::key("q"));
        assert!(!m.is_shown());
        m.show(&E);
        assert_eq!(m.shown_for(), Some(E));
        assert_eq!(m.show_count(), 2);
    }

    #[test]
    fn resolves_slots_inside_area_only() {
        let mut m = menu();
        m.show(&E);
        let left = Press::at(Some(E), m.slot_center(E, 0));
        let right = Press::at(Some(E), m.slot_center(E, 1));
        let outside = Press::at(Some(E), Point::new(50.0, 80.0));

        assert_eq!(m.menu_target(&left), Some(E_ACUTE));
        assert_eq!(m.menu_target(&right), Some(E_GRAVE));
        assert!(!m.is_in_menu_area(&outside));
        assert_eq!(m.menu_target(&outside), None);
        assert!(m.is_menu_target(&E_GRAVE));
    }

    #[test]
    fn hidden_menu_claims_nothing() {
        let m = menu();
        let p = Press::at(Some(E), Point::new(10.0, 10.0));
        assert!(!m.is_in_menu_area(&p));
        assert!(!m.is_menu_target(&E_ACUTE));
    }
}
