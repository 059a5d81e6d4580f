#![forbid(unsafe_code)]

//! Recording handwriting surface.
//!
//! Writing starts on the first forwarded press-start and ends on the
//! forwarded press-end, which is how a single-stroke pad behaves.

use osk_core::{HandwritingArbiter, Point, Press};

use crate::key::TestKey;

/// A call the engine forwarded to the pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandwritingCall {
    Start(Point),
    Move(Point),
    End(TestKey),
}

/// Handwriting surface double.
#[derive(Debug, Clone, Default)]
pub struct MockHandwriting {
    writing: bool,
    calls: Vec<HandwritingCall>,
}

impl MockHandwriting {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the writing flag (test setup).
    pub fn set_writing(&mut self, writing: bool) {
        self.writing = writing;
    }

    #[must_use]
    pub fn calls(&self) -> &[HandwritingCall] {
        &self.calls
    }
}

impl HandwritingArbiter<TestKey> for MockHandwriting {
    fn is_writing(&self) -> bool {
        self.writing
    }

    fn is_handwriting_pad(&self, target: &TestKey) -> bool {
        target.is_pad()
    }

    fn press_start(&mut self, press: &Press<TestKey>) {
        self.calls.push(HandwritingCall::Start(press.position));
        self.writing = true;
    }

    fn press_move(&mut self, press: &Press<TestKey>) {
        self.calls.push(HandwritingCall::Move(press.position));
    }

    fn press_end(&mut self, target: &TestKey) {
        self.calls.push(HandwritingCall::End(*target));
        self.writing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_toggles_writing() {
        let mut pad = MockHandwriting::new();
        assert!(!pad.is_writing());

        pad.press_start(&Press::at(Some(TestKey::pad()), Point::new(1.0, 1.0)));
        assert!(pad.is_writing());

        pad.press_end(&TestKey::pad());
        assert!(!pad.is_writing());
        assert_eq!(
            pad.calls(),
            [
                HandwritingCall::Start(Point::new(1.0, 1.0)),
                HandwritingCall::End(TestKey::pad()),
            ]
        );
    }
}
