#![forbid(unsafe_code)]

use osk_core::PressSource;

/// Press source that only records its subscription lifecycle.
#[derive(Debug, Clone, Default)]
pub struct MockPressSource {
    starts: usize,
    stops: usize,
}

impl MockPressSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.starts > self.stops
    }

    #[must_use]
    pub fn starts(&self) -> usize {
        self.starts
    }

    #[must_use]
    pub fn stops(&self) -> usize {
        self.stops
    }
}

impl PressSource for MockPressSource {
    fn start(&mut self) {
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}
