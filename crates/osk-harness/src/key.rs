#![forbid(unsafe_code)]

//! A concrete target type for tests.

use std::fmt;

use osk_core::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Kind {
    Key,
    Selection,
    Alternate,
    Pad,
}

/// Named key handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestKey {
    name: &'static str,
    kind: Kind,
}

impl TestKey {
    /// An ordinary key cap.
    #[must_use]
    pub const fn key(name: &'static str) -> Self {
        Self {
            name,
            kind: Kind::Key,
        }
    }

    /// A scrollable selection target (candidate strip entry).
    #[must_use]
    pub const fn selection(name: &'static str) -> Self {
        Self {
            name,
            kind: Kind::Selection,
        }
    }

    /// An entry of the alternate-character popup.
    #[must_use]
    pub const fn alternate(name: &'static str) -> Self {
        Self {
            name,
            kind: Kind::Alternate,
        }
    }

    /// The handwriting surface.
    #[must_use]
    pub const fn pad() -> Self {
        Self {
            name: "handwriting-pad",
            kind: Kind::Pad,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is_pad(&self) -> bool {
        self.kind == Kind::Pad
    }

    #[must_use]
    pub fn is_alternate(&self) -> bool {
        self.kind == Kind::Alternate
    }
}

impl fmt::Debug for TestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Key => write!(f, "key({})", self.name),
            Kind::Selection => write!(f, "selection({})", self.name),
            Kind::Alternate => write!(f, "alt({})", self.name),
            Kind::Pad => f.write_str("pad"),
        }
    }
}

impl Target for TestKey {
    fn is_selection(&self) -> bool {
        self.kind == Kind::Selection
    }
}
