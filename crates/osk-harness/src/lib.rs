#![forbid(unsafe_code)]

//! Test harness for the osk input core.
//!
//! Everything here depends on `osk-core` only, so the engine crate can pull
//! the harness in as a dev-dependency without a cycle.
//!
//! - [`TestKey`]: a concrete [`Target`](osk_core::Target) with key, selection,
//!   alternate, and handwriting-pad flavours.
//! - [`VirtualClock`] and [`PressScript`]: deterministic, millisecond-addressed
//!   press streams replayed into any [`PressSink`](osk_core::PressSink).
//! - [`MockAltMenu`], [`MockHandwriting`], [`MockPressSource`]: recording
//!   collaborators with realistic behaviour.
//! - [`with_captured_tracing`]: collect `tracing` events emitted by a closure.

pub mod key;
pub mod log_capture;
pub mod mock_handwriting;
pub mod mock_menu;
pub mod mock_source;
pub mod script;

pub use key::TestKey;
pub use log_capture::{CapturedEvent, CapturedLog, with_captured_tracing};
pub use mock_handwriting::{HandwritingCall, MockHandwriting};
pub use mock_menu::{MenuCall, MockAltMenu, Rect};
pub use mock_source::MockPressSource;
pub use script::{PressScript, VirtualClock};
