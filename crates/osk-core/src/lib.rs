#![forbid(unsafe_code)]

//! Core: contacts, presses, targets, and the collaborator contracts.
//!
//! # Role in osk
//! `osk-core` is the shared vocabulary layer. It owns the normalized press
//! types the touch capture layer produces, the [`Target`](target::Target)
//! trait logical keys implement, the lifecycle events the resolution engine
//! emits, and the traits for the peripheral arbiters (alternate-character
//! menu and handwriting surface) the engine consults.
//!
//! # Primary responsibilities
//! - **Press**: contact ids, positions, and per-notification snapshots.
//! - **TargetEvent / TargetObserver**: key-target lifecycle callbacks.
//! - **Arbiters**: query/command contracts for the menu and handwriting pad.
//! - **TimerSlot**: single-shot cancellable deadlines driven by `now`.
//! - **TimingConfig**: long-press and double-tap timeouts.
//!
//! # How it fits in the system
//! The engine (`osk-targets`) consumes these types and implements
//! [`PressSink`](press::PressSink). Test fixtures (`osk-harness`) implement
//! the arbiter traits without depending on the engine.

pub mod arbiter;
pub mod config;
pub mod logging;
pub mod press;
pub mod target;
pub mod target_event;
pub mod timer;

pub use arbiter::{AltMenuArbiter, HandwritingArbiter, NoAltMenu, NoHandwriting};
pub use config::{ConfigError, DOUBLE_TAP_TIMEOUT, LONG_PRESS_TIMEOUT, TimingConfig};
pub use press::{ContactId, Point, Press, PressNotification, PressSink, PressSource};
pub use target::Target;
pub use target_event::{TargetEvent, TargetObserver};
pub use timer::TimerSlot;
