#![forbid(unsafe_code)]

//! Press-to-target resolution for on-screen keyboards.
//!
//! # Role in osk
//! `osk-targets` is the decision core between the touch capture layer and the
//! IME. It decides which logical key each finger is on and when that key is
//! activated, long-pressed, committed, double-tapped, or cancelled. It also
//! decides when the alternate-character menu or the handwriting surface takes
//! over a contact.
//!
//! It does not decide which character a key produces, render anything, or
//! persist state.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut engine = ActiveTargets::start(
//!     TimingConfig::default(),
//!     &mut press_source,
//!     Peripherals { menu, handwriting, observer },
//! )?;
//! engine.press_start(&press, id, Instant::now());
//! // host loop: sleep until engine.next_deadline(), then engine.advance(now)
//! let peripherals = engine.stop(&mut press_source);
//! ```

pub mod contact_table;
pub mod engine;
pub mod error;

pub use contact_table::ContactState;
pub use engine::{ActiveTargets, Peripherals};
pub use error::{EngineError, Result};
