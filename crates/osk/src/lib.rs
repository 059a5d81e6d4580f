#![forbid(unsafe_code)]

//! osk public facade crate.
//!
//! Re-exports the press vocabulary from `osk-core` and the resolution engine
//! from `osk-targets`, plus a prelude for embedding the engine in a keyboard
//! view.
//!
//! ```rust,ignore
//! use osk::prelude::*;
//!
//! let mut engine = ActiveTargets::start(
//!     TimingConfig::default(),
//!     &mut touch_source,
//!     Peripherals { menu, handwriting, observer },
//! )?;
//! engine.press_start(&Press::on(key), ContactId::new(0), Instant::now());
//! ```

// --- Core re-exports -------------------------------------------------------

pub use osk_core::{
    AltMenuArbiter, ConfigError, ContactId, DOUBLE_TAP_TIMEOUT, HandwritingArbiter,
    LONG_PRESS_TIMEOUT, NoAltMenu, NoHandwriting, Point, Press, PressNotification, PressSink,
    PressSource, Target, TargetEvent, TargetObserver, TimingConfig,
};

#[cfg(feature = "tracing-json")]
pub use osk_core::logging::init_json_logging;

// --- Engine re-exports -----------------------------------------------------

pub use osk_targets::{ActiveTargets, ContactState, EngineError, Peripherals, Result};

/// Clock type every handler takes as `now`.
pub use web_time::{Duration, Instant};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    //! Everything needed to wire the engine into a view.

    pub use crate::{
        ActiveTargets, AltMenuArbiter, ContactId, HandwritingArbiter, Instant, Peripherals, Point,
        Press, PressSink, PressSource, Target, TargetEvent, TargetObserver, TimingConfig,
    };
}
