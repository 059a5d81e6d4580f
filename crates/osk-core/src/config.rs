#![forbid(unsafe_code)]

//! Timing configuration for target resolution.
//!
//! The engine runs on two fixed timeouts: how long a lone contact must stay
//! on one key before it counts as a long-press, and how soon a second release
//! on the same key must follow the first to count as a double-tap.
//! [`TimingConfig::default()`] yields exactly those constants, and nothing in
//! the core reads or changes them at runtime.
//!
//! The `timing-config` feature (off by default) is a host-side override: an
//! embedding application that needs different values (accessibility
//! profiles, test rigs) loads them from its own file and passes the result to
//! `ActiveTargets::start`. The engine itself never loads configuration.
//!
//! ```toml
//! # osk-timing.toml
//! long_press_ms = 700
//! double_tap_ms = 450
//! ```

#[cfg(feature = "timing-config")]
use std::path::Path;

use thiserror::Error;
use web_time::Duration;

/// Hold time before a lone contact is long-pressed.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(700);

/// Window in which a second release on the same target is a double-tap.
pub const DOUBLE_TAP_TIMEOUT: Duration = Duration::from_millis(450);

/// Timeouts used by the resolution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    pub long_press_timeout: Duration,
    pub double_tap_timeout: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            long_press_timeout: LONG_PRESS_TIMEOUT,
            double_tap_timeout: DOUBLE_TAP_TIMEOUT,
        }
    }
}

impl TimingConfig {
    /// Check that both timeouts are non-zero.
    ///
    /// A zero timeout would fire in the same instant it was armed, so a
    /// long-press could re-arm itself forever.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_press_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout {
                field: "long_press_timeout",
            });
        }
        if self.double_tap_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout {
                field: "double_tap_timeout",
            });
        }
        Ok(())
    }

    /// Load from a TOML string.
    #[cfg(feature = "timing-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw: serde_impl::RawTiming = toml::from_str(s)?;
        let config = Self::from(raw);
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "timing-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "timing-config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let raw: serde_impl::RawTiming = serde_json::from_str(s)?;
        let config = Self::from(raw);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "timing-config")]
mod serde_impl {
    use serde::{Deserialize, Serialize};
    use web_time::Duration;

    use super::TimingConfig;

    /// On-disk form: whole milliseconds, missing fields take the defaults.
    #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub(super) struct RawTiming {
        pub long_press_ms: u64,
        pub double_tap_ms: u64,
    }

    impl Default for RawTiming {
        fn default() -> Self {
            Self::from(TimingConfig::default())
        }
    }

    impl From<TimingConfig> for RawTiming {
        fn from(config: TimingConfig) -> Self {
            Self {
                long_press_ms: config.long_press_timeout.as_millis() as u64,
                double_tap_ms: config.double_tap_timeout.as_millis() as u64,
            }
        }
    }

    impl From<RawTiming> for TimingConfig {
        fn from(raw: RawTiming) -> Self {
            Self {
                long_press_timeout: Duration::from_millis(raw.long_press_ms),
                double_tap_timeout: Duration::from_millis(raw.double_tap_ms),
            }
        }
    }
}

/// Errors that can occur when building or loading a timing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "timing-config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "timing-config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be non-zero")]
    ZeroTimeout { field: &'static str },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
